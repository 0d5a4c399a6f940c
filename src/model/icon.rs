//! Icon keys
//!
//! Icons are plain data. The render layer maps each key to a glyph.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    BookOpen,
    Library,
    Satellite,
    Brain,
    CloudRain,
    BarChart,
    Map,
    Mail,
    Twitter,
    Github,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Home => "⌂",
            Icon::BookOpen => "📖",
            Icon::Library => "📚",
            Icon::Satellite => "🛰",
            Icon::Brain => "🧠",
            Icon::CloudRain => "🌧",
            Icon::BarChart => "📊",
            Icon::Map => "🗺",
            Icon::Mail => "✉",
            Icon::Twitter => "🐦",
            Icon::Github => "🐙",
        }
    }
}
