//! Top-level navigation sections

use crate::model::icon::Icon;
use serde::{Deserialize, Serialize};

/// The currently selected top-level navigation tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Dashboard,
    About,
    Resources,
}

impl Section {
    pub fn all() -> [Section; 3] {
        [Section::Dashboard, Section::About, Section::Resources]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::About => "About",
            Section::Resources => "Resources",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            Section::Dashboard => Icon::Home,
            Section::About => Icon::BookOpen,
            Section::Resources => Icon::Library,
        }
    }

    /// Position in the navigation bar
    pub fn index(&self) -> usize {
        match self {
            Section::Dashboard => 0,
            Section::About => 1,
            Section::Resources => 2,
        }
    }

    /// Next section, wrapping around
    pub fn next(&self) -> Section {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    /// Previous section, wrapping around
    pub fn previous(&self) -> Section {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_cycle_wraps() {
        assert_eq!(Section::Resources.next(), Section::Dashboard);
        assert_eq!(Section::Dashboard.previous(), Section::Resources);
        assert_eq!(Section::About.next(), Section::Resources);
    }

    #[test]
    fn test_section_serde_lowercase() {
        let json = serde_json::to_string(&Section::Resources).unwrap();
        assert_eq!(json, "\"resources\"");
        let parsed: Section = serde_json::from_str("\"about\"").unwrap();
        assert_eq!(parsed, Section::About);
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        assert!(serde_json::from_str::<Section>("\"settings\"").is_err());
    }
}
