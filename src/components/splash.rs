//! Splash screen component
//!
//! Shows the globe logo for a moment before the dashboard.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

const LOGO: [&str; 9] = [
    "      .-~~~~~~-.      ",
    "    .' ~~   ##  '.    ",
    "   /  ####  ~~~   \\   ",
    "  | ~~~  ###### ~~ |  ",
    "  |  ####  ~~  ### |  ",
    "  | ~~  ###   ~~~  |  ",
    "   \\  ~~~  ####   /   ",
    "    '.  ##   ~~ .'    ",
    "      '-......-'      ",
];

pub struct SplashComponent {
    start_time: Option<Instant>,
    duration: Duration,
}

impl Default for SplashComponent {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

impl SplashComponent {
    pub fn new(duration: Duration) -> Self {
        Self {
            start_time: None,
            duration,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.start_time
            .is_some_and(|t| t.elapsed() >= self.duration)
    }
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        self.start_time = Some(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Any key skips the splash
        match key.code {
            KeyCode::Char('q') => Ok(Some(Action::ForceQuit)),
            _ => Ok(Some(Action::SplashComplete)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick && self.is_complete() {
            return Ok(Some(Action::SplashComplete));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default(), area);

        let logo_height = LOGO.len() as u16;
        let logo_width = LOGO[0].width() as u16;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(area.height.saturating_sub(logo_height + 4) / 2),
                Constraint::Length(logo_height),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let logo: Vec<Line> = LOGO
            .iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .chars()
                    .map(|c| {
                        let style = match c {
                            '#' => Style::default().fg(Color::Green),
                            '~' => Style::default().fg(Color::Blue),
                            _ => Style::default().fg(Color::Gray),
                        };
                        Span::styled(c.to_string(), style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        let logo_x = area.x + area.width.saturating_sub(logo_width) / 2;
        let logo_rect = Rect::new(logo_x, chunks[1].y, logo_width.min(area.width), logo_height);
        frame.render_widget(Paragraph::new(logo), logo_rect);

        let title = Line::from(vec![
            Span::styled(
                "ClimateAI",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " Predictor",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(title).alignment(Alignment::Center),
            chunks[3],
        );

        let subtitle = Line::from(Span::styled(
            "Climate forecasting from weather records and satellite imagery",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(
            Paragraph::new(subtitle).alignment(Alignment::Center),
            chunks[4],
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_not_complete_before_init() {
        let splash = SplashComponent::new(Duration::ZERO);
        assert!(!splash.is_complete());
    }

    #[test]
    fn test_zero_duration_completes_on_tick() {
        let mut splash = SplashComponent::new(Duration::ZERO);
        splash.init().unwrap();
        assert_eq!(
            splash.update(Action::Tick).unwrap(),
            Some(Action::SplashComplete)
        );
    }

    #[test]
    fn test_any_key_skips() {
        let mut splash = SplashComponent::default();
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            splash.handle_key_event(key).unwrap(),
            Some(Action::SplashComplete)
        );
    }
}
