//! Dashboard section
//!
//! Zero-argument view: headline figures and progress gauges, all fixed.

use crate::component::Component;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Headline figures: (label, value, caption)
const HEADLINES: [(&str, &str, &str); 4] = [
    ("Prediction Accuracy", "85%", "validated against observations"),
    ("Satellite Feeds", "90+", "processed daily"),
    ("Ground Stations", "10,000+", "real-time sensors worldwide"),
    ("Historical Records", "150+ yrs", "temperature and precipitation"),
];

/// Model performance gauges: (label, percent)
const MODEL_GAUGES: [(&str, u16); 3] = [
    ("Overall prediction confidence", 85),
    ("Image pattern recognition (CNN)", 92),
    ("Multi-source data coverage", 90),
];

#[derive(Default)]
pub struct DashboardComponent;

impl DashboardComponent {
    pub fn new() -> Self {
        Self
    }
}

impl Component for DashboardComponent {
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(5),
                Constraint::Length(2 + MODEL_GAUGES.len() as u16 * 2),
                Constraint::Min(0),
            ])
            .split(area);

        let intro = Paragraph::new(vec![
            Line::from(Span::styled(
                "Climate Prediction Overview",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Forecasts combining historical weather records with real-time satellite, \
                 radar and infrared imagery.",
                Style::default().fg(Color::Gray),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::NONE));
        frame.render_widget(intro, chunks[0]);

        let tiles = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, HEADLINES.len() as u32); HEADLINES.len()])
            .split(chunks[1]);
        for ((label, value, caption), tile) in HEADLINES.iter().zip(tiles.iter()) {
            let paragraph = Paragraph::new(vec![
                Line::from(Span::styled(
                    *value,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(*caption, Style::default().fg(Color::DarkGray))),
            ])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(format!(" {} ", label)),
            );
            frame.render_widget(paragraph, *tile);
        }

        let gauge_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Model Performance ");
        let gauge_inner = gauge_block.inner(chunks[2]);
        frame.render_widget(gauge_block, chunks[2]);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(2); MODEL_GAUGES.len()])
            .split(gauge_inner);
        for ((label, percent), row) in MODEL_GAUGES.iter().zip(rows.iter()) {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Length(1)])
                .split(*row);
            frame.render_widget(
                Paragraph::new(Span::styled(*label, Style::default().fg(Color::White))),
                parts[0],
            );
            frame.render_widget(
                Gauge::default()
                    .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
                    .percent(*percent)
                    .label(format!("{}%", percent)),
                parts[1],
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_dashboard_shows_headlines() {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        let mut dashboard = DashboardComponent::new();
        terminal
            .draw(|frame| {
                dashboard.draw(frame, frame.area()).unwrap();
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Climate Prediction Overview"));
        assert!(text.contains("Prediction Accuracy"));
        assert!(text.contains("10,000+"));
        assert!(text.contains("92%"));
    }
}
