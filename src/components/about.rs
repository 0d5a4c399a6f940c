//! About section
//!
//! Product blurb, capability cards and the data-source progress block.
//! Owns card focus; everything else is fixed content.

use crate::action::Action;
use crate::component::Component;
use crate::components::card::CapabilityCard;
use crate::components::layout::hit;
use crate::model::Capability;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Paragraph, Wrap},
    Frame,
};

/// Data sources block: (title, percent, caption)
const DATA_SOURCES: [(&str, u16, &str); 3] = [
    (
        "Satellite & Radar Imagery",
        90,
        "Processing 90+ satellite feeds daily",
    ),
    (
        "Historical Climate Data",
        95,
        "150+ years of temperature and precipitation records",
    ),
    ("Real-time Sensors", 85, "10,000+ ground stations worldwide"),
];

const CARD_COLUMNS: usize = 2;

#[derive(Default)]
pub struct AboutComponent {
    /// Index into `Capability::all()`
    pub focused_card: usize,
    /// Where each card was last drawn
    card_areas: Vec<(Capability, Rect)>,
}

impl AboutComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused_capability(&self) -> Capability {
        let all = Capability::all();
        all[self.focused_card.min(all.len() - 1)]
    }

    pub fn card_areas(&self) -> &[(Capability, Rect)] {
        &self.card_areas
    }

    fn draw_intro(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "About ClimateAI Predictor",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "ClimateAI Predictor is a cutting-edge artificial intelligence system designed to \
                 forecast climate conditions by analyzing historical weather data combined with \
                 real-time weather imagery. Our advanced machine learning models process multiple \
                 data sources to provide accurate predictions and insights for climate change \
                 analysis.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "AI Model Confidence: ",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "Our predictions achieve 85% accuracy through continuous learning from vast \
                     datasets and real-time validation against actual climate observations.",
                    Style::default().fg(Color::Green),
                ),
            ]),
        ];

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(paragraph, area);
    }

    fn draw_cards(&mut self, frame: &mut Frame, area: Rect) {
        let all = Capability::all();
        let rows = all.len().div_ceil(CARD_COLUMNS);
        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
            .split(area);

        self.card_areas.clear();
        for (row, chunk) in all.chunks(CARD_COLUMNS).enumerate() {
            let column_areas = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, CARD_COLUMNS as u32); CARD_COLUMNS])
                .split(row_areas[row]);

            for (column, capability) in chunk.iter().enumerate() {
                let index = row * CARD_COLUMNS + column;
                let card_area = column_areas[column];
                self.card_areas.push((*capability, card_area));
                frame.render_widget(
                    CapabilityCard::new(*capability, index == self.focused_card),
                    card_area,
                );
            }
        }
    }

    fn draw_data_sources(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                " Data Sources & Processing ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(2); DATA_SOURCES.len()])
            .split(inner);

        for ((title, percent, caption), row) in DATA_SOURCES.iter().zip(rows.iter()) {
            let gauge = LineGauge::default()
                .label(Span::styled(
                    format!("{:<28}", title),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .filled_style(Style::default().fg(Color::Green))
                .unfilled_style(Style::default().fg(Color::DarkGray))
                .ratio(f64::from(*percent) / 100.0);
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Length(1)])
                .split(*row);
            frame.render_widget(gauge, parts[0]);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!("  {}", caption),
                    Style::default().fg(Color::Gray),
                )),
                parts[1],
            );
        }
    }
}

impl Component for AboutComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('l') | KeyCode::Right => Some(Action::NextCard),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevCard),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::CardBelow),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::CardAbove),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ActivateCard),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }

        let clicked = self
            .card_areas
            .iter()
            .position(|(_, area)| hit(*area, mouse.column, mouse.row));
        match clicked {
            Some(index) => {
                self.focused_card = index;
                Ok(CapabilityCard::new(self.card_areas[index].0, true).on_activate())
            }
            None => Ok(None),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let count = Capability::all().len();
        match action {
            Action::NextCard => {
                self.focused_card = (self.focused_card + 1).min(count - 1);
                Ok(None)
            }
            Action::PrevCard => {
                self.focused_card = self.focused_card.saturating_sub(1);
                Ok(None)
            }
            Action::CardBelow => {
                self.focused_card = (self.focused_card + CARD_COLUMNS).min(count - 1);
                Ok(None)
            }
            Action::CardAbove => {
                // Top row has nothing above it
                if self.focused_card >= CARD_COLUMNS {
                    self.focused_card -= CARD_COLUMNS;
                }
                Ok(None)
            }
            Action::ActivateCard => {
                Ok(CapabilityCard::new(self.focused_capability(), true).on_activate())
            }
            _ => Ok(None),
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8),
                Constraint::Min(9),
                Constraint::Length(2 + DATA_SOURCES.len() as u16 * 2),
            ])
            .split(area);

        self.draw_intro(frame, chunks[0]);
        self.draw_cards(frame, chunks[1]);
        self.draw_data_sources(frame, chunks[2]);
        Ok(())
    }
}
