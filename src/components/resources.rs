//! Resources section

use crate::component::Component;
use anyhow::Result;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const RESOURCES: [(&str, &str); 3] = [
    (
        "Research Papers",
        "Access the latest climate research and AI prediction methodologies.",
    ),
    (
        "Data Sources",
        "Explore our comprehensive collection of climate data sources.",
    ),
    (
        "API Documentation",
        "Learn how to integrate our climate predictions into your applications.",
    ),
];

#[derive(Default)]
pub struct ResourcesComponent;

impl ResourcesComponent {
    pub fn new() -> Self {
        Self
    }
}

impl Component for ResourcesComponent {
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                " Climate Resources ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let mut constraints = vec![Constraint::Length(4); RESOURCES.len()];
        constraints.push(Constraint::Min(0));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(constraints)
            .split(inner);

        for ((title, description), row) in RESOURCES.iter().zip(rows.iter()) {
            let entry = Paragraph::new(vec![
                Line::from(Span::styled(
                    *title,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(*description, Style::default().fg(Color::Gray))),
            ])
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::LEFT)
                    .border_style(Style::default().fg(Color::Green)),
            );
            frame.render_widget(entry, *row);
        }

        Ok(())
    }
}
