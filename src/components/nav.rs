//! Navigation bar
//!
//! `NavItem` is a stateless widget for one section button. `NavBar` lays the
//! items out, remembers where each was drawn, and maps clicks back to
//! `SelectSection`.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::hit;
use crate::model::Section;
use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const PRODUCT_TITLE: &str = "ClimateAI Predictor";

/// A single section button
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub section: Section,
    pub active: bool,
}

impl NavItem {
    pub fn new(section: Section, active: bool) -> Self {
        Self { section, active }
    }

    fn text(&self) -> String {
        format!(" {} {} ", self.section.icon().glyph(), self.section.label())
    }

    /// Columns needed to draw the item
    pub fn width(&self) -> u16 {
        self.text().width() as u16
    }

    pub fn on_activate(&self) -> Action {
        Action::SelectSection(self.section)
    }
}

impl Widget for NavItem {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.active {
            Style::default()
                .fg(Color::Green)
                .bg(Color::Rgb(220, 252, 231))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        Paragraph::new(Line::from(Span::styled(self.text(), style))).render(area, buf);
    }
}

/// Top navigation bar with the product title and one item per section
#[derive(Default)]
pub struct NavBar {
    /// Active section, set by the App before drawing
    active: Section,
    /// Where each item was last drawn
    item_areas: Vec<(Section, Rect)>,
}

impl NavBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_active(&mut self, section: Section) {
        self.active = section;
    }

    pub fn item_areas(&self) -> &[(Section, Rect)] {
        &self.item_areas
    }
}

impl Component for NavBar {
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }

        let action = self
            .item_areas
            .iter()
            .find(|(_, area)| hit(*area, mouse.column, mouse.row))
            .map(|(section, _)| NavItem::new(*section, false).on_activate());
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let items: Vec<NavItem> = Section::all()
            .into_iter()
            .map(|section| NavItem::new(section, section == self.active))
            .collect();

        let title_width = PRODUCT_TITLE.width() as u16 + 4;
        let mut constraints = vec![Constraint::Length(title_width)];
        for item in &items {
            constraints.push(Constraint::Length(item.width()));
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(inner);

        let title = Paragraph::new(Line::from(Span::styled(
            format!(" {} ", PRODUCT_TITLE),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, chunks[0]);

        self.item_areas.clear();
        for (i, item) in items.into_iter().enumerate() {
            let item_area = chunks[1 + i * 2];
            self.item_areas.push((item.section, item_area));
            frame.render_widget(item, item_area);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_nav_item_reports_its_section() {
        let item = NavItem::new(Section::Resources, false);
        assert_eq!(item.on_activate(), Action::SelectSection(Section::Resources));
    }

    #[test]
    fn test_nav_item_render_is_pure() {
        let area = Rect::new(0, 0, 20, 1);
        let mut first = Buffer::empty(area);
        let mut second = Buffer::empty(area);
        NavItem::new(Section::About, true).render(area, &mut first);
        NavItem::new(Section::About, true).render(area, &mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn test_click_on_item_selects_section() {
        let mut terminal = Terminal::new(TestBackend::new(100, 3)).unwrap();
        let mut nav = NavBar::new();
        terminal
            .draw(|frame| {
                nav.draw(frame, frame.area()).unwrap();
            })
            .unwrap();

        let (section, area) = nav.item_areas()[2];
        assert_eq!(section, Section::Resources);
        let action = nav.handle_mouse_event(click(area.x, area.y)).unwrap();
        assert_eq!(action, Some(Action::SelectSection(Section::Resources)));
    }

    #[test]
    fn test_click_on_title_does_nothing() {
        let mut terminal = Terminal::new(TestBackend::new(100, 3)).unwrap();
        let mut nav = NavBar::new();
        terminal
            .draw(|frame| {
                nav.draw(frame, frame.area()).unwrap();
            })
            .unwrap();

        assert_eq!(nav.handle_mouse_event(click(2, 0)).unwrap(), None);
    }
}
