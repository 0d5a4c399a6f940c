//! Generic overlay dialog
//!
//! Renders nothing while closed. When open it shows a title, arbitrary body
//! lines and a close control. Visibility belongs to the caller; the dialog
//! only reports `on_close` and keeps its own scroll position.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{hit, inset};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame,
};

const CLOSE_LABEL: &str = " [x] Close ";
const PAGE: usize = 10;

pub struct Modal {
    title: String,
    body: Vec<Line<'static>>,
    on_close: Action,
    /// Visibility as last reported by the owner
    open: bool,
    pub scroll_offset: usize,
    /// Where the close control was last drawn
    close_area: Option<Rect>,
}

impl Modal {
    pub fn new(title: impl Into<String>, body: Vec<Line<'static>>, on_close: Action) -> Self {
        Self {
            title: title.into(),
            body,
            on_close,
            open: false,
            scroll_offset: 0,
            close_area: None,
        }
    }

    /// Sync with the owner's flag. Reopening starts at the top.
    pub fn set_open(&mut self, open: bool) {
        if open && !self.open {
            self.scroll_offset = 0;
        }
        if !open {
            self.close_area = None;
        }
        self.open = open;
    }

    pub fn close_area(&self) -> Option<Rect> {
        self.close_area
    }
}

impl Component for Modal {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if !self.open {
            return Ok(None);
        }

        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('x') => Some(self.on_close),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if !self.open {
            return Ok(None);
        }

        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self
                .close_area
                .filter(|area| hit(*area, mouse.column, mouse.row))
                .map(|_| self.on_close),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ScrollDown => self.scroll_offset = self.scroll_offset.saturating_add(1),
            Action::ScrollUp => self.scroll_offset = self.scroll_offset.saturating_sub(1),
            Action::PageDown => self.scroll_offset = self.scroll_offset.saturating_add(PAGE),
            Action::PageUp => self.scroll_offset = self.scroll_offset.saturating_sub(PAGE),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        if !self.open {
            return Ok(());
        }

        let dialog_area = inset(area, 6, 2);
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(format!(" {} ", self.title))
            .title_style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .title_bottom(
                Line::from(Span::styled(
                    CLOSE_LABEL,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Right),
            );

        let body_area = block.inner(dialog_area).inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        let paragraph = Paragraph::new(self.body.clone()).wrap(Wrap { trim: false });
        let total = paragraph.line_count(body_area.width);
        let visible_height = body_area.height as usize;
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        frame.render_widget(block, dialog_area);
        frame.render_widget(
            paragraph.scroll((self.scroll_offset as u16, 0)),
            body_area,
        );

        if total > visible_height {
            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(self.scroll_offset);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        let label_width = CLOSE_LABEL.len() as u16;
        let bottom = dialog_area.y + dialog_area.height.saturating_sub(1);
        let right = (dialog_area.x + dialog_area.width).saturating_sub(label_width + 1);
        self.close_area = Some(Rect::new(
            right.max(dialog_area.x),
            bottom,
            label_width.min(dialog_area.width),
            1,
        ));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::modal_content;
    use crate::model::ModalId;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn sample_modal() -> Modal {
        let body = (0..60).map(|i| Line::from(format!("line {}", i))).collect();
        Modal::new(
            "Sample Dialog",
            body,
            Action::CloseModal(ModalId::ImageProcessing),
        )
    }

    fn render(modal: &mut Modal) -> String {
        render_sized(modal, 80, 30)
    }

    fn render_sized(modal: &mut Modal, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                modal.draw(frame, frame.area()).unwrap();
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_closed_modal_renders_nothing() {
        let mut modal = sample_modal();
        let text = render(&mut modal);
        assert!(text.trim().is_empty());
        assert!(modal.close_area().is_none());
    }

    #[test]
    fn test_open_modal_renders_title_body_and_close() {
        let mut modal = sample_modal();
        modal.set_open(true);
        let text = render(&mut modal);
        assert!(text.contains("Sample Dialog"));
        assert!(text.contains("line 0"));
        assert!(text.contains("[x] Close"));
        assert!(modal.close_area().is_some());
    }

    #[test]
    fn test_close_keys_report_on_close() {
        let mut modal = sample_modal();
        modal.set_open(true);
        for code in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('x')] {
            assert_eq!(
                modal.handle_key_event(key(code)).unwrap(),
                Some(Action::CloseModal(ModalId::ImageProcessing))
            );
        }
        // Reporting never changes visibility by itself
        assert!(modal.open);
    }

    #[test]
    fn test_closed_modal_ignores_keys() {
        let mut modal = sample_modal();
        assert_eq!(modal.handle_key_event(key(KeyCode::Esc)).unwrap(), None);
    }

    #[test]
    fn test_click_on_close_control() {
        let mut modal = sample_modal();
        modal.set_open(true);
        render(&mut modal);

        let area = modal.close_area().unwrap();
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: area.x + 1,
            row: area.y,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            modal.handle_mouse_event(click).unwrap(),
            Some(Action::CloseModal(ModalId::ImageProcessing))
        );

        let elsewhere = MouseEvent { column: 0, row: 0, ..click };
        assert_eq!(modal.handle_mouse_event(elsewhere).unwrap(), None);
    }

    #[test]
    fn test_scroll_and_reset_on_reopen() {
        let mut modal = sample_modal();
        modal.set_open(true);
        modal.update(Action::PageDown).unwrap();
        modal.update(Action::ScrollDown).unwrap();
        modal.update(Action::ScrollUp).unwrap();
        assert_eq!(modal.scroll_offset, 10);

        modal.set_open(false);
        modal.set_open(true);
        assert_eq!(modal.scroll_offset, 0);
    }

    #[test]
    fn test_word_wrapped_body_scrolls_to_the_end() {
        let mut modal = Modal::new(
            ModalId::ImageProcessing.title(),
            modal_content(ModalId::ImageProcessing),
            Action::CloseModal(ModalId::ImageProcessing),
        );
        modal.set_open(true);

        let text = render_sized(&mut modal, 60, 24);
        assert!(!text.contains("types."));

        modal.scroll_offset = 10_000;
        let text = render_sized(&mut modal, 60, 24);
        assert!(modal.scroll_offset > 0);
        assert!(text.contains("types."));
        assert!(text.contains("[x] Close"));
    }

    #[test]
    fn test_scroll_is_clamped_on_draw() {
        let mut modal = sample_modal();
        modal.set_open(true);
        modal.scroll_offset = 1000;
        render(&mut modal);
        assert!(modal.scroll_offset < 60);
    }
}
