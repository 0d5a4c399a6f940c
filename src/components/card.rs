//! Capability card widget

use crate::action::Action;
use crate::model::Capability;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// One capability: icon and title on the border, description inside
#[derive(Debug, Clone, Copy)]
pub struct CapabilityCard {
    pub capability: Capability,
    pub focused: bool,
}

impl CapabilityCard {
    pub fn new(capability: Capability, focused: bool) -> Self {
        Self {
            capability,
            focused,
        }
    }

    /// Cards without a detail dialog are display-only
    pub fn on_activate(&self) -> Option<Action> {
        self.capability.detail_modal().map(Action::OpenModal)
    }
}

impl Widget for CapabilityCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused {
            Color::Green
        } else {
            Color::DarkGray
        };

        let mut title = vec![
            Span::styled(
                format!(" {} ", self.capability.icon().glyph()),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                format!("{} ", self.capability.title()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if self.on_activate().is_some() {
            title.push(Span::styled("↗ ", Style::default().fg(Color::DarkGray)));
        }

        let paragraph = Paragraph::new(Line::from(Span::styled(
            self.capability.description(),
            Style::default().fg(Color::Gray),
        )))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(Line::from(title)),
        );

        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModalId;

    #[test]
    fn test_cards_with_details_open_their_modal() {
        let card = CapabilityCard::new(Capability::IntegratedData, false);
        assert_eq!(
            card.on_activate(),
            Some(Action::OpenModal(ModalId::IntegratedData))
        );
    }

    #[test]
    fn test_display_only_cards_have_no_action() {
        let card = CapabilityCard::new(Capability::Visualizations, true);
        assert_eq!(card.on_activate(), None);
    }

    #[test]
    fn test_card_renders_title_and_description() {
        let area = Rect::new(0, 0, 60, 8);
        let mut buf = Buffer::empty(area);
        CapabilityCard::new(Capability::WeatherPrediction, false).render(area, &mut buf);

        let text: String = buf.content.iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Weather Event Prediction"));
        assert!(text.contains("Forecasts"));
    }
}
