//! Footer and key hints

use crate::model::{Icon, Section};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const COPYRIGHT: &str = "© 2025 ClimateAI Predictor. All rights reserved.";

const CONTACTS: [(Icon, &str); 3] = [
    (Icon::Mail, "contact@climateai.com"),
    (Icon::Twitter, "twitter.com/climateai"),
    (Icon::Github, "github.com/climateai"),
];

/// Copyright on the left, contact links on the right
pub fn draw_footer(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Min(0)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", COPYRIGHT),
            Style::default().fg(Color::DarkGray),
        )),
        chunks[0],
    );

    let mut spans = Vec::new();
    for (icon, address) in CONTACTS {
        spans.push(Span::styled(
            format!("{} ", icon.glyph()),
            Style::default().fg(Color::Green),
        ));
        spans.push(Span::styled(
            format!("{}  ", address),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Right),
        chunks[1],
    );
}

/// Key hints for the current context
pub fn draw_help_bar(frame: &mut Frame, area: Rect, section: Section, modal_open: bool) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::styled(" 1-3 ", key_style),
        Span::raw("Section "),
        Span::styled(" Tab ", key_style),
        Span::raw("Next "),
    ];

    if modal_open {
        spans.extend([
            Span::styled(" j/k ", key_style),
            Span::raw("Scroll "),
            Span::styled(" Esc ", key_style),
            Span::raw("Close "),
        ]);
    } else {
        if section == Section::About {
            spans.extend([
                Span::styled(" hjkl ", key_style),
                Span::raw("Card "),
                Span::styled(" Enter ", key_style),
                Span::raw("Details "),
            ]);
        }
        spans.extend([Span::styled(" q ", key_style), Span::raw("Quit ")]);
    }
    spans.extend([Span::styled(" ? ", key_style), Span::raw("Help")]);

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
