//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Main screen layout areas
pub struct MainLayout {
    pub nav: Rect,
    pub content: Rect,
    pub footer: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Area inset by a fixed margin on every side, used by full-size overlays
pub fn inset(area: Rect, horizontal: u16, vertical: u16) -> Rect {
    Rect::new(
        area.x + horizontal.min(area.width / 2),
        area.y + vertical.min(area.height / 2),
        area.width.saturating_sub(horizontal * 2),
        area.height.saturating_sub(vertical * 2),
    )
}

/// Whether a terminal cell lies inside `area`
pub fn hit(area: Rect, column: u16, row: u16) -> bool {
    area.contains(Position { x: column, y: row })
}

/// Navigation bar on top, footer and key hints at the bottom
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    MainLayout {
        nav: chunks[0],
        content: chunks[1],
        footer: chunks[2],
        help: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_is_clamped() {
        let area = Rect::new(0, 0, 20, 10);
        let popup = centered_popup(area, 40, 5);
        assert_eq!(popup.width, 20);
        assert_eq!(popup.height, 5);
        assert_eq!(popup.y, 2);
    }

    #[test]
    fn test_main_layout_covers_area() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = calculate_main_layout(area);
        assert_eq!(layout.nav.height, 3);
        assert_eq!(layout.content.height, 35);
        assert_eq!(layout.help.y, 39);
    }

    #[test]
    fn test_hit_is_exclusive_of_far_edge() {
        let area = Rect::new(2, 2, 4, 2);
        assert!(hit(area, 2, 2));
        assert!(hit(area, 5, 3));
        assert!(!hit(area, 6, 3));
        assert!(!hit(area, 5, 4));
    }

    #[test]
    fn test_inset_shrinks_symmetrically() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(inset(area, 6, 2), Rect::new(6, 2, 88, 36));
    }
}
