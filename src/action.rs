//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::{ModalId, Section};
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,
    /// Transition from splash to main app
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Make the given section the active one
    SelectSection(Section),
    /// Move to next section
    NextSection,
    /// Move to previous section
    PrevSection,

    // ─────────────────────────────────────────────────────────────────────────
    // Capability Cards
    // ─────────────────────────────────────────────────────────────────────────
    /// Focus the next card
    NextCard,
    /// Focus the previous card
    PrevCard,
    /// Focus the card in the row below
    CardBelow,
    /// Focus the card in the row above
    CardAbove,
    /// Activate the focused card
    ActivateCard,

    // ─────────────────────────────────────────────────────────────────────────
    // Detail Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenModal(ModalId),
    CloseModal(ModalId),
    /// Scroll the topmost modal up one line
    ScrollUp,
    /// Scroll the topmost modal down one line
    ScrollDown,
    /// Scroll the topmost modal up one page
    PageUp,
    /// Scroll the topmost modal down one page
    PageDown,

    // ─────────────────────────────────────────────────────────────────────────
    // App Dialogs
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current app dialog
    CloseDialog,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::SelectSection(section) => write!(f, "SelectSection({})", section.label()),
            Action::NextSection => write!(f, "NextSection"),
            Action::PrevSection => write!(f, "PrevSection"),
            Action::NextCard => write!(f, "NextCard"),
            Action::PrevCard => write!(f, "PrevCard"),
            Action::CardBelow => write!(f, "CardBelow"),
            Action::CardAbove => write!(f, "CardAbove"),
            Action::ActivateCard => write!(f, "ActivateCard"),
            Action::OpenModal(id) => write!(f, "OpenModal({:?})", id),
            Action::CloseModal(id) => write!(f, "CloseModal({:?})", id),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseDialog => write!(f, "CloseDialog"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_payload() {
        assert_eq!(
            Action::SelectSection(Section::About).to_string(),
            "SelectSection(About)"
        );
        assert_eq!(
            Action::CloseModal(ModalId::IntegratedData).to_string(),
            "CloseModal(IntegratedData)"
        );
        assert_eq!(Action::Resize(80, 24).to_string(), "Resize(80, 24)");
    }
}
