//! View state - the single source of truth for navigation and dialogs
//!
//! Owned by the App and handed to children by reference. Children never
//! mutate it; they return Actions which the App applies here.

use crate::model::modal::{ModalId, ModalVisibility};
use crate::model::section::Section;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    active_section: Section,
    modals: ModalVisibility,
}

impl ViewState {
    /// Start on a specific section with all modals closed
    pub fn with_section(section: Section) -> Self {
        Self {
            active_section: section,
            modals: ModalVisibility::new(),
        }
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active_section == section
    }

    pub fn modals(&self) -> &ModalVisibility {
        &self.modals
    }

    pub fn is_modal_open(&self, which: ModalId) -> bool {
        self.modals.is_open(which)
    }

    pub fn select_section(&mut self, section: Section) {
        if self.active_section != section {
            debug!(from = ?self.active_section, to = ?section, "section changed");
        }
        self.active_section = section;
    }

    pub fn open_modal(&mut self, which: ModalId) {
        if !self.modals.is_open(which) {
            debug!(modal = ?which, "modal opened");
        }
        self.modals.set(which, true);
    }

    pub fn close_modal(&mut self, which: ModalId) {
        if self.modals.is_open(which) {
            debug!(modal = ?which, "modal closed");
        }
        self.modals.set(which, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ViewState::default();
        assert_eq!(state.active_section(), Section::Dashboard);
        assert!(!state.is_modal_open(ModalId::ImageProcessing));
        assert!(!state.is_modal_open(ModalId::IntegratedData));
    }

    #[test]
    fn test_select_section_tracks_latest_request() {
        let mut state = ViewState::default();
        let requests = [
            Section::About,
            Section::About,
            Section::Resources,
            Section::Dashboard,
            Section::Resources,
            Section::About,
        ];
        for section in requests {
            state.select_section(section);
            let active: Vec<Section> = Section::all()
                .into_iter()
                .filter(|s| state.is_active(*s))
                .collect();
            assert_eq!(active, vec![section]);
        }
    }

    #[test]
    fn test_open_modal_is_idempotent() {
        let mut state = ViewState::default();
        for _ in 0..3 {
            state.open_modal(ModalId::ImageProcessing);
            assert!(state.is_modal_open(ModalId::ImageProcessing));
        }
    }

    #[test]
    fn test_close_modal_is_idempotent() {
        let mut state = ViewState::default();
        state.close_modal(ModalId::IntegratedData);
        assert!(!state.is_modal_open(ModalId::IntegratedData));

        state.open_modal(ModalId::IntegratedData);
        for _ in 0..3 {
            state.close_modal(ModalId::IntegratedData);
            assert!(!state.is_modal_open(ModalId::IntegratedData));
        }
    }

    #[test]
    fn test_modals_do_not_affect_each_other_or_section() {
        let mut state = ViewState::with_section(Section::About);
        state.open_modal(ModalId::ImageProcessing);
        assert!(!state.is_modal_open(ModalId::IntegratedData));
        assert_eq!(state.active_section(), Section::About);

        state.open_modal(ModalId::IntegratedData);
        state.close_modal(ModalId::ImageProcessing);
        assert!(state.is_modal_open(ModalId::IntegratedData));
        assert_eq!(state.active_section(), Section::About);
    }

    #[test]
    fn test_navigation_keeps_modals_open() {
        let mut state = ViewState::default();
        state.open_modal(ModalId::IntegratedData);
        state.select_section(Section::Resources);
        assert!(state.is_active(Section::Resources));
        assert!(state.is_modal_open(ModalId::IntegratedData));
    }
}
