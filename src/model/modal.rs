//! Modal visibility
//!
//! The two detail dialogs are tracked as independent flags rather than a
//! stack: either, both or neither may be open, regardless of the active
//! section. App-level overlays (help, quit confirmation) are a separate
//! `Dialog` and never touch these flags.

/// Identifies one of the detail dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalId {
    ImageProcessing,
    IntegratedData,
}

impl ModalId {
    /// All modals in render order, bottom first
    pub fn all() -> [ModalId; 2] {
        [ModalId::ImageProcessing, ModalId::IntegratedData]
    }

    pub fn title(&self) -> &'static str {
        match self {
            ModalId::ImageProcessing => "Advanced Image Processing",
            ModalId::IntegratedData => "Integrated Data Analysis",
        }
    }
}

/// One boolean flag per detail dialog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalVisibility {
    image_processing: bool,
    integrated_data: bool,
}

impl ModalVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, which: ModalId) -> bool {
        match which {
            ModalId::ImageProcessing => self.image_processing,
            ModalId::IntegratedData => self.integrated_data,
        }
    }

    pub fn set(&mut self, which: ModalId, open: bool) {
        match which {
            ModalId::ImageProcessing => self.image_processing = open,
            ModalId::IntegratedData => self.integrated_data = open,
        }
    }

    /// Open modals in render order, bottom first
    pub fn open_modals(&self) -> Vec<ModalId> {
        ModalId::all()
            .into_iter()
            .filter(|id| self.is_open(*id))
            .collect()
    }

    /// The modal drawn last, which receives input
    pub fn topmost(&self) -> Option<ModalId> {
        self.open_modals().last().copied()
    }

    pub fn any_open(&self) -> bool {
        self.image_processing || self.integrated_data
    }
}

/// App-level overlays, drawn above everything else
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Help dialog showing all keyboard shortcuts
    Help,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_visibility_starts_closed() {
        let modals = ModalVisibility::new();
        assert!(!modals.is_open(ModalId::ImageProcessing));
        assert!(!modals.is_open(ModalId::IntegratedData));
        assert!(!modals.any_open());
        assert_eq!(modals.topmost(), None);
    }

    #[test]
    fn test_modal_flags_are_independent() {
        let mut modals = ModalVisibility::new();
        modals.set(ModalId::IntegratedData, true);
        assert!(!modals.is_open(ModalId::ImageProcessing));

        modals.set(ModalId::ImageProcessing, true);
        modals.set(ModalId::IntegratedData, false);
        assert!(modals.is_open(ModalId::ImageProcessing));
    }

    #[test]
    fn test_topmost_follows_render_order() {
        let mut modals = ModalVisibility::new();
        modals.set(ModalId::IntegratedData, true);
        modals.set(ModalId::ImageProcessing, true);
        assert_eq!(
            modals.open_modals(),
            vec![ModalId::ImageProcessing, ModalId::IntegratedData]
        );
        assert_eq!(modals.topmost(), Some(ModalId::IntegratedData));

        modals.set(ModalId::IntegratedData, false);
        assert_eq!(modals.topmost(), Some(ModalId::ImageProcessing));
    }
}
