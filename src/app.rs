//! Root application component
//!
//! App is the composition root: it owns the `ViewState`, hands each child
//! the slice it needs, and applies the Actions children return. Children
//! never touch the view state directly.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, draw_footer, draw_help_bar, modal_content, AboutComponent,
    DashboardComponent, HelpDialog, Modal, NavBar, QuitDialog, ResourcesComponent,
    SplashComponent,
};
use crate::config::Config;
use crate::model::{AppMode, Dialog, ModalId, Section, ViewState};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use tracing::{debug, info};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

pub struct App {
    pub mode: AppMode,

    /// Active section and detail-modal flags
    pub view: ViewState,

    /// App-level overlay (help, quit confirmation)
    pub dialog: Option<Dialog>,

    pub should_quit: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub nav: NavBar,
    pub dashboard: DashboardComponent,
    pub about: AboutComponent,
    pub resources: ResourcesComponent,
    pub image_processing_modal: Modal,
    pub integrated_data_modal: Modal,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    pub fn new(config: &Config) -> App {
        let mode = if config.show_splash {
            AppMode::Splash
        } else {
            AppMode::Running
        };

        App {
            mode,
            view: ViewState::with_section(config.initial_section),
            dialog: None,
            should_quit: false,
            splash: SplashComponent::new(config.splash_duration()),
            nav: NavBar::new(),
            dashboard: DashboardComponent::new(),
            about: AboutComponent::new(),
            resources: ResourcesComponent::new(),
            image_processing_modal: Self::detail_modal(ModalId::ImageProcessing),
            integrated_data_modal: Self::detail_modal(ModalId::IntegratedData),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
        }
    }

    fn detail_modal(which: ModalId) -> Modal {
        Modal::new(
            which.title(),
            modal_content(which),
            Action::CloseModal(which),
        )
    }

    pub fn modal(&self, which: ModalId) -> &Modal {
        match which {
            ModalId::ImageProcessing => &self.image_processing_modal,
            ModalId::IntegratedData => &self.integrated_data_modal,
        }
    }

    fn modal_mut(&mut self, which: ModalId) -> &mut Modal {
        match which {
            ModalId::ImageProcessing => &mut self.image_processing_modal,
            ModalId::IntegratedData => &mut self.integrated_data_modal,
        }
    }

    /// Push the view-state flags down to the modal components
    fn sync_modals(&mut self) {
        for which in ModalId::all() {
            let open = self.view.is_modal_open(which);
            self.modal_mut(which).set_open(open);
        }
    }

    fn section_component(&mut self) -> &mut dyn Component {
        match self.view.active_section() {
            Section::Dashboard => &mut self.dashboard,
            Section::About => &mut self.about,
            Section::Resources => &mut self.resources,
        }
    }

    fn dialog_component(&mut self, dialog: Dialog) -> &mut dyn Component {
        match dialog {
            Dialog::QuitConfirm => &mut self.quit_dialog,
            Dialog::Help => &mut self.help_dialog,
        }
    }
}

/// Keys that work everywhere outside app dialogs, even over a detail modal
fn navigation_key_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('1') => Some(Action::SelectSection(Section::Dashboard)),
        KeyCode::Char('2') => Some(Action::SelectSection(Section::About)),
        KeyCode::Char('3') => Some(Action::SelectSection(Section::Resources)),
        KeyCode::Tab => Some(Action::NextSection),
        KeyCode::BackTab => Some(Action::PrevSection),
        KeyCode::Char('?') => Some(Action::OpenHelp),
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        info!(
            section = self.view.active_section().label(),
            splash = self.mode == AppMode::Splash,
            "app started"
        );
        self.splash.init()?;
        self.sync_modals();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }

        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Running => {
                if let Some(dialog) = self.dialog {
                    return self.dialog_component(dialog).handle_key_event(key);
                }

                if let Some(top) = self.view.modals().topmost() {
                    if let Some(action) = self.modal_mut(top).handle_key_event(key)? {
                        return Ok(Some(action));
                    }
                    return Ok(navigation_key_action(key));
                }

                if let Some(action) = navigation_key_action(key) {
                    return Ok(Some(action));
                }
                if key.code == KeyCode::Char('q') {
                    return Ok(Some(Action::OpenQuitDialog));
                }
                self.section_component().handle_key_event(key)
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.mode != AppMode::Running || self.dialog.is_some() {
            return Ok(None);
        }

        // An open modal captures the pointer
        if let Some(top) = self.view.modals().topmost() {
            return self.modal_mut(top).handle_mouse_event(mouse);
        }

        if let Some(action) = self.nav.handle_mouse_event(mouse)? {
            return Ok(Some(action));
        }
        self.section_component().handle_mouse_event(mouse)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action != Action::Tick {
            debug!(action = %action, "update");
        }

        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Splash {
                    return self.splash.update(action);
                }
            }
            Action::SplashComplete => {
                self.mode = AppMode::Running;
            }
            Action::ForceQuit => {
                info!("quit requested");
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::SelectSection(section) => self.view.select_section(section),
            Action::NextSection => {
                let next = self.view.active_section().next();
                self.view.select_section(next);
            }
            Action::PrevSection => {
                let previous = self.view.active_section().previous();
                self.view.select_section(previous);
            }

            // ─────────────────────────────────────────────────────────────────
            // Capability Cards (delegate to AboutComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextCard
            | Action::PrevCard
            | Action::CardBelow
            | Action::CardAbove
            | Action::ActivateCard => {
                if self.view.is_active(Section::About) {
                    return self.about.update(action);
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Detail Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenModal(which) => {
                self.view.open_modal(which);
                self.sync_modals();
            }
            Action::CloseModal(which) => {
                self.view.close_modal(which);
                self.sync_modals();
            }
            Action::ScrollUp | Action::ScrollDown | Action::PageUp | Action::PageDown => {
                if let Some(top) = self.view.modals().topmost() {
                    self.modal_mut(top).update(action)?;
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // App Dialogs
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.dialog = Some(Dialog::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.dialog = Some(Dialog::Help);
            }
            Action::CloseDialog => {
                self.dialog = None;
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Running => {
                let layout = calculate_main_layout(area);

                self.nav.set_active(self.view.active_section());
                self.nav.draw(frame, layout.nav)?;
                self.section_component().draw(frame, layout.content)?;
                draw_footer(frame, layout.footer);
                draw_help_bar(
                    frame,
                    layout.help,
                    self.view.active_section(),
                    self.view.modals().any_open(),
                );

                // Bottom first, so the later modal ends up on top
                self.sync_modals();
                for which in ModalId::all() {
                    self.modal_mut(which).draw(frame, area)?;
                }

                if let Some(dialog) = self.dialog {
                    self.dialog_component(dialog).draw(frame, area)?;
                }
            }
        }
        Ok(())
    }
}
