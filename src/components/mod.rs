//! UI Components
//!
//! Each component keeps its own presentation state, handles its events, and
//! renders itself. Shared view state is only changed through Actions.

pub mod about;
pub mod card;
pub mod content;
pub mod dashboard;
pub mod footer;
pub mod help_dialog;
pub mod layout;
pub mod modal;
pub mod nav;
pub mod quit_dialog;
pub mod resources;
pub mod splash;

pub use about::AboutComponent;
pub use content::modal_content;
pub use dashboard::DashboardComponent;
pub use footer::{draw_footer, draw_help_bar};
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup};
pub use modal::Modal;
pub use nav::NavBar;
pub use quit_dialog::QuitDialog;
pub use resources::ResourcesComponent;
pub use splash::SplashComponent;
