//! Model layer - state and static domain data
//!
//! - `ViewState` - active section and modal visibility, owned by the App
//! - `Section`, `ModalId`, `Capability`, `Icon` - closed sets of identifiers

pub mod capability;
pub mod icon;
pub mod modal;
pub mod section;
pub mod ui;
pub mod view_state;

pub use capability::Capability;
pub use icon::Icon;
pub use modal::{Dialog, ModalId};
pub use section::Section;
pub use ui::AppMode;
pub use view_state::ViewState;
