//! UI Components
//!
//! Reusable Leptos components for the admin page.

mod mount_grid;
mod mount_tile;
mod tool_list;
mod install_modal;
mod admin_modal;
mod delete_modal;
mod project_pane;
mod title_pane;
mod editable;
mod default_text;
mod messages;
mod dialog_target;

pub use mount_grid::MountGrid;
pub use mount_tile::MountTile;
pub use tool_list::ToolList;
pub use install_modal::InstallModal;
pub use admin_modal::AdminModal;
pub use delete_modal::DeleteModal;
pub use project_pane::ProjectPane;
pub use title_pane::TitlePane;
pub use editable::EditableText;
pub use default_text::DefaultTextInput;
pub use messages::Messages;
pub use dialog_target::{AdminLink, InstallTarget, PendingDelete};
