//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{InstallableTool, Mount, Project};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Grid cells in display order
    pub mounts: Vec<Mount>,
    /// Tools offered by the install dialog
    pub installable: Vec<InstallableTool>,
    /// Project properties shown in the metadata pane
    pub project: Project,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_mounts(store: &AppStore, mounts: Vec<Mount>) {
    *store.mounts().write() = mounts;
}

pub fn store_set_installable(store: &AppStore, tools: Vec<InstallableTool>) {
    *store.installable().write() = tools;
}

pub fn store_set_project(store: &AppStore, project: Project) {
    *store.project().write() = project;
}

/// Move a mount between grid slots. Only the visual order changes here;
/// persisting it is the reorder controller's job.
pub fn store_move_mount(store: &AppStore, from: usize, to_slot: usize) {
    let binding = store.mounts();
    let mut mounts = binding.write();
    crate::ordering::apply_reorder(&mut *mounts, from, to_slot);
}
