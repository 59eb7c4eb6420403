//! Installable Tool Commands
//!
//! Bindings for the tool metadata the install dialog is populated from.

use crate::models::InstallableTool;

use super::get_json;

/// Tools that can be installed on this project, with their defaults
pub async fn installable_tools() -> Result<Vec<InstallableTool>, String> {
    get_json("installable_tools").await
}
