//! Mount Commands
//!
//! Bindings for listing, reordering, and deleting tool mounts.

use crate::models::Mount;
use crate::ordering::{self, MountCell};
use crate::session;

use super::{get_json, post_form};

/// Grid cells in current ordinal order
pub async fn list_mounts() -> Result<Vec<Mount>, String> {
    get_json("mounts").await
}

/// Persist a new grid order. The payload carries the session token even
/// when the grid is empty.
pub async fn update_mount_order(cells: &[MountCell]) -> Result<(), String> {
    let token = session::csrf_token().unwrap_or_default();
    let params = ordering::reorder_payload(&token, cells);
    post_form("update_mount_order", &ordering::encode_form(&params)).await
}

/// Submit a stored delete form: a POST carrying only the session token
pub async fn submit_delete(url: &str) -> Result<(), String> {
    let token = session::csrf_token().unwrap_or_default();
    let params = vec![(session::SESSION_COOKIE.to_string(), token)];
    post_form(url, &ordering::encode_form(&params)).await
}
