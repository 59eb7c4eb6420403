//! Project Commands
//!
//! Bindings for the project properties edited in place on the page.

use crate::models::Project;
use crate::ordering;
use crate::session;

use super::{get_json, post_form};

pub async fn project_info() -> Result<Project, String> {
    get_json("project_info").await
}

/// Post a single edited property to the update endpoint
pub async fn update_field(name: &str, value: &str) -> Result<(), String> {
    let token = session::csrf_token().unwrap_or_default();
    let params = vec![
        (session::SESSION_COOKIE.to_string(), token),
        (name.to_string(), value.to_string()),
    ];
    post_form("update", &ordering::encode_form(&params)).await
}
