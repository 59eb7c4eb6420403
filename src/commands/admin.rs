//! Admin Popup Commands

use super::get_text;

/// Fetch the HTML fragment shown in the admin edit popup
pub async fn fetch_fragment(href: &str) -> Result<String, String> {
    get_text(href).await
}
