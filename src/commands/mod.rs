//! Backend Command Wrappers
//!
//! Frontend bindings to the admin backend's HTTP endpoints, organized by
//! domain. All URLs are relative to the admin page.

mod mounts;
mod tools;
mod project;
mod admin;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

// Re-export all public items
pub use mounts::*;
pub use tools::*;
pub use project::*;
pub use admin::*;

/// Issue a GET and return the response body as text
pub(crate) async fn get_text(url: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or("no window")?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp.dyn_into().map_err(|e| format!("{e:?}"))?;
    if !resp.ok() {
        return Err(format!("GET {url} failed: {}", resp.status()));
    }
    let text = JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    text.as_string().ok_or_else(|| "non-text response".to_string())
}

/// Issue a GET and deserialize the JSON response body
pub(crate) async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let text = get_text(url).await?;
    serde_json::from_str(&text).map_err(|e| e.to_string())
}

/// Issue a form-encoded POST, failing on any non-2xx status
pub(crate) async fn post_form(url: &str, body: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(body));
    let request = Request::new_with_str_and_init(url, &init).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/x-www-form-urlencoded")
        .map_err(|e| format!("{e:?}"))?;
    let resp = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp.dyn_into().map_err(|e| format!("{e:?}"))?;
    if resp.ok() {
        Ok(())
    } else {
        Err(format!("POST {url} failed: {}", resp.status()))
    }
}
