//! Admin Modal Component
//!
//! Generic edit popup filled from a remote HTML fragment. The popup
//! shows Loading... until the fragment arrives; a failed fetch leaves
//! it there.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::context::AppContext;
use crate::session;

#[component]
pub fn AdminModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let content_ref = NodeRef::<leptos::html::Div>::new();

    // Reset and refill the popup whenever the trigger changes
    Effect::new(move |_| {
        let Some(link) = ctx.admin_link.get() else { return };
        set_title.set(String::new());
        if let Some(div) = content_ref.get_untracked() {
            div.set_inner_html("Loading...");
        }
        spawn_local(async move {
            if let Ok(fragment) = commands::fetch_fragment(&link.href).await {
                set_title.set(link.label);
                if let Some(div) = content_ref.get_untracked() {
                    div.set_inner_html(&fragment);
                    inject_csrf(&div);
                }
            }
        });
    });

    view! {
        <Show when=move || ctx.admin_link.get().is_some()>
            <div class="lightbox admin-modal">
                <h2 id="popup_title">{move || title.get()}</h2>
                <div id="popup_contents" node_ref=content_ref>"Loading..."</div>
                <button class="close-btn" on:click=move |_| ctx.close_admin()>"Close"</button>
            </div>
        </Show>
    }
}

/// Append a hidden _session_id input to every form in the fragment
fn inject_csrf(container: &web_sys::Element) {
    let Some(token) = session::csrf_token() else { return };
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else { return };
    let Ok(forms) = container.query_selector_all("form") else { return };
    for i in 0..forms.length() {
        let Some(node) = forms.get(i) else { continue };
        let Ok(form) = node.dyn_into::<web_sys::Element>() else { continue };
        if let Ok(input) = doc.create_element("input") {
            let _ = input.set_attribute("type", "hidden");
            let _ = input.set_attribute("name", session::SESSION_COOKIE);
            let _ = input.set_attribute("value", &token);
            let _ = form.append_child(&input);
        }
    }
}
