//! Title Pane Component
//!
//! Collapsible panel: clicking the title toggles the content, and a
//! pane whose id matches the page URL fragment starts open.

use leptos::prelude::*;

/// True when the location hash addresses this pane
pub fn opened_by_fragment(hash: &str, id: &str) -> bool {
    hash.strip_prefix('#').map(|h| h == id).unwrap_or(false)
}

#[component]
pub fn TitlePane(
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    /// Start collapsed unless the URL fragment targets this pane
    #[prop(optional)] closed: bool,
    children: Children,
) -> impl IntoView {
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    let start_closed = closed && !opened_by_fragment(&hash, &id);
    let (is_closed, set_closed) = signal(start_closed);

    view! {
        <div id=id class=move || if is_closed.get() { "title-pane closed" } else { "title-pane" }>
            <h3 class="title" on:click=move |_| set_closed.update(|c| *c = !*c)>
                {title}
            </h3>
            <div class=move || if is_closed.get() { "content hidden" } else { "content" }>
                {children()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_match() {
        assert!(opened_by_fragment("#project-tools", "project-tools"));
    }

    #[test]
    fn test_fragment_mismatch() {
        assert!(!opened_by_fragment("#project-tools", "installable-tools"));
        assert!(!opened_by_fragment("", "project-tools"));
        assert!(!opened_by_fragment("project-tools", "project-tools"));
    }
}
