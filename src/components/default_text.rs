//! Default Text Input
//!
//! Placeholder emulation: the input shows its title text until the user
//! enters a value, with a style class marking the placeholder state.

use leptos::prelude::*;

/// True when the shown value is the placeholder itself
pub fn placeholder_active(value: &str, title: &str) -> bool {
    value == title
}

/// Replacement value when the field gains focus, if any
pub fn focus_value(value: &str, title: &str) -> Option<String> {
    if value == title {
        Some(String::new())
    } else {
        None
    }
}

/// Replacement value when the field loses focus, if any
pub fn blur_value(value: &str, title: &str) -> Option<String> {
    if value.is_empty() {
        Some(title.to_string())
    } else {
        None
    }
}

#[component]
pub fn DefaultTextInput(
    #[prop(into)] name: String,
    #[prop(into)] title: String,
    #[prop(into, optional)] value: String,
) -> impl IntoView {
    // The blur rule applied up front sets the initial appearance
    let initial = blur_value(&value, &title).unwrap_or(value);
    let (current, set_current) = signal(initial);

    let title_attr = title.clone();
    let title_class = title.clone();
    let title_focus = title.clone();

    view! {
        <input
            type="text"
            name=name
            title=title_attr
            class=move || {
                if placeholder_active(&current.get(), &title_class) {
                    "defaultText defaultTextActive"
                } else {
                    "defaultText"
                }
            }
            prop:value=move || current.get()
            on:input=move |ev| set_current.set(event_target_value(&ev))
            on:focus=move |_| {
                if let Some(v) = focus_value(&current.get_untracked(), &title_focus) {
                    set_current.set(v);
                }
            }
            on:blur=move |_| {
                if let Some(v) = blur_value(&current.get_untracked(), &title) {
                    set_current.set(v);
                }
            }
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_active_on_load() {
        // An empty field takes the title text and is marked active
        assert_eq!(blur_value("", "Home page url"), Some("Home page url".to_string()));
        assert!(placeholder_active("Home page url", "Home page url"));
    }

    #[test]
    fn test_focus_clears_placeholder_only() {
        assert_eq!(focus_value("Home page url", "Home page url"), Some(String::new()));
        assert_eq!(focus_value("https://example.org", "Home page url"), None);
    }

    #[test]
    fn test_typed_value_survives_blur() {
        assert_eq!(blur_value("https://example.org", "Home page url"), None);
        assert!(!placeholder_active("https://example.org", "Home page url"));
    }
}
