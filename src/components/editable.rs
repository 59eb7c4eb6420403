//! Editable Component
//!
//! Hover-to-edit field: the viewer swaps for an editor on hover, and
//! the editor submits on Enter or blur. Mouse-leave only drops back to
//! the viewer while the input is unfocused.

use leptos::prelude::*;

#[component]
pub fn EditableText(
    /// Field name posted to the update endpoint
    #[prop(into)] name: String,
    value: Signal<String>,
    on_submit: Callback<String>,
) -> impl IntoView {
    let (editing, set_editing) = signal(false);
    let (focused, set_focused) = signal(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let submit = move || {
        if let Some(input) = input_ref.get_untracked() {
            on_submit.run(input.value());
        }
    };

    let on_viewer_mouseenter = move |_: web_sys::MouseEvent| set_editing.set(true);

    let on_editor_mouseleave = move |_: web_sys::MouseEvent| {
        if focused.get_untracked() {
            return;
        }
        set_editing.set(false);
        if let Some(input) = input_ref.get_untracked() {
            let _ = input.blur();
        }
    };

    view! {
        <div class=move || if editing.get() { "editable editing" } else { "editable viewing" }>
            <span class="viewer" on:mouseenter=on_viewer_mouseenter>
                {move || value.get()}
            </span>
            <span class="editor" on:mouseleave=on_editor_mouseleave>
                <input
                    type="text"
                    name=name
                    node_ref=input_ref
                    prop:value=move || value.get()
                    on:focus=move |_| set_focused.set(true)
                    on:keyup=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            submit();
                        }
                    }
                    on:blur=move |_| {
                        set_focused.set(false);
                        set_editing.set(false);
                        submit();
                    }
                />
            </span>
        </div>
    }
}
