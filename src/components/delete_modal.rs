//! Delete Confirmation Component
//!
//! Guards mount deletion behind an explicit warning dialog. The form to
//! delete is held in the context between trigger click and the user's
//! choice, so confirming always submits the form that was armed last.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;

/// Warning text for the armed delete target
pub fn delete_warning(mount_point: Option<&str>) -> String {
    let tool_label = match mount_point {
        Some(mount_point) => format!("the \"{mount_point}\""),
        None => "this".to_string(),
    };
    format!("Warning: This will destroy all data in {tool_label} tool and is non-reversable!")
}

#[component]
pub fn DeleteModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_confirm = move |_| {
        if let Some(pending) = ctx.take_delete() {
            spawn_local(async move {
                if commands::submit_delete(&pending.url).await.is_ok() {
                    ctx.reload();
                }
            });
        }
    };

    let on_cancel = move |_| ctx.cancel_delete();

    view! {
        <Show when=move || ctx.pending_delete.get().is_some()>
            <div class="lightbox mount-delete-modal">
                <div class="warning_msg">
                    {move || ctx.pending_delete.get().map(|p| delete_warning(p.mount_point.as_deref()))}
                </div>
                <button class="continue_delete" on:click=on_confirm>"Delete"</button>
                <button class="cancel_delete" on:click=on_cancel>"Cancel"</button>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_names_the_mount_point() {
        assert_eq!(
            delete_warning(Some("wiki")),
            "Warning: This will destroy all data in the \"wiki\" tool and is non-reversable!"
        );
    }

    #[test]
    fn test_warning_without_mount_point() {
        assert_eq!(
            delete_warning(None),
            "Warning: This will destroy all data in this tool and is non-reversable!"
        );
    }
}
