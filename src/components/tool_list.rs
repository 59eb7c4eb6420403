//! Tool List Component
//!
//! Install triggers: one per installable tool, plus a subproject entry.

use leptos::prelude::*;

use crate::components::InstallTarget;
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ToolList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        <ul class="installable-tools">
            <For
                each=move || store.installable().get()
                key=|tool| tool.name.clone()
                children=move |tool| {
                    let name = tool.name.clone();
                    let relaxed = tool.relaxed_mount_points;
                    view! {
                        <li>
                            <a
                                class="install-trig"
                                href="#"
                                on:click=move |ev: web_sys::MouseEvent| {
                                    ev.prevent_default();
                                    ctx.show_install(InstallTarget {
                                        tool: Some(name.clone()),
                                        relaxed_mount_points: relaxed,
                                    });
                                }
                            >
                                {tool.default_label.clone()}
                            </a>
                        </li>
                    }
                }
            />
            <li>
                <a
                    class="install-trig"
                    href="#"
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.prevent_default();
                        ctx.show_install(InstallTarget { tool: None, relaxed_mount_points: false });
                    }
                >
                    "Subproject"
                </a>
            </li>
        </ul>
    }
}
