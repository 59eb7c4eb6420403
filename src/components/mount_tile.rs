//! Mount Tile Component
//!
//! A single grid cell: tool or subproject, with its admin triggers.

use leptos::prelude::*;

use crate::components::{AdminLink, PendingDelete};
use crate::context::AppContext;
use crate::models::Mount;

/// One cell in the mount grid
#[component]
pub fn MountTile(mount: Mount) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let label = mount.label.clone();
    let url = mount.url.clone();
    let delete_url = mount.delete_url.clone();
    let mount_point = mount.mount_point.clone();

    // The delete trigger never navigates; it only arms the confirmation
    let on_delete = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ctx.request_delete(PendingDelete {
            url: delete_url.clone(),
            mount_point: mount_point.clone(),
        });
    };

    view! {
        <div class="mount-tile">
            <a class="mount-link" href=url>{label}</a>
            <div class="mount-actions">
                {mount.options_url.map(|href| {
                    let popup_href = href.clone();
                    view! {
                        <a
                            class="admin-modal-trig"
                            href=href
                            on:click=move |ev: web_sys::MouseEvent| {
                                ev.prevent_default();
                                ctx.show_admin(AdminLink {
                                    href: popup_href.clone(),
                                    label: "Options".to_string(),
                                });
                            }
                        >
                            "Options"
                        </a>
                    }
                })}
                <a class="mount-delete" href="#" on:click=on_delete>"Delete"</a>
            </div>
        </div>
    }
}
