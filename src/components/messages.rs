//! Messages Component
//!
//! Notification area for transient confirm/error notices.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{AppContext, Status};

/// How long a notice stays up, in milliseconds
const NOTICE_TIMEOUT_MS: u32 = 5_000;

#[component]
pub fn Messages() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div id="messages">
            <For
                each=move || ctx.notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    spawn_local(async move {
                        TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                        ctx.dismiss(id);
                    });

                    let status_class = match notice.status {
                        Status::Confirm => "message confirm",
                        Status::Error => "message error",
                    };

                    view! {
                        <div class=status_class on:click=move |_| ctx.dismiss(id)>
                            {notice.text.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
