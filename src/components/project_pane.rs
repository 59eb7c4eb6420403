//! Project Pane Component
//!
//! Project properties edited in place: the name through the hover
//! editor, the home page through a plain form with placeholder text.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{DefaultTextInput, EditableText, TitlePane};
use crate::context::{AppContext, Status};
use crate::session;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ProjectPane() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let name = Signal::derive(move || store.project().get().name);

    let submit_name = Callback::new(move |value: String| {
        spawn_local(async move {
            match commands::update_field("name", &value).await {
                Ok(()) => ctx.reload(),
                Err(_) => ctx.notify("Error saving project name.", Status::Error),
            }
        });
    });

    view! {
        <TitlePane id="project-properties" title="Project Properties">
            <EditableText name="name" value=name on_submit=submit_name />
            <form class="homepage-form" method="post" action="update">
                <input
                    type="hidden"
                    name="_session_id"
                    value=session::csrf_token().unwrap_or_default()
                />
                {move || {
                    let homepage = store.project().get().homepage;
                    view! {
                        <DefaultTextInput name="homepage" title="Home page url" value=homepage />
                    }
                }}
                <button type="submit">"Save"</button>
            </form>
        </TitlePane>
    }
}
