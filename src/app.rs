//! Admin Frontend App
//!
//! Top-level component for the project tools page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{
    AdminModal, DeleteModal, InstallModal, Messages, MountGrid, ProjectPane, TitlePane, ToolList,
};
use crate::context::AppContext;
use crate::store::{store_set_installable, store_set_mounts, store_set_project, AppState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new();
    provide_context(ctx);

    // Load page data on mount and after changes
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Loading page data, trigger={trigger}").into());
        spawn_local(async move {
            if let Ok(loaded) = commands::list_mounts().await {
                web_sys::console::log_1(&format!("[APP] Loaded {} mounts", loaded.len()).into());
                store_set_mounts(&store, loaded);
            }
            if let Ok(loaded) = commands::installable_tools().await {
                store_set_installable(&store, loaded);
            }
            if let Ok(project) = commands::project_info().await {
                store_set_project(&store, project);
            }
        });
    });

    view! {
        <div class="admin-layout">
            <Messages />

            <ProjectPane />

            <TitlePane id="installable-tools" title="Installable Tools" closed=true>
                <ToolList />
            </TitlePane>

            <TitlePane id="project-tools" title="Tools">
                <MountGrid />
            </TitlePane>

            <InstallModal />
            <AdminModal />
            <DeleteModal />
        </div>
    }
}
