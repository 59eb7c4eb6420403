//! Mount Grid Component
//!
//! The sortable grid of installed tools and subprojects, wired to the
//! reorder persistence flow: drop, serialize the new order, POST it,
//! surface the result in the message area.
//!
//! At most one reorder submission is in flight at a time: a drag gesture
//! cannot overlap itself, and nothing else posts the order.

use leptos::prelude::*;
use leptos::task::spawn_local;

use leptos_sortable::{
    bind_global_mouseup, create_sort_signals, make_on_mousedown, make_on_slot_mouseenter,
    make_on_slot_mouseleave, SortSignals,
};

use crate::commands;
use crate::components::MountTile;
use crate::context::{AppContext, Status};
use crate::ordering;
use crate::store::{use_app_store, store_move_mount, AppStateStoreFields};

/// Sortable mount grid with drag-reorder persistence
#[component]
pub fn MountGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let sort = create_sort_signals();

    // Drop handler: reorder locally, then persist. The grid is not
    // rolled back when the POST fails; the error notice is the only
    // signal the server still has the old order.
    bind_global_mouseup(sort, move |from, to_slot| {
        web_sys::console::log_1(&format!("[GRID] Drop: from={from}, slot={to_slot}").into());
        store_move_mount(&store, from, to_slot);
        let cells = ordering::cells(&store.mounts().get_untracked());
        spawn_local(async move {
            match commands::update_mount_order(&cells).await {
                Ok(()) => ctx.notify(
                    "Tool order updated, refresh this page to see the updated project navigation.",
                    Status::Confirm,
                ),
                Err(_) => ctx.notify("Error saving tool order.", Status::Error),
            }
        });
    });

    view! {
        <div class="mount-grid">
            // Initial slot at the head of the grid
            <SortSlot sort=sort slot=0 />

            <For
                each=move || { store.mounts().get().into_iter().enumerate().collect::<Vec<_>>() }
                key=|(i, mount)| (*i, mount.label.clone(), mount.mount_point.clone(), mount.shortname.clone())
                children=move |(i, mount)| {
                    let sortable = mount.sortable;
                    let on_mousedown = make_on_mousedown(sort, i);
                    let is_dragging = move || sort.dragging_read.get() == Some(i);

                    let cell_class = move || {
                        let mut c = String::from("mount-cell");
                        if !sortable { c.push_str(" fixed"); }
                        if is_dragging() { c.push_str(" dragging"); }
                        c
                    };

                    view! {
                        <div
                            class=cell_class
                            on:mousedown=move |ev| { if sortable { on_mousedown(ev); } }
                        >
                            <MountTile mount=mount />
                        </div>

                        // Slot after this cell
                        <SortSlot sort=sort slot={i + 1} />
                    }
                }
            />
        </div>
    }
}

/// Insertion slot between grid cells, visible while dragging
#[component]
pub fn SortSlot(sort: SortSignals, slot: usize) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(sort, slot);
    let on_mouseleave = make_on_slot_mouseleave(sort);

    let is_active = move || sort.slot_read.get() == Some(slot);
    let is_dragging = move || sort.dragging_read.get().is_some();

    let slot_class = move || {
        let mut c = String::from("sort-slot");
        if !is_dragging() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=slot_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
