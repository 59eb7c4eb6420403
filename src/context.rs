//! Application Context
//!
//! Shared state provided via Leptos Context API. The page-level globals
//! of the admin page (the pending delete form, the open dialog targets,
//! the notification list) are fields of this one controller object.

use leptos::prelude::*;

use crate::components::{AdminLink, InstallTarget, PendingDelete};

/// Notification status, mirrored in the message's style class
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Status {
    Confirm,
    Error,
}

/// One entry in the notification area
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub text: String,
    pub status: Status,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload page data from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
    /// Install dialog subject (None = dialog closed) - read
    pub install_target: ReadSignal<Option<InstallTarget>>,
    set_install_target: WriteSignal<Option<InstallTarget>>,
    /// Remote-content popup trigger (None = popup closed) - read
    pub admin_link: ReadSignal<Option<AdminLink>>,
    set_admin_link: WriteSignal<Option<AdminLink>>,
    /// Delete form held between trigger click and confirm/cancel - read
    pub pending_delete: ReadSignal<Option<PendingDelete>>,
    set_pending_delete: WriteSignal<Option<PendingDelete>>,
    /// Notification area contents - read
    pub notices: ReadSignal<Vec<Notice>>,
    set_notices: WriteSignal<Vec<Notice>>,
    notice_seq: ReadSignal<u32>,
    set_notice_seq: WriteSignal<u32>,
}

impl AppContext {
    pub fn new() -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        let (install_target, set_install_target) = signal(None);
        let (admin_link, set_admin_link) = signal(None);
        let (pending_delete, set_pending_delete) = signal(None);
        let (notices, set_notices) = signal(Vec::new());
        let (notice_seq, set_notice_seq) = signal(0u32);
        Self {
            reload_trigger,
            set_reload_trigger,
            install_target,
            set_install_target,
            admin_link,
            set_admin_link,
            pending_delete,
            set_pending_delete,
            notices,
            set_notices,
            notice_seq,
            set_notice_seq,
        }
    }

    /// Trigger a reload of page data
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn show_install(&self, target: InstallTarget) {
        self.set_install_target.set(Some(target));
    }

    pub fn close_install(&self) {
        self.set_install_target.set(None);
    }

    pub fn show_admin(&self, link: AdminLink) {
        self.set_admin_link.set(Some(link));
    }

    pub fn close_admin(&self) {
        self.set_admin_link.set(None);
    }

    /// Remember the delete form behind a trigger. Overwritten only by
    /// the next trigger click; cleared on confirm or cancel.
    pub fn request_delete(&self, pending: PendingDelete) {
        self.set_pending_delete.set(Some(pending));
    }

    /// Clear and return the stored delete form for submission
    pub fn take_delete(&self) -> Option<PendingDelete> {
        let pending = self.pending_delete.get_untracked();
        self.set_pending_delete.set(None);
        pending
    }

    pub fn cancel_delete(&self) {
        self.set_pending_delete.set(None);
    }

    /// Show a transient notice in the message area
    pub fn notify(&self, text: impl Into<String>, status: Status) {
        self.set_notice_seq.update(|v| *v += 1);
        let id = self.notice_seq.get_untracked();
        self.set_notices.update(|list| {
            list.push(Notice { id, text: text.into(), status });
        });
    }

    pub fn dismiss(&self, id: u32) {
        self.set_notices.update(|list| list.retain(|n| n.id != id));
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
