//! Dialog Targets
//!
//! What each admin dialog is currently pointed at.

/// Install dialog subject: a named tool, or none for a subproject
#[derive(Debug, Clone, PartialEq)]
pub struct InstallTarget {
    /// Entry-point name of the tool to preconfigure
    pub tool: Option<String>,
    pub relaxed_mount_points: bool,
}

/// Trigger for the remote-content edit popup
#[derive(Debug, Clone, PartialEq)]
pub struct AdminLink {
    pub href: String,
    /// The trigger's own label text, reused as the popup title
    pub label: String,
}

/// Delete form held between a trigger click and confirm/cancel
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete {
    pub url: String,
    pub mount_point: Option<String>,
}
