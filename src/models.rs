//! Frontend Models
//!
//! Data structures matching the admin backend's JSON endpoints.

use serde::{Deserialize, Serialize};

/// One cell in the mount grid: an installed tool or a subproject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mount {
    pub label: String,
    pub url: String,
    /// Endpoint the delete confirmation submits to
    pub delete_url: String,
    /// Present for tools
    #[serde(default)]
    pub mount_point: Option<String>,
    /// Present for subprojects
    #[serde(default)]
    pub shortname: Option<String>,
    /// Admin options page shown in the edit popup
    #[serde(default)]
    pub options_url: Option<String>,
    /// Fixed cells stay in place but still occupy an ordinal
    #[serde(default = "default_true")]
    pub sortable: bool,
}

fn default_true() -> bool {
    true
}

/// Metadata for a tool that can be installed on the project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallableTool {
    /// Entry-point name identifying the tool type
    pub name: String,
    pub default_label: String,
    pub default_mount: String,
    #[serde(default)]
    pub relaxed_mount_points: bool,
}

/// Project properties edited on the admin page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub homepage: String,
}
