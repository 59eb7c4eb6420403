//! Install Modal Component
//!
//! The install-tool dialog: fields preconfigured from the selected
//! tool's registered defaults, or cleared for a subproject.

use leptos::prelude::*;

use crate::components::InstallTarget;
use crate::context::AppContext;
use crate::models::InstallableTool;
use crate::session;
use crate::store::{use_app_store, AppStateStoreFields};

/// Which naming-rule hint the dialog shows. Rendered exclusively, so
/// exactly one hint block is visible after any trigger click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MountPointRule {
    Tool,
    ToolRelaxed,
    Subproject,
}

/// Field values the dialog shows for a given trigger
#[derive(Debug, Clone, PartialEq)]
pub struct InstallForm {
    pub ep_name: String,
    pub mount_point: String,
    pub mount_label: String,
    pub heading: String,
    pub rule: MountPointRule,
}

/// Resolve a trigger target against the installable-tool defaults
pub fn install_form(target: &InstallTarget, installable: &[InstallableTool]) -> InstallForm {
    let tool = target
        .tool
        .as_deref()
        .and_then(|name| installable.iter().find(|t| t.name == name));
    match tool {
        Some(tool) => InstallForm {
            ep_name: tool.name.clone(),
            mount_point: tool.default_mount.clone(),
            mount_label: tool.default_label.clone(),
            heading: tool.default_label.clone(),
            rule: if target.relaxed_mount_points {
                MountPointRule::ToolRelaxed
            } else {
                MountPointRule::Tool
            },
        },
        None => InstallForm {
            ep_name: String::new(),
            mount_point: String::new(),
            mount_label: String::new(),
            heading: "Subproject".to_string(),
            rule: MountPointRule::Subproject,
        },
    }
}

/// Install dialog; open while the context carries a target
#[component]
pub fn InstallModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let form = move || {
        ctx.install_target
            .get()
            .map(|target| install_form(&target, &store.installable().get()))
    };

    view! {
        {move || form().map(|f| {
            let (rule_class, rule_text) = match f.rule {
                MountPointRule::Tool => (
                    "mount-point-name-rules tool",
                    "Mount point names must begin with a letter and contain only lowercase letters, numbers, and dashes.",
                ),
                MountPointRule::ToolRelaxed => (
                    "mount-point-name-rules tool-relaxed",
                    "Mount point names may also contain uppercase letters, underscores, periods, and plus signs.",
                ),
                MountPointRule::Subproject => (
                    "mount-point-name-rules subproject",
                    "Subproject names must begin with a letter and contain only lowercase letters and numbers.",
                ),
            };
            view! {
                <div class="lightbox install-modal">
                    <form id="install_form" method="post" action="install">
                        <h1 id="install_tool_label">{f.heading}</h1>
                        <input
                            type="hidden"
                            name="_session_id"
                            value=session::csrf_token().unwrap_or_default()
                        />
                        <input type="hidden" name="ep_name" class="new_ep_name" value=f.ep_name />
                        <label>"Label"</label>
                        <input type="text" name="mount_label" class="new_mount_label" value=f.mount_label />
                        <label>"Mount point"</label>
                        <input type="text" name="mount_point" class="new_mount_point" value=f.mount_point />
                        <p class=rule_class>{rule_text}</p>
                        <button type="submit">"Save"</button>
                        <button type="button" class="close-btn" on:click=move |_| ctx.close_install()>
                            "Cancel"
                        </button>
                    </form>
                </div>
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wiki() -> InstallableTool {
        InstallableTool {
            name: "wiki".to_string(),
            default_label: "Wiki".to_string(),
            default_mount: "wiki".to_string(),
            relaxed_mount_points: false,
        }
    }

    fn external() -> InstallableTool {
        InstallableTool {
            name: "link".to_string(),
            default_label: "External Link".to_string(),
            default_mount: "link".to_string(),
            relaxed_mount_points: true,
        }
    }

    #[test]
    fn test_known_tool_populates_defaults() {
        let target = InstallTarget { tool: Some("wiki".to_string()), relaxed_mount_points: false };
        let f = install_form(&target, &[wiki(), external()]);
        assert_eq!(f.ep_name, "wiki");
        assert_eq!(f.mount_point, "wiki");
        assert_eq!(f.mount_label, "Wiki");
        assert_eq!(f.heading, "Wiki");
        assert_eq!(f.rule, MountPointRule::Tool);
    }

    #[test]
    fn test_relaxed_flag_picks_relaxed_rule() {
        let target = InstallTarget { tool: Some("link".to_string()), relaxed_mount_points: true };
        let f = install_form(&target, &[wiki(), external()]);
        assert_eq!(f.rule, MountPointRule::ToolRelaxed);
        assert_eq!(f.heading, "External Link");
    }

    #[test]
    fn test_no_tool_clears_fields_for_subproject() {
        let target = InstallTarget { tool: None, relaxed_mount_points: false };
        let f = install_form(&target, &[wiki()]);
        assert_eq!(f.ep_name, "");
        assert_eq!(f.mount_point, "");
        assert_eq!(f.mount_label, "");
        assert_eq!(f.heading, "Subproject");
        assert_eq!(f.rule, MountPointRule::Subproject);
    }
}
