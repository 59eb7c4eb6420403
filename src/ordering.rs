//! Mount Ordering
//!
//! Pure helpers behind the drag-reorder flow: adapt wire mounts into
//! tagged grid cells, build the update_mount_order payload, and encode
//! it for the wire.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::Mount;

/// A grid cell as the reorder payload sees it
#[derive(Debug, Clone, PartialEq)]
pub enum MountCell {
    Tool { mount_point: String },
    Subproject { shortname: String },
    /// Carries neither identifier; occupies a position, emits nothing
    Plain,
}

/// Adapt wire mounts into tagged cells, inspecting each mount once
pub fn cells(mounts: &[Mount]) -> Vec<MountCell> {
    mounts
        .iter()
        .map(|mount| {
            if let Some(mount_point) = &mount.mount_point {
                MountCell::Tool { mount_point: mount_point.clone() }
            } else if let Some(shortname) = &mount.shortname {
                MountCell::Subproject { shortname: shortname.clone() }
            } else {
                MountCell::Plain
            }
        })
        .collect()
}

/// Build the update_mount_order fields: the session token first, then
/// tools-{n}.* and subs-{n}.* with independent per-kind counters.
///
/// Ordinals are absolute grid positions, so a Plain cell consumes an
/// ordinal without emitting fields and per-kind ordinals need not be
/// contiguous.
pub fn reorder_payload(session_id: &str, cells: &[MountCell]) -> Vec<(String, String)> {
    let mut params = vec![("_session_id".to_string(), session_id.to_string())];
    let mut tools = 0usize;
    let mut subs = 0usize;
    for (i, cell) in cells.iter().enumerate() {
        match cell {
            MountCell::Tool { mount_point } => {
                params.push((format!("tools-{tools}.mount_point"), mount_point.clone()));
                params.push((format!("tools-{tools}.ordinal"), i.to_string()));
                tools += 1;
            }
            MountCell::Subproject { shortname } => {
                params.push((format!("subs-{subs}.shortname"), shortname.clone()));
                params.push((format!("subs-{subs}.ordinal"), i.to_string()));
                subs += 1;
            }
            MountCell::Plain => {}
        }
    }
    params
}

/// Characters escaped in application/x-www-form-urlencoded values
const FORM: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'*')
    .remove(b' ');

fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, FORM).to_string().replace(' ', "+")
}

/// Encode fields as an application/x-www-form-urlencoded body
pub fn encode_form(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(name, value)| format!("{}={}", encode_component(name), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Apply a drop into an insertion slot to the local display order.
///
/// Slots count insertion points: 0 is before the first item, the list
/// length is after the last. Dropping into a slot adjacent to the
/// dragged item leaves the order unchanged.
pub fn apply_reorder<T>(items: &mut Vec<T>, from: usize, to_slot: usize) {
    if from >= items.len() {
        return;
    }
    let item = items.remove(from);
    let to = if to_slot > from { to_slot - 1 } else { to_slot };
    let to = to.min(items.len());
    items.insert(to, item);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mount;

    fn tool(mount_point: &str) -> Mount {
        Mount {
            label: mount_point.to_string(),
            url: format!("{mount_point}/"),
            delete_url: format!("{mount_point}/delete"),
            mount_point: Some(mount_point.to_string()),
            shortname: None,
            options_url: None,
            sortable: true,
        }
    }

    fn sub(shortname: &str) -> Mount {
        Mount {
            label: shortname.to_string(),
            url: format!("{shortname}/"),
            delete_url: format!("{shortname}/delete"),
            mount_point: None,
            shortname: Some(shortname.to_string()),
            options_url: None,
            sortable: true,
        }
    }

    fn plain(label: &str) -> Mount {
        Mount {
            label: label.to_string(),
            url: String::new(),
            delete_url: String::new(),
            mount_point: None,
            shortname: None,
            options_url: None,
            sortable: false,
        }
    }

    fn field(params: &[(String, String)], name: &str) -> String {
        params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
            .unwrap_or_else(|| panic!("missing field {name}"))
    }

    #[test]
    fn test_cells_tag_by_identifier() {
        let mounts = vec![tool("wiki"), sub("client"), plain("add")];
        assert_eq!(
            cells(&mounts),
            vec![
                MountCell::Tool { mount_point: "wiki".to_string() },
                MountCell::Subproject { shortname: "client".to_string() },
                MountCell::Plain,
            ]
        );
    }

    #[test]
    fn test_interleaved_kinds_count_independently() {
        let mounts = vec![tool("wiki"), sub("client"), tool("tickets"), sub("docs"), tool("git")];
        let params = reorder_payload("tok", &cells(&mounts));

        // Per-kind counters rank within the kind; ordinals are absolute.
        assert_eq!(field(&params, "tools-0.mount_point"), "wiki");
        assert_eq!(field(&params, "tools-0.ordinal"), "0");
        assert_eq!(field(&params, "tools-1.mount_point"), "tickets");
        assert_eq!(field(&params, "tools-1.ordinal"), "2");
        assert_eq!(field(&params, "tools-2.mount_point"), "git");
        assert_eq!(field(&params, "tools-2.ordinal"), "4");
        assert_eq!(field(&params, "subs-0.shortname"), "client");
        assert_eq!(field(&params, "subs-0.ordinal"), "1");
        assert_eq!(field(&params, "subs-1.shortname"), "docs");
        assert_eq!(field(&params, "subs-1.ordinal"), "3");
    }

    #[test]
    fn test_empty_grid_sends_only_the_token() {
        let params = reorder_payload("tok", &[]);
        assert_eq!(params, vec![("_session_id".to_string(), "tok".to_string())]);
    }

    #[test]
    fn test_plain_cells_consume_ordinals() {
        let mounts = vec![tool("wiki"), plain("add"), tool("git")];
        let params = reorder_payload("tok", &cells(&mounts));

        // The middle cell emits nothing but the next tool still sits at
        // absolute position 2, so tool ordinals are not contiguous.
        assert_eq!(field(&params, "tools-0.ordinal"), "0");
        assert_eq!(field(&params, "tools-1.ordinal"), "2");
        assert!(!params.iter().any(|(k, _)| k.starts_with("subs-")));
        assert_eq!(params.len(), 5);
    }

    #[test]
    fn test_token_is_first_field() {
        let params = reorder_payload("sess-123", &cells(&[tool("wiki")]));
        assert_eq!(params[0], ("_session_id".to_string(), "sess-123".to_string()));
    }

    #[test]
    fn test_encode_form() {
        let params = vec![
            ("tools-0.mount_point".to_string(), "my wiki".to_string()),
            ("_session_id".to_string(), "a/b+c".to_string()),
        ];
        assert_eq!(
            encode_form(&params),
            "tools-0.mount_point=my+wiki&_session_id=a%2Fb%2Bc"
        );
    }

    #[test]
    fn test_apply_reorder_forward() {
        let mut items = vec!["a", "b", "c", "d"];
        // Drag "a" into the slot after "c"
        apply_reorder(&mut items, 0, 3);
        assert_eq!(items, vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_apply_reorder_backward() {
        let mut items = vec!["a", "b", "c", "d"];
        // Drag "d" into the slot before "b"
        apply_reorder(&mut items, 3, 1);
        assert_eq!(items, vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_apply_reorder_adjacent_slot_is_noop() {
        let mut items = vec!["a", "b", "c"];
        apply_reorder(&mut items, 1, 1);
        assert_eq!(items, vec!["a", "b", "c"]);
        apply_reorder(&mut items, 1, 2);
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_apply_reorder_out_of_range_from() {
        let mut items = vec!["a", "b"];
        apply_reorder(&mut items, 5, 0);
        assert_eq!(items, vec!["a", "b"]);
    }
}
