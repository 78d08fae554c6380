//! Merge flat header cells into a two-row header.
//!
//! The input is never mutated: every output cell is a fresh copy, so a
//! header can be re-rendered from the same descriptors any number of times.

use crate::types::{CellKind, GroupSpec, HeaderCell, RenderedHeader};

/// Build the rendered header for a flat sequence of header cells.
///
/// Without any group cell the input comes back unchanged as a single row.
/// Otherwise selector and normal cells span both rows, each group cell
/// produces one second-row child carrying the column's interactive
/// attributes, and group cells flagged `merge` are dropped from the first
/// row, leaving the umbrella cell of their key to span them.
pub fn merge_header(cells: &[HeaderCell]) -> RenderedHeader {
    if !cells.iter().any(HeaderCell::is_group) {
        return RenderedHeader::single_row(cells.to_vec());
    }

    let mut top = Vec::with_capacity(cells.len());
    let mut children = Vec::new();
    let mut selector_done = false;

    for cell in cells {
        match &cell.kind {
            CellKind::Selector if !selector_done => {
                selector_done = true;
                top.push(span_both_rows(cell));
            }
            CellKind::Normal => top.push(span_both_rows(cell)),
            CellKind::Group(spec) => {
                let (umbrella, child) = split_group(cell, spec);
                children.push(child);
                if !spec.merge {
                    top.push(umbrella);
                }
            }
            _ => top.push(cell.clone()),
        }
    }

    tracing::trace!(
        top = top.len(),
        children = children.len(),
        "merged header into two rows"
    );

    RenderedHeader {
        top,
        children: Some(children),
    }
}

fn span_both_rows(cell: &HeaderCell) -> HeaderCell {
    let mut out = cell.clone();
    out.rowspan = 2;
    out.style.vertical_middle = true;
    out
}

/// Split a group cell into its first-row umbrella and its second-row child.
fn split_group(cell: &HeaderCell, spec: &GroupSpec) -> (HeaderCell, HeaderCell) {
    let mut umbrella = cell.clone();

    let mut child = HeaderCell::child(spec.child_name.as_str());
    child.attributes = umbrella.attributes.take_relocated();
    child.width_hint = umbrella.width_hint.take();

    umbrella.style.text_center = true;
    umbrella.style.border_bottom_none = true;

    (umbrella, child)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::types::{Attributes, HeaderAttr};

    fn group(label: &str, child: &str, key: Option<&str>, merge: bool) -> HeaderCell {
        HeaderCell::group(
            label,
            GroupSpec {
                child_name: child.to_string(),
                merge_key: key.map(str::to_string),
                merge,
            },
        )
    }

    #[test]
    fn test_no_groups_is_passthrough() {
        let cells = vec![
            HeaderCell::selector(),
            HeaderCell::normal("Name"),
            HeaderCell::normal("Qty"),
        ];
        let header = merge_header(&cells);
        assert_eq!(header.top, cells);
        assert!(header.children.is_none());
        assert_eq!(header.row_count(), 1);
    }

    #[test]
    fn test_empty_input() {
        let header = merge_header(&[]);
        assert!(header.top.is_empty());
        assert!(header.children.is_none());
    }

    #[test]
    fn test_normal_and_selector_span_two_rows() {
        let cells = vec![
            HeaderCell::selector(),
            group("Totals", "Debit", None, false),
            HeaderCell::normal("Name"),
        ];
        let header = merge_header(&cells);

        let selector = &header.top[0];
        assert_eq!(selector.rowspan, 2);
        assert!(selector.style.vertical_middle);

        let name = &header.top[2];
        assert_eq!(name.rowspan, 2);
        assert!(name.style.vertical_middle);

        let umbrella = &header.top[1];
        assert_eq!(umbrella.rowspan, 1);
        assert!(umbrella.style.text_center);
        assert!(umbrella.style.border_bottom_none);
    }

    #[test]
    fn test_only_first_selector_is_spanned() {
        let cells = vec![
            HeaderCell::selector(),
            HeaderCell::selector(),
            group("G", "C", None, false),
        ];
        let header = merge_header(&cells);
        assert_eq!(header.top[0].rowspan, 2);
        assert_eq!(header.top[1].rowspan, 1);
    }

    #[test]
    fn test_remove_control_is_untouched() {
        let cells = vec![group("G", "C", None, false), HeaderCell::remove_control()];
        let header = merge_header(&cells);
        assert_eq!(header.top[1], HeaderCell::remove_control());
    }

    #[test]
    fn test_attributes_move_to_child() {
        let mut cell = group("Totals", "Debit", None, false);
        cell.attributes = Attributes::new()
            .with(HeaderAttr::FieldName, "debit")
            .with(HeaderAttr::SortState, "descending")
            .with(HeaderAttr::Other("data-extra".into()), "x");
        cell.width_hint = Some("92px".to_string());

        let header = merge_header(&[cell]);
        let umbrella = &header.top[0];
        let child = &header.children.as_ref().unwrap()[0];

        assert_eq!(child.label, "Debit");
        assert_eq!(child.kind, CellKind::Child);
        assert_eq!(child.field_name(), Some("debit"));
        assert_eq!(child.attributes.get(&HeaderAttr::SortState), Some("descending"));
        assert_eq!(child.width_hint.as_deref(), Some("92px"));

        assert_eq!(umbrella.field_name(), None);
        assert!(!umbrella.attributes.contains(&HeaderAttr::SortState));
        assert_eq!(
            umbrella.attributes.get(&HeaderAttr::Other("data-extra".into())),
            Some("x")
        );
        assert!(umbrella.width_hint.is_none());
    }

    #[test]
    fn test_input_is_not_mutated() {
        let mut cell = group("Totals", "Debit", None, false);
        cell.attributes.set(HeaderAttr::FieldName, "debit");
        let cells = vec![cell];
        let before = cells.clone();

        let first = merge_header(&cells);
        let second = merge_header(&cells);

        assert_eq!(cells, before);
        assert_eq!(first, second);
    }

    #[test]
    fn test_flagged_siblings_collapse() {
        let mut umbrella = group("Totals", "Debit", Some("totals"), false);
        umbrella.colspan = 3;
        let cells = vec![
            umbrella,
            group("Totals", "Credit", Some("totals"), true),
            group("Totals", "Balance", Some("totals"), true),
        ];
        let header = merge_header(&cells);

        assert_eq!(header.top.len(), 1);
        assert_eq!(header.top[0].colspan, 3);
        let labels: Vec<_> = header
            .children
            .unwrap()
            .into_iter()
            .map(|c| c.label)
            .collect();
        assert_eq!(labels, ["Debit", "Credit", "Balance"]);
    }
}
