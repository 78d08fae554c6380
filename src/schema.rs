//! Header cells from a declarative list view.
//!
//! Converts view column nodes into [`HeaderCell`]s ready for
//! [`crate::header::merge_header`], and checks the group declarations the
//! merge step relies on: every merge key needs exactly one umbrella cell,
//! and its colspan must cover all cells sharing the key.

use std::collections::HashMap;

use crate::error::{LayoutError, Result};
use crate::types::{
    Attributes, ColumnNode, DataState, GroupSpec, HeaderAttr, HeaderCell, ViewDescriptor,
};

/// Header class of numeric columns
const NUMBER_HEADER_CLASS: &str = "o_list_number_th";

/// Build the header cells of a view for the current data state.
///
/// The selector cell comes first when the view has one, the remove control
/// last.
///
/// # Errors
/// Returns an error if a merge group is declared inconsistently.
pub fn build_header_cells(view: &ViewDescriptor, state: &DataState) -> Result<Vec<HeaderCell>> {
    validate_groups(&view.columns)?;

    let mut cells = Vec::with_capacity(view.columns.len() + 2);
    if view.has_selector {
        cells.push(HeaderCell::selector());
    }
    cells.extend(view.columns.iter().map(|node| header_cell(node, state)));
    if view.has_remove_column {
        cells.push(HeaderCell::remove_control());
    }
    Ok(cells)
}

/// Header cell for one column node
pub fn header_cell(node: &ColumnNode, state: &DataState) -> HeaderCell {
    let mut cell = match &node.child_name {
        Some(child_name) => {
            let mut cell = HeaderCell::group(
                node.base_string.as_deref().unwrap_or(&node.string),
                GroupSpec {
                    child_name: child_name.clone(),
                    merge_key: node.base_string.clone(),
                    merge: node.is_merged(),
                },
            );
            if node.base_string.is_some() {
                cell.colspan = node.colspan.unwrap_or(1);
            }
            cell
        }
        None => HeaderCell::normal(node.base_string.as_deref().unwrap_or(&node.string)),
    };

    cell.attributes = node_attributes(node, state);
    cell.width_hint = node.effective_width();
    cell
}

fn node_attributes(node: &ColumnNode, state: &DataState) -> Attributes {
    let mut attrs = Attributes::new().with(HeaderAttr::FieldName, node.name.as_str());

    if let Some(help) = node.help.as_deref().filter(|h| !h.is_empty()) {
        attrs.set(HeaderAttr::Tooltip, help);
    }

    let mut classes: Vec<&str> = node
        .class
        .as_deref()
        .map(|c| c.split_whitespace().collect())
        .unwrap_or_default();
    if node.field_type.is_some_and(|t| t.is_numeric()) && !classes.contains(&NUMBER_HEADER_CLASS) {
        classes.push(NUMBER_HEADER_CLASS);
    }
    if !classes.is_empty() {
        attrs.set(HeaderAttr::CssClass, classes.join(" "));
    }

    if let Some(sort) = state.sort_state(&node.name) {
        attrs.set(HeaderAttr::SortState, sort);
    }

    attrs
}

#[derive(Default)]
struct KeyStats<'a> {
    members: u32,
    umbrellas: Vec<&'a ColumnNode>,
}

/// Check every merge group against the colspan of its umbrella.
///
/// # Errors
/// Returns the first inconsistency in column order.
pub fn validate_groups(columns: &[ColumnNode]) -> Result<()> {
    let mut order: Vec<&str> = Vec::new();
    let mut stats: HashMap<&str, KeyStats<'_>> = HashMap::new();

    for node in columns {
        if node.child_name.is_none() {
            continue;
        }
        let Some(key) = node.base_string.as_deref() else {
            if node.is_merged() {
                return Err(LayoutError::OrphanMergeCell(node.name.clone()));
            }
            continue;
        };

        let entry = stats.entry(key).or_insert_with(|| {
            order.push(key);
            KeyStats::default()
        });
        entry.members += 1;
        if !node.is_merged() {
            entry.umbrellas.push(node);
        }
    }

    for key in order {
        let Some(entry) = stats.get(key) else {
            continue;
        };
        let umbrella = match entry.umbrellas.as_slice() {
            [] => return Err(LayoutError::MissingUmbrella(key.to_string())),
            [one] => *one,
            _ => return Err(LayoutError::DuplicateUmbrella(key.to_string())),
        };
        let declared = umbrella.colspan.unwrap_or(1);
        if declared != entry.members {
            return Err(LayoutError::MalformedGroup {
                key: key.to_string(),
                declared,
                actual: entry.members,
            });
        }
    }

    Ok(())
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
    use crate::types::{CellKind, FieldType, MergeFlag, OrderBy};

    fn field(name: &str, string: &str) -> ColumnNode {
        ColumnNode {
            name: name.to_string(),
            string: string.to_string(),
            ..ColumnNode::default()
        }
    }

    fn grouped(name: &str, child: &str, key: &str, merge: bool, colspan: Option<u32>) -> ColumnNode {
        ColumnNode {
            name: name.to_string(),
            string: child.to_string(),
            base_string: Some(key.to_string()),
            child_name: Some(child.to_string()),
            merge: Some(MergeFlag::Text(if merge { "True" } else { "False" }.to_string())),
            colspan,
            ..ColumnNode::default()
        }
    }

    #[test]
    fn test_normal_cell() {
        let mut node = field("partner_id", "Partner");
        node.help = Some("Customer".to_string());
        let cell = header_cell(&node, &DataState::default());

        assert_eq!(cell.label, "Partner");
        assert_eq!(cell.kind, CellKind::Normal);
        assert_eq!(cell.field_name(), Some("partner_id"));
        assert_eq!(cell.attributes.get(&HeaderAttr::Tooltip), Some("Customer"));
        assert_eq!(cell.colspan, 1);
    }

    #[test]
    fn test_group_cell_uses_base_string() {
        let node = grouped("debit", "Debit", "Totals", false, Some(2));
        let cell = header_cell(&node, &DataState::default());

        assert_eq!(cell.label, "Totals");
        assert_eq!(cell.colspan, 2);
        let spec = cell.group_spec().unwrap();
        assert_eq!(spec.child_name, "Debit");
        assert_eq!(spec.merge_key.as_deref(), Some("Totals"));
        assert!(!spec.merge);
    }

    #[test]
    fn test_merge_flag_forms() {
        assert!(MergeFlag::Text("True".into()).is_set());
        assert!(!MergeFlag::Text("False".into()).is_set());
        assert!(!MergeFlag::Text("true".into()).is_set());
        assert!(MergeFlag::Bool(true).is_set());
    }

    #[test]
    fn test_width_falls_back_to_field_type() {
        let mut node = field("amount", "Amount");
        node.field_type = Some(FieldType::Monetary);
        let cell = header_cell(&node, &DataState::default());
        assert_eq!(cell.width_hint.as_deref(), Some("104px"));
        assert_eq!(
            cell.attributes.get(&HeaderAttr::CssClass),
            Some(NUMBER_HEADER_CLASS)
        );

        node.width = Some("3".to_string());
        assert_eq!(header_cell(&node, &DataState::default()).width_hint.as_deref(), Some("3"));

        let plain = field("note", "Note");
        assert_eq!(header_cell(&plain, &DataState::default()).width_hint, None);
    }

    #[test]
    fn test_sort_state_from_first_order() {
        let state = DataState {
            order_by: vec![
                OrderBy { name: "date".into(), asc: false },
                OrderBy { name: "name".into(), asc: true },
            ],
            ..DataState::default()
        };
        let date = header_cell(&field("date", "Date"), &state);
        let name = header_cell(&field("name", "Name"), &state);
        assert_eq!(date.attributes.get(&HeaderAttr::SortState), Some("descending"));
        assert_eq!(name.attributes.get(&HeaderAttr::SortState), None);
    }

    #[test]
    fn test_selector_and_remove_placement() {
        let view = ViewDescriptor {
            columns: vec![field("name", "Name")],
            has_selector: true,
            has_remove_column: true,
            ..ViewDescriptor::default()
        };
        let cells = build_header_cells(&view, &DataState::default()).unwrap();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0].kind, CellKind::Selector);
        assert_eq!(cells[2].kind, CellKind::RemoveControl);
    }

    #[test]
    fn test_valid_group() {
        let columns = vec![
            grouped("debit", "Debit", "Totals", false, Some(2)),
            grouped("credit", "Credit", "Totals", true, None),
        ];
        assert!(validate_groups(&columns).is_ok());
    }

    #[test]
    fn test_colspan_mismatch() {
        let columns = vec![
            grouped("debit", "Debit", "Totals", false, Some(3)),
            grouped("credit", "Credit", "Totals", true, None),
        ];
        match validate_groups(&columns) {
            Err(LayoutError::MalformedGroup {
                key,
                declared,
                actual,
            }) => {
                assert_eq!(key, "Totals");
                assert_eq!(declared, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("expected MalformedGroup, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_and_duplicate_umbrella() {
        let all_flagged = vec![
            grouped("debit", "Debit", "Totals", true, None),
            grouped("credit", "Credit", "Totals", true, None),
        ];
        assert!(matches!(
            validate_groups(&all_flagged),
            Err(LayoutError::MissingUmbrella(key)) if key == "Totals"
        ));

        let two = vec![
            grouped("debit", "Debit", "Totals", false, Some(2)),
            grouped("credit", "Credit", "Totals", false, Some(2)),
        ];
        assert!(matches!(
            validate_groups(&two),
            Err(LayoutError::DuplicateUmbrella(_))
        ));
    }

    #[test]
    fn test_orphan_merge_cell() {
        let mut node = grouped("debit", "Debit", "Totals", true, None);
        node.base_string = None;
        assert!(matches!(
            validate_groups(&[node]),
            Err(LayoutError::OrphanMergeCell(name)) if name == "debit"
        ));
    }
}
