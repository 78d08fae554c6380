//! Builders for list views and header cells used by the integration tests.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use listgrid::{
    Attributes, ColumnNode, DataState, FieldType, GroupSpec, HeaderAttr, HeaderCell, MergeFlag,
    OrderBy, RenderedHeader, ViewDescriptor,
};

// ============================================================================
// Header cells
// ============================================================================

/// Group cell with a field name so its column can be found after merging
pub fn group_cell(label: &str, child: &str, key: Option<&str>, merge: bool) -> HeaderCell {
    let mut cell = HeaderCell::group(
        label,
        GroupSpec {
            child_name: child.to_string(),
            merge_key: key.map(str::to_string),
            merge,
        },
    );
    cell.attributes.set(HeaderAttr::FieldName, child.to_lowercase());
    cell
}

pub fn normal_cell(label: &str) -> HeaderCell {
    let mut cell = HeaderCell::normal(label);
    cell.attributes.set(HeaderAttr::FieldName, label.to_lowercase());
    cell
}

/// Labels of the second header row
pub fn child_labels(header: &RenderedHeader) -> Vec<String> {
    header
        .children
        .as_ref()
        .expect("header has no second row")
        .iter()
        .map(|c| c.label.clone())
        .collect()
}

pub fn top_labels(header: &RenderedHeader) -> Vec<String> {
    header.top.iter().map(|c| c.label.clone()).collect()
}

pub fn attrs(pairs: &[(HeaderAttr, &str)]) -> Attributes {
    pairs
        .iter()
        .map(|(k, v)| (k.clone(), (*v).to_string()))
        .collect()
}

// ============================================================================
// View Builder
// ============================================================================

/// Builder for list view descriptors.
#[derive(Debug, Clone, Default)]
pub struct ViewBuilder {
    view: ViewDescriptor,
}

impl ViewBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selector(mut self) -> Self {
        self.view.has_selector = true;
        self
    }

    pub fn remove_column(mut self) -> Self {
        self.view.has_remove_column = true;
        self
    }

    /// Plain field column
    pub fn field(mut self, name: &str, string: &str, width: Option<&str>) -> Self {
        self.view.columns.push(ColumnNode {
            name: name.to_string(),
            string: string.to_string(),
            width: width.map(str::to_string),
            ..ColumnNode::default()
        });
        self
    }

    /// Field column without a declared width but with a field type
    pub fn typed_field(mut self, name: &str, string: &str, field_type: FieldType) -> Self {
        self.view.columns.push(ColumnNode {
            name: name.to_string(),
            string: string.to_string(),
            field_type: Some(field_type),
            ..ColumnNode::default()
        });
        self
    }

    /// Group of columns under one umbrella label.
    ///
    /// The first child is the umbrella with `colspan = children.len()`, the
    /// rest are flagged `merge="True"` the way list view archs declare them.
    pub fn group(mut self, base: &str, children: &[(&str, &str, Option<&str>)]) -> Self {
        let count = u32::try_from(children.len()).unwrap();
        for (i, (name, child, width)) in children.iter().enumerate() {
            let umbrella = i == 0;
            self.view.columns.push(ColumnNode {
                name: (*name).to_string(),
                string: (*child).to_string(),
                base_string: Some(base.to_string()),
                colspan: umbrella.then_some(count),
                child_name: Some((*child).to_string()),
                merge: Some(MergeFlag::Text(
                    if umbrella { "False" } else { "True" }.to_string(),
                )),
                width: width.map(str::to_string),
                ..ColumnNode::default()
            });
        }
        self
    }

    /// Raw column node
    pub fn node(mut self, node: ColumnNode) -> Self {
        self.view.columns.push(node);
        self
    }

    pub fn build(self) -> ViewDescriptor {
        self.view
    }
}

// ============================================================================
// Data states
// ============================================================================

pub fn empty_state() -> DataState {
    DataState::default()
}

pub fn populated_state(records: usize) -> DataState {
    DataState {
        has_visible_data: records > 0,
        record_count: records,
        ..DataState::default()
    }
}

pub fn ordered_by(mut state: DataState, name: &str, asc: bool) -> DataState {
    state.order_by.push(OrderBy {
        name: name.to_string(),
        asc,
    });
    state
}

pub fn with_hidden(mut state: DataState, fields: &[&str]) -> DataState {
    state
        .hidden_fields
        .extend(fields.iter().map(|f| (*f).to_string()));
    state
}
