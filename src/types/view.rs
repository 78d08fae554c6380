use serde::{Deserialize, Serialize};

use super::{FieldType, GridConfig};

/// `merge` attribute of a view column: either a JSON boolean or the view
/// arch strings `"True"` / `"False"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MergeFlag {
    Bool(bool),
    Text(String),
}

impl MergeFlag {
    pub fn is_set(&self) -> bool {
        match self {
            MergeFlag::Bool(b) => *b,
            MergeFlag::Text(s) => s == "True",
        }
    }
}

/// One `<field>` node of a list view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ColumnNode {
    /// Field name
    pub name: String,
    /// Column label
    #[serde(default)]
    pub string: String,
    /// Umbrella label shared by the columns of a merged group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_string: Option<String>,
    /// Number of columns the umbrella spans
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colspan: Option<u32>,
    /// Second-row label; its presence makes the column part of a group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge: Option<MergeFlag>,
    /// Declared width hint (`"120px"`, `"2"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
    /// Tooltip text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    /// Extra header classes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl ColumnNode {
    pub fn is_merged(&self) -> bool {
        self.merge.as_ref().is_some_and(MergeFlag::is_set)
    }

    /// Declared width, falling back to the field type default
    pub fn effective_width(&self) -> Option<String> {
        self.width
            .clone()
            .or_else(|| self.field_type.map(|t| t.default_width_hint().to_string()))
    }
}

/// Declarative description of a list view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewDescriptor {
    pub columns: Vec<ColumnNode>,
    /// Whether rows can be selected (checkbox column)
    #[serde(default)]
    pub has_selector: bool,
    /// Whether rows have a delete control (trash column)
    #[serde(default)]
    pub has_remove_column: bool,
    #[serde(default)]
    pub config: GridConfig,
}

/// Sort order applied to one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub name: String,
    #[serde(default = "ascending_default")]
    pub asc: bool,
}

fn ascending_default() -> bool {
    true
}

/// Live state of the grid supplied by the data layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataState {
    /// Whether at least one record row is visible
    pub has_visible_data: bool,
    /// Number of records in the body
    pub record_count: usize,
    /// Fields whose header the host currently hides
    pub hidden_fields: Vec<String>,
    /// Current ordering, most significant first
    pub order_by: Vec<OrderBy>,
}

impl DataState {
    /// `aria-sort` value for a field. Only the most significant ordering
    /// is reflected in the header.
    pub fn sort_state(&self, field: &str) -> Option<&'static str> {
        self.order_by.first().filter(|o| o.name == field).map(|o| {
            if o.asc {
                "ascending"
            } else {
                "descending"
            }
        })
    }

    pub fn is_hidden(&self, field: &str) -> bool {
        self.hidden_fields.iter().any(|f| f == field)
    }
}
