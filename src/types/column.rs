use serde::{Deserialize, Serialize};

use super::HeaderCell;

/// Field types with a list-view default width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Boolean,
    Char,
    Text,
    Html,
    Date,
    Datetime,
    Float,
    Integer,
    Monetary,
    Selection,
    Many2one,
    One2many,
    Many2many,
    Reference,
    Binary,
    /// Drag handle widget
    Handle,
}

impl FieldType {
    /// Width hint used when the view does not declare one
    pub fn default_width_hint(self) -> &'static str {
        match self {
            FieldType::Boolean => "70px",
            FieldType::Date => "92px",
            FieldType::Datetime => "146px",
            FieldType::Float => "92px",
            FieldType::Integer => "74px",
            FieldType::Monetary => "104px",
            FieldType::Handle => "33px",
            _ => "1",
        }
    }

    /// Numeric columns get right-aligned headers
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            FieldType::Float | FieldType::Integer | FieldType::Monetary
        )
    }
}

/// One data column, derived from a leaf header cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_hint: Option<String>,
    /// Row-selection checkbox column
    #[serde(default)]
    pub is_selector: bool,
    /// False when the host hides the column's header (responsive rules)
    #[serde(default = "visible_default")]
    pub visible: bool,
}

fn visible_default() -> bool {
    true
}

impl Column {
    pub fn new(field_name: impl Into<String>, width_hint: Option<&str>) -> Self {
        Self {
            field_name: Some(field_name.into()),
            width_hint: width_hint.map(str::to_string),
            is_selector: false,
            visible: true,
        }
    }

    pub fn selector() -> Self {
        Self {
            field_name: None,
            width_hint: None,
            is_selector: true,
            visible: true,
        }
    }

    /// Column for a normal or child header cell
    pub fn from_leaf(cell: &HeaderCell) -> Self {
        Self {
            field_name: cell.field_name().map(str::to_string),
            width_hint: cell.width_hint.clone(),
            is_selector: false,
            visible: true,
        }
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}
