use serde::{Deserialize, Serialize};

use super::{Attributes, Column, HeaderAttr};

/// Grouping metadata of a group header cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSpec {
    /// Label of the generated second-row cell
    pub child_name: String,
    /// Identifier shared by sibling cells that collapse under one umbrella
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge_key: Option<String>,
    /// True if this cell is absorbed by the umbrella of its merge key
    #[serde(default)]
    pub merge: bool,
}

/// Role of a header cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CellKind {
    /// Row-selection checkbox header
    Selector,
    /// Leaf cell mapping 1:1 to a data column
    Normal,
    /// Cell declaring a merged group
    Group(GroupSpec),
    /// Second-row cell generated for a group
    Child,
    /// Row-delete control header
    RemoveControl,
}

/// Presentation flags set on header cells during merging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CellStyle {
    pub vertical_middle: bool,
    pub text_center: bool,
    pub border_bottom_none: bool,
}

impl CellStyle {
    /// Inline CSS for the flags that are set, or `None` if none are.
    pub fn css(&self) -> Option<String> {
        let mut rules = Vec::new();
        if self.vertical_middle {
            rules.push("vertical-align: middle");
        }
        if self.text_center {
            rules.push("text-align: center");
        }
        if self.border_bottom_none {
            rules.push("border-bottom: none");
        }
        if rules.is_empty() {
            None
        } else {
            Some(rules.join("; "))
        }
    }
}

fn one() -> u32 {
    1
}

fn is_one(n: &u32) -> bool {
    *n == 1
}

/// One header cell, either declared by the view or produced by merging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderCell {
    pub label: String,
    pub kind: CellKind,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_hint: Option<String>,
    #[serde(default = "one", skip_serializing_if = "is_one")]
    pub colspan: u32,
    #[serde(default = "one", skip_serializing_if = "is_one")]
    pub rowspan: u32,
    #[serde(default)]
    pub style: CellStyle,
}

impl HeaderCell {
    fn with_kind(label: impl Into<String>, kind: CellKind) -> Self {
        Self {
            label: label.into(),
            kind,
            attributes: Attributes::new(),
            width_hint: None,
            colspan: 1,
            rowspan: 1,
            style: CellStyle::default(),
        }
    }

    pub fn selector() -> Self {
        Self::with_kind("", CellKind::Selector)
    }

    pub fn normal(label: impl Into<String>) -> Self {
        Self::with_kind(label, CellKind::Normal)
    }

    pub fn group(label: impl Into<String>, spec: GroupSpec) -> Self {
        Self::with_kind(label, CellKind::Group(spec))
    }

    pub fn child(label: impl Into<String>) -> Self {
        Self::with_kind(label, CellKind::Child)
    }

    pub fn remove_control() -> Self {
        Self::with_kind("", CellKind::RemoveControl)
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, CellKind::Group(_))
    }

    pub fn group_spec(&self) -> Option<&GroupSpec> {
        match &self.kind {
            CellKind::Group(spec) => Some(spec),
            _ => None,
        }
    }

    /// The `data-name` attribute, if any
    pub fn field_name(&self) -> Option<&str> {
        self.attributes.get(&HeaderAttr::FieldName)
    }
}

/// Header produced by [`crate::header::merge_header`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedHeader {
    /// First row: selector, umbrella group cells, normal cells
    pub top: Vec<HeaderCell>,
    /// Second row, present iff the input declared at least one group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<HeaderCell>>,
}

impl RenderedHeader {
    pub fn single_row(top: Vec<HeaderCell>) -> Self {
        Self {
            top,
            children: None,
        }
    }

    /// Number of header rows (1 or 2)
    pub fn row_count(&self) -> usize {
        if self.children.is_some() {
            2
        } else {
            1
        }
    }

    /// Every cell, first row then second row
    pub fn cells(&self) -> impl Iterator<Item = &HeaderCell> {
        self.top.iter().chain(self.children.iter().flatten())
    }

    /// Find the leaf cell carrying a given field name
    pub fn leaf_for(&self, field_name: &str) -> Option<&HeaderCell> {
        self.cells()
            .filter(|cell| !cell.is_group())
            .find(|cell| cell.field_name() == Some(field_name))
    }

    /// Data columns in display order.
    ///
    /// Each umbrella consumes `colspan` cells of the second row. The remove
    /// control is not a column and is skipped.
    pub fn columns(&self) -> Vec<Column> {
        let mut children = self.children.iter().flatten();
        let mut columns = Vec::with_capacity(self.top.len());

        for cell in &self.top {
            match cell.kind {
                CellKind::Selector => columns.push(Column::selector()),
                CellKind::Normal | CellKind::Child => columns.push(Column::from_leaf(cell)),
                CellKind::Group(_) => {
                    for _ in 0..cell.colspan {
                        match children.next() {
                            Some(child) => columns.push(Column::from_leaf(child)),
                            None => break,
                        }
                    }
                }
                CellKind::RemoveControl => {}
            }
        }

        // A colspan short of its siblings leaves children unclaimed; keep them
        // rather than losing columns.
        columns.extend(children.map(Column::from_leaf));
        columns
    }
}
