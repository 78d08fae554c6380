use serde::{Deserialize, Serialize};
use std::fmt;

/// A CSS length, kept verbatim as declared (`"120px"`, `"7.5em"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Length(String);

impl Length {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Pixel length. Whole values print without a fraction (`80px`);
    /// negative and non-finite values become `0px`.
    pub fn px(value: f32) -> Self {
        let value = if value.is_finite() && value > 0.0 { value } else { 0.0 };
        if value.fract().abs() < f32::EPSILON && value.abs() < 1e9 {
            Self(format!("{value:.0}px"))
        } else {
            Self(format!("{value}px"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Width decided for one column in one layout pass
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum WidthAssignment {
    /// Hard width
    Absolute(Length),
    /// Floor the column may grow beyond
    MinWidth(Length),
    /// Weighted column left to the natural table flow
    RelativeWeight(f64),
    /// No contribution to layout
    #[default]
    Unset,
}

impl WidthAssignment {
    /// CSS declaration for the header cell, or `None` when the assignment
    /// emits no style.
    pub fn css_declaration(&self) -> Option<String> {
        match self {
            WidthAssignment::Absolute(len) => Some(format!("width: {len}")),
            WidthAssignment::MinWidth(len) => Some(format!("min-width: {len}")),
            WidthAssignment::RelativeWeight(_) | WidthAssignment::Unset => None,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, WidthAssignment::Unset)
    }
}

/// Planning result for one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedColumn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    pub assignment: WidthAssignment,
    /// Parsed relative weight; `None` for hidden, selector and absolute columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Proportional share in percent, computed for weighted columns of an
    /// empty grid. Not applied: the floor width is used instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_percent: Option<f64>,
}

/// Width assignments for every column of a grid
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidthPlan {
    pub columns: Vec<PlannedColumn>,
    /// Sum of the weights of visible weighted columns
    pub total_weight: f64,
    /// Fixed width of the row-action column, set only for an empty grid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_column: Option<Length>,
}

impl WidthPlan {
    /// Assignment of the column with the given field name
    pub fn get(&self, field_name: &str) -> Option<&WidthAssignment> {
        self.columns
            .iter()
            .find(|c| c.field_name.as_deref() == Some(field_name))
            .map(|c| &c.assignment)
    }

    pub fn assignments(&self) -> impl Iterator<Item = &WidthAssignment> {
        self.columns.iter().map(|c| &c.assignment)
    }
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

    #[test]
    fn test_px_formatting() {
        assert_eq!(Length::px(80.0).as_str(), "80px");
        assert_eq!(Length::px(32.0).to_string(), "32px");
        assert_eq!(Length::px(12.5).as_str(), "12.5px");
    }

    #[test]
    fn test_px_rejects_unusable_values() {
        assert_eq!(Length::px(f32::NAN).as_str(), "0px");
        assert_eq!(Length::px(f32::INFINITY).as_str(), "0px");
        assert_eq!(Length::px(-80.0).as_str(), "0px");
        assert_eq!(Length::px(-0.0).as_str(), "0px");
    }

    #[test]
    fn test_css_declaration() {
        assert_eq!(
            WidthAssignment::Absolute(Length::new("120px")).css_declaration(),
            Some("width: 120px".to_string())
        );
        assert_eq!(
            WidthAssignment::MinWidth(Length::new("120px")).css_declaration(),
            Some("min-width: 120px".to_string())
        );
        assert_eq!(WidthAssignment::RelativeWeight(2.0).css_declaration(), None);
        assert_eq!(WidthAssignment::Unset.css_declaration(), None);
    }

    #[test]
    fn test_assignment_json_shape() {
        let json = serde_json::to_value(WidthAssignment::MinWidth(Length::px(80.0))).unwrap();
        assert_eq!(json["kind"], "minWidth");
        assert_eq!(json["value"], "80px");

        let json = serde_json::to_value(WidthAssignment::Unset).unwrap();
        assert_eq!(json["kind"], "unset");
    }
}
