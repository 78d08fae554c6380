//! Column width assignment for list grids.
//!
//! Sizing depends on whether the grid currently shows any record:
//! - Empty grid: absolute hints become hard widths, weighted columns get a
//!   floor width and the action column a fixed width.
//! - Populated grid: absolute hints become minimum widths so edited content
//!   can grow the column, weighted columns are left to the table flow.

use super::WidthHint;
use crate::types::{Column, GridConfig, Length, PlannedColumn, WidthAssignment, WidthPlan};

/// Default floor width of weighted columns in an empty grid, in pixels
pub const DEFAULT_WEIGHTED_FLOOR: f32 = 80.0;

/// Default width of the row-action column in an empty grid, in pixels
pub const DEFAULT_ACTION_COLUMN_WIDTH: f32 = 32.0;

/// Computes [`WidthPlan`]s from column hints and data presence
#[derive(Debug, Clone)]
pub struct WidthPlanner {
    weighted_floor: Length,
    action_column_width: Length,
}

impl Default for WidthPlanner {
    fn default() -> Self {
        Self::new()
    }
}

/// A visible column's classified hint, or why it is skipped
enum Sizing {
    Skipped,
    Absolute(Length),
    Weight(f64),
}

impl WidthPlanner {
    /// Planner with the default floor (80px) and action column (32px) widths
    pub fn new() -> Self {
        Self {
            weighted_floor: Length::px(DEFAULT_WEIGHTED_FLOOR),
            action_column_width: Length::px(DEFAULT_ACTION_COLUMN_WIDTH),
        }
    }

    /// Planner with the config's widths. A negative or non-finite width
    /// falls back to its default.
    pub fn from_config(config: &GridConfig) -> Self {
        Self {
            weighted_floor: Length::px(usable_px(
                "weightedFloorPx",
                config.weighted_floor_px,
                DEFAULT_WEIGHTED_FLOOR,
            )),
            action_column_width: Length::px(usable_px(
                "actionColumnPx",
                config.action_column_px,
                DEFAULT_ACTION_COLUMN_WIDTH,
            )),
        }
    }

    /// Assign a width to every column.
    ///
    /// # Arguments
    /// * `columns` - Columns in display order
    /// * `has_visible_data` - Whether the grid shows at least one record
    /// * `has_action_column` - Whether a row-action (remove) column exists
    pub fn plan(
        &self,
        columns: &[Column],
        has_visible_data: bool,
        has_action_column: bool,
    ) -> WidthPlan {
        let sizings: Vec<Sizing> = columns.iter().map(classify).collect();

        let total_weight: f64 = sizings
            .iter()
            .filter_map(|s| match s {
                Sizing::Weight(w) => Some(*w),
                _ => None,
            })
            .sum();

        let planned = columns
            .iter()
            .zip(sizings)
            .map(|(column, sizing)| {
                let (assignment, weight, share_percent) = match sizing {
                    Sizing::Skipped => (WidthAssignment::Unset, None, None),
                    Sizing::Absolute(len) if has_visible_data => {
                        (WidthAssignment::MinWidth(len), None, None)
                    }
                    Sizing::Absolute(len) => (WidthAssignment::Absolute(len), None, None),
                    Sizing::Weight(w) if !is_truthy(w) => (WidthAssignment::Unset, Some(w), None),
                    Sizing::Weight(w) if has_visible_data => {
                        (WidthAssignment::RelativeWeight(w), Some(w), None)
                    }
                    Sizing::Weight(w) => {
                        // The proportional share is reported but the floor is what applies.
                        let share = share_of(w, total_weight);
                        (
                            WidthAssignment::MinWidth(self.weighted_floor.clone()),
                            Some(w),
                            share,
                        )
                    }
                };
                PlannedColumn {
                    field_name: column.field_name.clone(),
                    assignment,
                    weight,
                    share_percent,
                }
            })
            .collect();

        let action_column = (has_action_column && !has_visible_data)
            .then(|| self.action_column_width.clone());

        tracing::trace!(
            columns = columns.len(),
            total_weight,
            has_visible_data,
            "planned column widths"
        );

        WidthPlan {
            columns: planned,
            total_weight,
            action_column,
        }
    }
}

fn classify(column: &Column) -> Sizing {
    if !column.visible {
        tracing::debug!(field = ?column.field_name, "column header hidden, not sized");
        return Sizing::Skipped;
    }
    if column.is_selector {
        return Sizing::Skipped;
    }
    match WidthHint::resolve(column.width_hint.as_deref()) {
        WidthHint::Absolute(len) => Sizing::Absolute(len),
        WidthHint::Weight(w) => Sizing::Weight(w),
    }
}

fn usable_px(field: &str, value: f32, default: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        tracing::warn!(field, value, default, "invalid configured width, using default");
        default
    }
}

/// Nonzero weights count as a preference; zero means none
fn is_truthy(weight: f64) -> bool {
    weight.abs() > f64::EPSILON
}

fn share_of(weight: f64, total: f64) -> Option<f64> {
    if total.abs() > f64::EPSILON {
        Some(weight / total * 100.0)
    } else {
        None
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

    fn floor() -> WidthAssignment {
        WidthAssignment::MinWidth(Length::px(DEFAULT_WEIGHTED_FLOOR))
    }

    #[test]
    fn test_empty_grid_absolute_is_hard_width() {
        let plan = WidthPlanner::new().plan(&[Column::new("a", Some("120px"))], false, false);
        assert_eq!(
            plan.get("a"),
            Some(&WidthAssignment::Absolute(Length::new("120px")))
        );
    }

    #[test]
    fn test_populated_grid_absolute_is_floor() {
        let plan = WidthPlanner::new().plan(&[Column::new("a", Some("120px"))], true, false);
        assert_eq!(
            plan.get("a"),
            Some(&WidthAssignment::MinWidth(Length::new("120px")))
        );
    }

    #[test]
    fn test_empty_grid_weights_get_floor_not_share() {
        let columns = [
            Column::new("a", Some("100px")),
            Column::new("b", Some("2")),
            Column::new("c", Some("3")),
        ];
        let plan = WidthPlanner::new().plan(&columns, false, true);

        assert_eq!(plan.total_weight, 5.0);
        assert_eq!(plan.get("b"), Some(&floor()));
        assert_eq!(plan.get("c"), Some(&floor()));
        assert_eq!(plan.columns[1].share_percent, Some(40.0));
        assert_eq!(plan.columns[2].share_percent, Some(60.0));
        assert_eq!(plan.action_column, Some(Length::px(32.0)));
    }

    #[test]
    fn test_populated_grid_weights_are_left_to_flow() {
        let columns = [Column::new("b", Some("2")), Column::new("c", None)];
        let plan = WidthPlanner::new().plan(&columns, true, true);

        assert_eq!(plan.get("b"), Some(&WidthAssignment::RelativeWeight(2.0)));
        assert_eq!(plan.get("c"), Some(&WidthAssignment::Unset));
        assert_eq!(plan.columns[0].share_percent, None);
        assert_eq!(plan.action_column, None);
    }

    #[test]
    fn test_hidden_column_is_unset_and_not_weighted() {
        let columns = [
            Column::new("a", Some("4")).hidden(),
            Column::new("b", Some("80px")).hidden(),
            Column::new("c", Some("1")),
        ];
        let plan = WidthPlanner::new().plan(&columns, false, false);

        assert_eq!(plan.get("a"), Some(&WidthAssignment::Unset));
        assert_eq!(plan.get("b"), Some(&WidthAssignment::Unset));
        assert_eq!(plan.columns[0].weight, None);
        assert_eq!(plan.total_weight, 1.0);
        assert_eq!(plan.columns[2].share_percent, Some(100.0));
    }

    #[test]
    fn test_selector_is_unset() {
        let plan = WidthPlanner::new().plan(&[Column::selector()], false, false);
        assert_eq!(plan.columns[0].assignment, WidthAssignment::Unset);
        assert_eq!(plan.total_weight, 0.0);
    }

    #[test]
    fn test_zero_weight_gets_nothing() {
        let columns = [Column::new("a", Some("abc")), Column::new("b", Some("0"))];
        let plan = WidthPlanner::new().plan(&columns, false, false);
        assert!(plan.assignments().all(WidthAssignment::is_unset));
        assert_eq!(plan.columns[0].weight, Some(0.0));
    }

    #[test]
    fn test_no_action_column() {
        let plan = WidthPlanner::new().plan(&[], false, false);
        assert!(plan.columns.is_empty());
        assert_eq!(plan.action_column, None);
    }

    #[test]
    fn test_config_widths() {
        let config = GridConfig {
            weighted_floor_px: 120.0,
            action_column_px: 40.0,
            ..GridConfig::default()
        };
        let plan = WidthPlanner::from_config(&config).plan(&[Column::new("a", Some("1"))], false, true);
        assert_eq!(
            plan.get("a"),
            Some(&WidthAssignment::MinWidth(Length::new("120px")))
        );
        assert_eq!(plan.action_column, Some(Length::new("40px")));
    }

    #[test]
    fn test_invalid_config_widths_fall_back() {
        let config = GridConfig {
            weighted_floor_px: f32::NAN,
            action_column_px: -32.0,
            ..GridConfig::default()
        };
        let plan = WidthPlanner::from_config(&config).plan(&[Column::new("a", Some("1"))], false, true);
        assert_eq!(plan.get("a"), Some(&floor()));
        assert_eq!(plan.action_column, Some(Length::new("32px")));

        let config = GridConfig {
            weighted_floor_px: f32::INFINITY,
            action_column_px: 0.0,
            ..GridConfig::default()
        };
        let plan = WidthPlanner::from_config(&config).plan(&[Column::new("a", Some("1"))], false, true);
        assert_eq!(plan.get("a"), Some(&floor()));
        assert_eq!(plan.action_column, Some(Length::new("0px")));
    }

    #[test]
    fn test_css_function_hint_follows_data_presence() {
        let columns = [Column::new("a", Some("calc(100% - 2px)"))];
        let planner = WidthPlanner::new();

        let empty = planner.plan(&columns, false, false);
        assert_eq!(
            empty.get("a"),
            Some(&WidthAssignment::Absolute(Length::new("calc(100% - 2px)")))
        );
        assert_eq!(empty.total_weight, 0.0);

        let populated = planner.plan(&columns, true, false);
        assert_eq!(
            populated.get("a"),
            Some(&WidthAssignment::MinWidth(Length::new("calc(100% - 2px)")))
        );
    }

    #[test]
    fn test_plan_is_rederived_each_pass() {
        let planner = WidthPlanner::new();
        let columns = [Column::new("a", Some("120px"))];
        let empty = planner.plan(&columns, false, false);
        let populated = planner.plan(&columns, true, false);
        let empty_again = planner.plan(&columns, false, false);

        assert_ne!(empty, populated);
        assert_eq!(empty, empty_again);
    }
}
