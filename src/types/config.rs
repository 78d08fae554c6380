use serde::{Deserialize, Serialize};

/// Tunables for a list grid. Every field has a default, so a partial JSON
/// object (or none at all) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    /// Minimum width of weighted columns while the grid is empty (80px default)
    pub weighted_floor_px: f32,
    /// Width of the row-action (trash) column while the grid is empty (32px default)
    pub action_column_px: f32,
    /// Below this many records, filler rows are dropped from the body
    pub filler_row_threshold: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            weighted_floor_px: 80.0,
            action_column_px: 32.0,
            filler_row_threshold: 4,
        }
    }
}
