//! Column width layout for list grids.
//!
//! This module handles:
//! - Classifying width hints as absolute measures or relative weights
//! - Branching the sizing policy on whether the grid holds any record
//! - Reserving the fixed width of the row-action column

mod width_hint;
mod width_planner;

pub use width_hint::WidthHint;
pub use width_planner::{WidthPlanner, DEFAULT_ACTION_COLUMN_WIDTH, DEFAULT_WEIGHTED_FLOOR};
