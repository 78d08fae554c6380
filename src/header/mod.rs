//! Two-row header construction.
//!
//! This module handles:
//! - Splitting group header cells into an umbrella cell and a second-row child
//! - Moving field name, tooltip, sort state and class onto the child cell
//! - Collapsing sibling group cells flagged `merge` under their umbrella
//! - Giving selector and normal cells a rowspan of 2

mod merger;

pub use merger::merge_header;
