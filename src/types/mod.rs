//! Data types for list headers and column layout.

mod attrs;
mod column;
mod config;
mod header;
mod view;
mod width;

pub use attrs::*;
pub use column::*;
pub use config::*;
pub use header::*;
pub use view::*;
pub use width::*;
