//! Structured error types for listgrid.
//!
//! Only header construction and the host bindings can fail. Merging and
//! width planning always produce a best-effort result.

/// All errors that can occur while building or serializing a list header.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// An umbrella group cell declares a colspan that does not match the
    /// number of sibling cells sharing its merge key.
    #[error("Group '{key}' declares colspan {declared} but umbrellas {actual} column(s)")]
    MalformedGroup {
        key: String,
        declared: u32,
        actual: u32,
    },

    /// Every cell of a merge key is flagged `merge`, so nothing would span them.
    #[error("Group '{0}' has no umbrella cell (all siblings are flagged merge)")]
    MissingUmbrella(String),

    /// More than one cell of a merge key is left unflagged.
    #[error("Group '{0}' has more than one umbrella cell")]
    DuplicateUmbrella(String),

    /// A cell is flagged `merge` but has no key to merge into.
    #[error("Column '{0}' is flagged merge but has no base_string")]
    OrphanMergeCell(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

#[cfg(target_arch = "wasm32")]
impl From<LayoutError> for wasm_bindgen::JsValue {
    fn from(e: LayoutError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
