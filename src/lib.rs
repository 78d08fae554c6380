//! listgrid - merged list headers and adaptive column widths
//!
//! Layout core for web list views:
//! - Two-row headers with umbrella group cells (colspan/rowspan)
//! - Sort state, tooltips and classes follow the column into the second row
//! - Column widths from width hints, branched on whether the grid has data
//! - Filler-row trimming for short list bodies
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { render_view } from 'listgrid';
//! await init();
//! const view = JSON.parse(render_view(viewJson, stateJson));
//! ```

pub mod body;
pub mod error;
pub mod header;
pub mod layout;
pub mod pipeline;
pub mod schema;
pub mod types;

use wasm_bindgen::prelude::*;

pub use header::merge_header;
pub use layout::WidthPlanner;
pub use pipeline::{render_pass, ListRenderer, RenderHooks, RenderedView};

pub use types::*;

/// Install the panic hook that forwards Rust panics to the browser console
#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Merge a list of header cells into a two-row header
///
/// # Errors
/// Returns an error if the cells cannot be deserialized.
#[wasm_bindgen(js_name = mergeHeader)]
pub fn merge_header_js(cells: JsValue) -> Result<JsValue, JsValue> {
    let cells: Vec<HeaderCell> = serde_wasm_bindgen::from_value(cells)?;
    let header = merge_header(&cells);
    serde_wasm_bindgen::to_value(&header)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Plan column widths with the default floor and action column widths
///
/// # Errors
/// Returns an error if the columns cannot be deserialized.
#[wasm_bindgen(js_name = planWidths)]
pub fn plan_widths_js(
    columns: JsValue,
    has_visible_data: bool,
    has_action_column: bool,
) -> Result<JsValue, JsValue> {
    let columns: Vec<Column> = serde_wasm_bindgen::from_value(columns)?;
    let plan = WidthPlanner::new().plan(&columns, has_visible_data, has_action_column);
    serde_wasm_bindgen::to_value(&plan)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Run a full render pass and return the rendered view as a JSON string
///
/// # Arguments
/// * `view_json` - A `ViewDescriptor` as JSON
/// * `state_json` - A `DataState` as JSON
///
/// # Errors
/// Returns an error if either input is invalid or a merge group is inconsistent.
#[wasm_bindgen]
pub fn render_view(view_json: &str, state_json: &str) -> Result<String, JsValue> {
    let view: ViewDescriptor = serde_json::from_str(view_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid view: {e}")))?;
    let state: DataState = serde_json::from_str(state_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid state: {e}")))?;

    let rendered =
        pipeline::render_view(&view, &state).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&rendered)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Indices of the body rows to keep, in output order, with the default
/// filler-row threshold
///
/// # Errors
/// Returns an error if the row kinds cannot be deserialized.
#[wasm_bindgen(js_name = retainedBodyRows)]
pub fn retained_body_rows(
    kinds: JsValue,
    record_count: usize,
) -> Result<Vec<u32>, JsValue> {
    let kinds: Vec<body::BodyRowKind> = serde_wasm_bindgen::from_value(kinds)?;
    let threshold = GridConfig::default().filler_row_threshold;
    Ok(body::retained_rows(&kinds, record_count, threshold)
        .into_iter()
        .filter_map(|i| u32::try_from(i).ok())
        .collect())
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
