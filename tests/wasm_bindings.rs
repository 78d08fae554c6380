//! Browser-side checks of the JavaScript bindings.
//!
//! Run with: wasm-pack test --headless --firefox
#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use listgrid::{merge_header_js, render_view, retained_body_rows, HeaderCell, RenderedHeader};
use wasm_bindgen_test::wasm_bindgen_test;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn merge_header_round_trips_through_js() {
    let cells = vec![HeaderCell::normal("Name")];
    let js = serde_wasm_bindgen::to_value(&cells).unwrap();
    let header: RenderedHeader =
        serde_wasm_bindgen::from_value(merge_header_js(js).unwrap()).unwrap();
    assert_eq!(header.top, cells);
}

#[wasm_bindgen_test]
fn render_view_rejects_bad_json() {
    assert!(render_view("{", "{}").is_err());
}

#[wasm_bindgen_test]
fn retained_rows_from_js() {
    let kinds = serde_wasm_bindgen::to_value(&["filler", "record", "addLine"]).unwrap();
    assert_eq!(retained_body_rows(kinds, 1).unwrap(), vec![1, 2]);
}
