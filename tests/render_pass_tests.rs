//! End-to-end render passes: view descriptor → header cells → merged header →
//! columns → width plan.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{
    child_labels, empty_state, ordered_by, populated_state, top_labels, with_hidden, ViewBuilder,
};
use listgrid::body::BodyRowKind::{AddLine, Filler, Record};
use listgrid::error::LayoutError;
use listgrid::pipeline::{render_pass, render_view, retained_rows_for, ListRenderer, RenderHooks};
use listgrid::{
    CellKind, Column, FieldType, GridConfig, HeaderAttr, HeaderCell, Length, RenderedHeader,
    ViewDescriptor, WidthAssignment, WidthPlan,
};

fn totals_view() -> ViewDescriptor {
    ViewBuilder::new()
        .selector()
        .field("name", "Name", Some("2"))
        .group(
            "Totals",
            &[("debit", "Debit", Some("92px")), ("credit", "Credit", Some("92px"))],
        )
        .field("note", "Note", None)
        .remove_column()
        .build()
}

#[test]
fn test_grouped_view_on_empty_grid() {
    let view = render_view(&totals_view(), &empty_state()).unwrap();

    assert_eq!(top_labels(&view.header), ["", "Name", "Totals", "Note", ""]);
    assert_eq!(child_labels(&view.header), ["Debit", "Credit"]);
    assert_eq!(view.header.top[2].colspan, 2);
    assert_eq!(view.header.top[4].kind, CellKind::RemoveControl);

    let widths = &view.widths;
    assert_eq!(
        widths.get("name"),
        Some(&WidthAssignment::MinWidth(Length::new("80px")))
    );
    assert_eq!(
        widths.get("debit"),
        Some(&WidthAssignment::Absolute(Length::new("92px")))
    );
    assert_eq!(
        widths.get("credit"),
        Some(&WidthAssignment::Absolute(Length::new("92px")))
    );
    assert_eq!(widths.get("note"), Some(&WidthAssignment::Unset));
    assert_eq!(widths.action_column, Some(Length::new("32px")));
    assert_eq!(widths.columns[0].assignment, WidthAssignment::Unset);
}

#[test]
fn test_grouped_view_on_populated_grid() {
    let view = render_view(&totals_view(), &populated_state(12)).unwrap();

    assert_eq!(
        view.widths.get("debit"),
        Some(&WidthAssignment::MinWidth(Length::new("92px")))
    );
    assert_eq!(
        view.widths.get("name"),
        Some(&WidthAssignment::RelativeWeight(2.0))
    );
    assert_eq!(view.widths.action_column, None);
}

#[test]
fn test_sort_state_lands_on_child_cell() {
    let state = ordered_by(populated_state(3), "credit", false);
    let view = render_view(&totals_view(), &state).unwrap();

    let credit = view.header.leaf_for("credit").unwrap();
    assert_eq!(credit.kind, CellKind::Child);
    assert_eq!(
        credit.attributes.get(&HeaderAttr::SortState),
        Some("descending")
    );
    assert!(view
        .header
        .top
        .iter()
        .all(|c| !c.attributes.contains(&HeaderAttr::SortState)));
}

#[test]
fn test_hidden_field_is_not_sized() {
    let state = with_hidden(empty_state(), &["debit"]);
    let view = render_view(&totals_view(), &state).unwrap();

    let debit = view
        .columns
        .iter()
        .find(|c| c.field_name.as_deref() == Some("debit"))
        .unwrap();
    assert!(!debit.visible);
    assert_eq!(view.widths.get("debit"), Some(&WidthAssignment::Unset));
    assert_eq!(
        view.widths.get("credit"),
        Some(&WidthAssignment::Absolute(Length::new("92px")))
    );
}

#[test]
fn test_flat_view_has_single_row() {
    let view = ViewBuilder::new()
        .field("name", "Name", None)
        .typed_field("date", "Date", FieldType::Date)
        .typed_field("qty", "Quantity", FieldType::Float)
        .build();
    let rendered = render_view(&view, &empty_state()).unwrap();

    assert_eq!(rendered.header.row_count(), 1);
    assert!(rendered.header.top.iter().all(|c| c.rowspan == 1));
    assert_eq!(
        rendered.widths.get("date"),
        Some(&WidthAssignment::Absolute(Length::new("92px")))
    );
    assert_eq!(rendered.widths.get("name"), Some(&WidthAssignment::Unset));
    assert_eq!(
        rendered
            .header
            .leaf_for("qty")
            .unwrap()
            .attributes
            .get(&HeaderAttr::CssClass),
        Some("o_list_number_th")
    );
}

#[test]
fn test_view_config_overrides_widths() {
    let mut view = totals_view();
    view.config = GridConfig {
        weighted_floor_px: 64.0,
        action_column_px: 24.0,
        ..GridConfig::default()
    };
    let rendered = render_view(&view, &empty_state()).unwrap();
    assert_eq!(
        rendered.widths.get("name"),
        Some(&WidthAssignment::MinWidth(Length::new("64px")))
    );
    assert_eq!(rendered.widths.action_column, Some(Length::new("24px")));
}

/// Three records are below the default threshold of four but not below a
/// configured threshold of two.
#[test]
fn test_view_config_sets_filler_threshold() {
    let kinds = [AddLine, Record, Record, Record, Filler];
    let state = populated_state(3);

    let mut view = totals_view();
    assert_eq!(retained_rows_for(&view, &kinds, &state), vec![1, 2, 3, 0]);

    view.config.filler_row_threshold = 2;
    assert_eq!(retained_rows_for(&view, &kinds, &state), vec![0, 1, 2, 3, 4]);
    assert_eq!(
        retained_rows_for(&view, &kinds, &populated_state(1)),
        vec![1, 2, 3, 0]
    );
}

#[test]
fn test_malformed_group_fails_the_pass() {
    let mut view = totals_view();
    view.columns[1].colspan = Some(3);
    match render_view(&view, &empty_state()) {
        Err(LayoutError::MalformedGroup { key, declared, actual }) => {
            assert_eq!(key, "Totals");
            assert_eq!(declared, 3);
            assert_eq!(actual, 2);
        }
        other => panic!("expected MalformedGroup, got {other:?}"),
    }
}

#[test]
fn test_view_from_json() {
    let json = r#"{
        "columns": [
            {"name": "product_id", "string": "Product", "field_type": "many2one"},
            {"name": "qty", "string": "Qty", "base_string": "Sales", "colspan": 2,
             "child_name": "Qty", "merge": "False", "width": "60px"},
            {"name": "amount", "string": "Amount", "base_string": "Sales",
             "child_name": "Amount", "merge": "True", "field_type": "monetary"}
        ],
        "hasSelector": true,
        "config": {"weightedFloorPx": 100}
    }"#;
    let view: ViewDescriptor = serde_json::from_str(json).unwrap();
    assert_eq!(view.config.action_column_px, 32.0);

    let rendered = render_view(&view, &empty_state()).unwrap();
    assert_eq!(top_labels(&rendered.header), ["", "Product", "Sales"]);
    assert_eq!(child_labels(&rendered.header), ["Qty", "Amount"]);
    assert_eq!(
        rendered.widths.get("product_id"),
        Some(&WidthAssignment::MinWidth(Length::new("100px")))
    );
    assert_eq!(
        rendered.widths.get("amount"),
        Some(&WidthAssignment::Absolute(Length::new("104px")))
    );
}

/// Hooks that record the order in which the pass calls them.
struct RecordingHooks {
    inner: ListRenderer,
    calls: std::cell::RefCell<Vec<&'static str>>,
}

impl RenderHooks for RecordingHooks {
    fn merge_header(&self, cells: &[HeaderCell]) -> RenderedHeader {
        self.calls.borrow_mut().push("merge");
        self.inner.merge_header(cells)
    }

    fn plan_widths(
        &self,
        columns: &[Column],
        has_visible_data: bool,
        has_action_column: bool,
    ) -> WidthPlan {
        self.calls.borrow_mut().push("plan");
        self.inner
            .plan_widths(columns, has_visible_data, has_action_column)
    }
}

#[test]
fn test_merge_runs_before_plan() {
    let hooks = RecordingHooks {
        inner: ListRenderer::default(),
        calls: std::cell::RefCell::new(Vec::new()),
    };
    render_pass(&hooks, &totals_view(), &empty_state()).unwrap();
    assert_eq!(*hooks.calls.borrow(), ["merge", "plan"]);
}
