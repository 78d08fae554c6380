//! Render pass: header merging followed by width planning.
//!
//! The host list renderer calls the two stages through [`RenderHooks`].
//! Width planning always runs on the committed result of the merge, since
//! which header cells are leaves decides which columns get sized.

use serde::{Deserialize, Serialize};

use crate::body::{retained_rows, BodyRowKind};
use crate::error::Result;
use crate::header::merge_header;
use crate::layout::WidthPlanner;
use crate::schema::build_header_cells;
use crate::types::{
    Column, DataState, GridConfig, HeaderCell, RenderedHeader, ViewDescriptor, WidthPlan,
};

/// Extension points of a list renderer
pub trait RenderHooks {
    /// Turn the flat header cells into the rendered header
    fn merge_header(&self, cells: &[HeaderCell]) -> RenderedHeader;

    /// Assign widths to the columns of the rendered header
    fn plan_widths(
        &self,
        columns: &[Column],
        has_visible_data: bool,
        has_action_column: bool,
    ) -> WidthPlan;
}

/// Default hooks: two-row merge and data-presence width planning
#[derive(Debug, Clone, Default)]
pub struct ListRenderer {
    planner: WidthPlanner,
}

impl ListRenderer {
    pub fn new(config: &GridConfig) -> Self {
        Self {
            planner: WidthPlanner::from_config(config),
        }
    }
}

impl RenderHooks for ListRenderer {
    fn merge_header(&self, cells: &[HeaderCell]) -> RenderedHeader {
        merge_header(cells)
    }

    fn plan_widths(
        &self,
        columns: &[Column],
        has_visible_data: bool,
        has_action_column: bool,
    ) -> WidthPlan {
        self.planner.plan(columns, has_visible_data, has_action_column)
    }
}

/// Output of one render pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedView {
    pub header: RenderedHeader,
    pub columns: Vec<Column>,
    pub widths: WidthPlan,
}

/// Run one render pass over a view and the current data state.
///
/// # Errors
/// Returns an error if the view declares an inconsistent merge group.
pub fn render_pass<H: RenderHooks>(
    hooks: &H,
    view: &ViewDescriptor,
    state: &DataState,
) -> Result<RenderedView> {
    let cells = build_header_cells(view, state)?;
    let header = hooks.merge_header(&cells);

    let columns: Vec<Column> = header
        .columns()
        .into_iter()
        .map(|column| match column.field_name.as_deref() {
            Some(name) if state.is_hidden(name) => column.hidden(),
            _ => column,
        })
        .collect();

    let widths = hooks.plan_widths(&columns, state.has_visible_data, view.has_remove_column);

    Ok(RenderedView {
        header,
        columns,
        widths,
    })
}

/// Run a render pass with the default hooks and the view's own config.
///
/// # Errors
/// Returns an error if the view declares an inconsistent merge group.
pub fn render_view(view: &ViewDescriptor, state: &DataState) -> Result<RenderedView> {
    render_pass(&ListRenderer::new(&view.config), view, state)
}

/// Body rows to keep for the current data state, using the view's
/// filler-row threshold.
pub fn retained_rows_for(
    view: &ViewDescriptor,
    kinds: &[BodyRowKind],
    state: &DataState,
) -> Vec<usize> {
    retained_rows(kinds, state.record_count, view.config.filler_row_threshold)
}
