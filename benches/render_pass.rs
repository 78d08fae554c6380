//! Benchmarks for header merging and width planning.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::cast_possible_truncation)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use listgrid::pipeline::render_view;
use listgrid::{merge_header, ColumnNode, DataState, MergeFlag, ViewDescriptor, WidthPlanner};

/// View with `groups` merged groups of three columns each, plus one plain
/// column per group.
fn wide_view(groups: usize) -> ViewDescriptor {
    let mut columns = Vec::with_capacity(groups * 4);
    for g in 0..groups {
        let base = format!("Group {g}");
        columns.push(ColumnNode {
            name: format!("plain_{g}"),
            string: format!("Plain {g}"),
            width: Some("1".to_string()),
            ..ColumnNode::default()
        });
        for c in 0..3 {
            columns.push(ColumnNode {
                name: format!("g{g}_c{c}"),
                string: format!("C{c}"),
                base_string: Some(base.clone()),
                colspan: (c == 0).then_some(3),
                child_name: Some(format!("C{c}")),
                merge: Some(MergeFlag::Bool(c > 0)),
                width: Some(if c == 0 { "92px" } else { "2" }.to_string()),
                ..ColumnNode::default()
            });
        }
    }
    ViewDescriptor {
        columns,
        has_selector: true,
        has_remove_column: true,
        ..ViewDescriptor::default()
    }
}

/// Benchmark a full render pass for growing view widths
fn bench_render_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_pass");
    let state = DataState::default();

    for groups in [4usize, 32, 256] {
        let view = wide_view(groups);
        group.throughput(Throughput::Elements(view.columns.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(groups), &view, |b, view| {
            b.iter(|| render_view(black_box(view), black_box(&state)).expect("render failed"))
        });
    }
    group.finish();
}

/// Benchmark the two core stages on their own
fn bench_stages(c: &mut Criterion) {
    let view = wide_view(64);
    let cells = listgrid::schema::build_header_cells(&view, &DataState::default())
        .expect("invalid view");
    let columns = merge_header(&cells).columns();
    let planner = WidthPlanner::new();

    c.bench_function("merge_header_64_groups", |b| {
        b.iter(|| merge_header(black_box(&cells)))
    });
    c.bench_function("plan_widths_64_groups", |b| {
        b.iter(|| planner.plan(black_box(&columns), false, true))
    });
}

criterion_group!(benches, bench_render_pass, bench_stages);
criterion_main!(benches);
