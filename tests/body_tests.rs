//! Tests for filler-row trimming of short list bodies.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use listgrid::body::{retained_rows, trim_filler_rows, BodyRow, BodyRowKind};
use listgrid::GridConfig;
use test_case::test_case;

use listgrid::body::BodyRowKind::{AddLine, Filler, Group, Record};

#[test_case(0, &[AddLine, Filler, Filler, Filler], &[0] ; "no records")]
#[test_case(1, &[Record, AddLine, Filler, Filler], &[0, 1] ; "one record")]
#[test_case(3, &[Record, Record, Record, AddLine], &[0, 1, 2, 3] ; "three records")]
#[test_case(2, &[Group, Record, Record, Filler], &[1, 2] ; "group rows dropped")]
#[test_case(4, &[Record, Record, Record, Record, AddLine, Filler], &[0, 1, 2, 3, 4, 5] ; "at threshold")]
fn test_retained_rows(records: usize, kinds: &[BodyRowKind], expected: &[usize]) {
    let threshold = GridConfig::default().filler_row_threshold;
    assert_eq!(retained_rows(kinds, records, threshold), expected);
}

#[derive(Debug, Clone, PartialEq)]
struct Tr {
    id: u32,
    kind: BodyRowKind,
}

impl BodyRow for Tr {
    fn row_kind(&self) -> BodyRowKind {
        self.kind
    }
}

#[test]
fn test_add_line_rows_keep_relative_order() {
    let rows = vec![
        Tr { id: 1, kind: AddLine },
        Tr { id: 2, kind: Record },
        Tr { id: 3, kind: AddLine },
        Tr { id: 4, kind: Filler },
    ];
    let trimmed = trim_filler_rows(rows, 1, 4);
    let ids: Vec<u32> = trimmed.iter().map(|r| r.id).collect();
    assert_eq!(ids, [2, 1, 3]);
}

#[test]
fn test_long_list_is_untouched() {
    let rows: Vec<Tr> = (0..6)
        .map(|id| Tr {
            id,
            kind: if id < 5 { Record } else { Filler },
        })
        .collect();
    assert_eq!(trim_filler_rows(rows.clone(), 5, 4), rows);
}

#[test]
fn test_row_kinds_from_json() {
    let kinds: Vec<BodyRowKind> =
        serde_json::from_str(r#"["record", "addLine", "filler"]"#).unwrap();
    assert_eq!(kinds, [Record, AddLine, Filler]);
}
