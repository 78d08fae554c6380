//! Filler-row trimming for short list bodies.
//!
//! List bodies are padded with empty filler rows so a short list keeps a
//! minimum height. When only a few records are shown, the padding is
//! dropped and the "add a line" control rows move to the end of the body.

use serde::{Deserialize, Serialize};

/// Kind of a body row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BodyRowKind {
    /// A record (data) row
    Record,
    /// Row holding the "add a line" control of an editable list
    AddLine,
    /// Empty padding row
    Filler,
    /// Group header row
    Group,
}

/// Anything that knows its body row kind
pub trait BodyRow {
    fn row_kind(&self) -> BodyRowKind;
}

impl BodyRow for BodyRowKind {
    fn row_kind(&self) -> BodyRowKind {
        *self
    }
}

/// Indices of the rows to keep, in output order.
///
/// With `record_count >= threshold` every row is kept as is. Below it, only
/// record rows are kept, followed by the add-line rows.
pub fn retained_rows(kinds: &[BodyRowKind], record_count: usize, threshold: usize) -> Vec<usize> {
    if record_count >= threshold {
        return (0..kinds.len()).collect();
    }

    let records = kinds
        .iter()
        .enumerate()
        .filter(|(_, kind)| **kind == BodyRowKind::Record)
        .map(|(i, _)| i);
    let add_lines = kinds
        .iter()
        .enumerate()
        .filter(|(_, kind)| **kind == BodyRowKind::AddLine)
        .map(|(i, _)| i);

    let kept: Vec<usize> = records.chain(add_lines).collect();
    tracing::trace!(
        rows = kinds.len(),
        kept = kept.len(),
        record_count,
        "trimmed filler rows"
    );
    kept
}

/// Apply [`retained_rows`] to a row vector.
pub fn trim_filler_rows<R: BodyRow>(rows: Vec<R>, record_count: usize, threshold: usize) -> Vec<R> {
    if record_count >= threshold {
        return rows;
    }

    let (mut kept, add_lines): (Vec<R>, Vec<R>) = rows
        .into_iter()
        .filter(|row| matches!(row.row_kind(), BodyRowKind::Record | BodyRowKind::AddLine))
        .partition(|row| row.row_kind() == BodyRowKind::Record);
    kept.extend(add_lines);
    kept
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use super::BodyRowKind::{AddLine, Filler, Group, Record};

    #[test]
    fn test_short_list_drops_fillers() {
        let kinds = [Record, Record, AddLine, Filler, Filler];
        assert_eq!(retained_rows(&kinds, 2, 4), vec![0, 1, 2]);
    }

    #[test]
    fn test_add_line_moves_to_end() {
        let kinds = [AddLine, Record, Filler, Group];
        assert_eq!(retained_rows(&kinds, 1, 4), vec![1, 0]);
    }

    #[test]
    fn test_threshold_keeps_everything() {
        let kinds = [Record, Record, Record, Record, AddLine, Filler];
        assert_eq!(retained_rows(&kinds, 4, 4), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(retained_rows(&[Filler, Filler, AddLine], 0, 4), vec![2]);
        assert!(retained_rows(&[Filler, Filler], 0, 4).is_empty());
    }

    #[derive(Debug, PartialEq)]
    struct Row(&'static str, BodyRowKind);

    impl BodyRow for Row {
        fn row_kind(&self) -> BodyRowKind {
            self.1
        }
    }

    #[test]
    fn test_trim_rows_matches_indices() {
        let rows = vec![
            Row("add", AddLine),
            Row("r1", Record),
            Row("pad", Filler),
            Row("r2", Record),
        ];
        let trimmed = trim_filler_rows(rows, 2, 4);
        let names: Vec<_> = trimmed.iter().map(|r| r.0).collect();
        assert_eq!(names, ["r1", "r2", "add"]);
    }
}
