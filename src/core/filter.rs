//! Batch filter
//!
//! Drops rows whose order type names a category Koinly cannot import from
//! this export. Currently that is swaps only.

use tracing::debug;

use crate::types::SourceRecord;

/// Whether an order type describes a swap (case-insensitive containment)
pub fn is_swap(order_type: &str) -> bool {
    order_type.to_lowercase().contains("swap")
}

/// Keep only the rows that can be mapped, preserving input order
///
/// No deduplication and no size limit; an empty input yields an empty output.
pub fn filter_supported(records: Vec<SourceRecord>) -> Vec<SourceRecord> {
    records
        .into_iter()
        .filter(|record| keep(record, None))
        .collect()
}

/// Borrowing variant of [`filter_supported`] that also numbers the rows
///
/// Yields `(row, record)` for every surviving record, where `row` is the
/// record's 1-based position in the full input counted from `first_row`.
/// Dropped rows still consume a number, so `row` always points back at the
/// line the user sees in their export.
pub fn supported_rows(
    records: &[SourceRecord],
    first_row: usize,
) -> impl Iterator<Item = (usize, &SourceRecord)> + '_ {
    records
        .iter()
        .enumerate()
        .map(move |(i, record)| (first_row + i, record))
        .filter(|(row, record)| keep(record, Some(*row)))
}

fn keep(record: &SourceRecord, row: Option<usize>) -> bool {
    if is_swap(&record.order_type) {
        debug!(
            row,
            transaction_id = %record.transaction_id,
            order_type = %record.order_type,
            "Dropping swap row"
        );
        return false;
    }
    true
}
