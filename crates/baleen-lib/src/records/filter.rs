//! Preprocessing filter for extracted variables.

use baleen_core::VariableRecord;
use tracing::debug;

/// True if the record can stand as a variable after preprocessing: it has
/// a surface string and no tokens were deleted from it (`descendants`).
pub fn is_variable(record: &VariableRecord) -> bool {
    !record.sub_str.is_empty() && record.descendants.is_none()
}

/// Keeps only records accepted by [`is_variable`], in order.
pub fn retain_variables(mut records: Vec<VariableRecord>) -> Vec<VariableRecord> {
    let before = records.len();
    records.retain(is_variable);
    debug!(kept = records.len(), dropped = before - records.len(), "filtered variables");
    records
}
