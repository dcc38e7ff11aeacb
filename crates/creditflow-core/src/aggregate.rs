//! Portfolio-level statistics and record filtering.
//!
//! Pure functions, recomputed from scratch on every call. Linear in record
//! count, which is fine at the target scale (hundreds to low thousands of
//! rows); no caching or incremental state.

use serde::Serialize;

use crate::record::CreditRecord;

/// Aggregate view of the whole portfolio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    /// Sum of requested DOP amounts across all records.
    pub total_dop: f64,
    /// Mean of each record's total days in process.
    pub avg_time: f64,
    pub count: usize,
}

/// Summarizes the collection, or `None` when it is empty.
///
/// "No data" is deliberately distinct from "all zeros": callers that render
/// stats must be able to tell an unloaded portfolio from a zero-valued one.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize(records: &[CreditRecord]) -> Option<PortfolioSummary> {
    if records.is_empty() {
        return None;
    }

    let total_dop = records.iter().map(|r| r.monto_dop).sum();
    let total_days: f64 = records.iter().map(CreditRecord::total_days).sum();

    Some(PortfolioSummary {
        total_dop,
        avg_time: total_days / records.len() as f64,
        count: records.len(),
    })
}

/// Case-insensitive substring filter on client name or id.
///
/// An empty term matches everything; relative order is preserved.
#[must_use]
pub fn filter_records<'a>(records: &'a [CreditRecord], term: &str) -> Vec<&'a CreditRecord> {
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.cliente.to_lowercase().contains(&needle) || r.id.to_lowercase().contains(&needle)
        })
        .collect()
}
