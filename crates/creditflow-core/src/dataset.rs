//! The text-to-records entry point.

use crate::header::HeaderIndex;
use crate::record::{build_record, CreditRecord};
use crate::tokenize::split_line;

/// Parses a full delimited export into normalized records.
///
/// Line 1 is the header; every non-blank subsequent line yields exactly one
/// record, in source order. Blank lines produce nothing but still occupy
/// their source position, so synthetic `REC-<n>` ids stay anchored to the
/// line they came from.
///
/// Inputs with fewer than two lines are not a delimited table at all and
/// yield an empty collection — the caller treats that as "no usable data"
/// rather than a fault. Parsing itself never fails; field-level problems
/// degrade to documented defaults inside the record builder.
#[must_use]
pub fn parse_records(text: &str) -> Vec<CreditRecord> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    if lines.len() < 2 {
        return Vec::new();
    }

    let header = HeaderIndex::from_line(lines[0]);

    let mut records = Vec::new();
    for (line_number, line) in lines.iter().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        records.push(build_record(&header, split_line(line), line_number));
    }

    records
}
