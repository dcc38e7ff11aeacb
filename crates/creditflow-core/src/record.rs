//! Normalized domain records and the row-to-record builder.

use serde::Serialize;

use crate::header::HeaderIndex;
use crate::phases::PHASES;

/// One pipeline stage's measured duration for one record.
///
/// `entry_date`/`exit_date` are opaque source strings; the core never parses
/// or validates their format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseTime {
    pub phase_name: String,
    pub days: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_date: Option<String>,
}

/// One client's credit-application snapshot, built from one source row.
///
/// Immutable after construction: reloading a file replaces the whole
/// collection, never patches individual records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditRecord {
    pub id: String,
    pub cliente: String,
    pub fase_actual: String,
    pub monto_dop: f64,
    pub monto_usd: f64,
    pub ejecutivo: String,
    pub tipo_credito: String,
    pub resultado_analisis: String,
    /// Phases in canonical catalog order, restricted to stages the record
    /// actually touched (positive duration or a recorded entry).
    pub phases: Vec<PhaseTime>,
    /// Original field values of the source row, kept for diagnostics only.
    pub raw: Vec<String>,
}

impl CreditRecord {
    /// Total days this record has spent across all retained phases.
    #[must_use]
    pub fn total_days(&self) -> f64 {
        self.phases.iter().map(|p| p.days).sum()
    }
}

/// Builds one [`CreditRecord`] from a tokenized data row.
///
/// `line_number` is the row's 1-based position in the source file and seeds
/// the synthetic `REC-<n>` id when the row carries no `IDFase`. Every field
/// has a documented fallback; this function never fails on malformed or
/// missing data.
#[must_use]
pub fn build_record(header: &HeaderIndex, values: Vec<String>, line_number: usize) -> CreditRecord {
    let phases = PHASES
        .iter()
        .filter_map(|spec| {
            let days = parse_number(header.resolve(&values, &spec.days_header())).unwrap_or(0.0);
            let entry_date = non_empty(header.resolve(&values, &spec.entry_header()));
            let exit_date = non_empty(header.resolve(&values, &spec.exit_header()));

            // Untouched stages are dropped outright, not zeroed.
            (days > 0.0 || entry_date.is_some()).then(|| PhaseTime {
                phase_name: spec.name.to_string(),
                days,
                entry_date,
                exit_date,
            })
        })
        .collect();

    let id = non_empty(header.resolve(&values, "IDFase"))
        .unwrap_or_else(|| format!("REC-{line_number}"));
    let tipo_credito = non_empty(header.resolve(&values, "Tipo de Crédito Personal"))
        .or_else(|| non_empty(header.resolve(&values, "Tipo de Crédito Comercial")))
        .unwrap_or_else(|| "N/A".to_string());

    CreditRecord {
        id,
        cliente: header
            .resolve_or(&values, "Nombre del Cliente", "N/A")
            .to_string(),
        fase_actual: header.resolve_or(&values, "Fase actual", "N/A").to_string(),
        monto_dop: parse_number(header.resolve(
            &values,
            "Monto DOP Total Solicitado por el Cliente",
        ))
        .unwrap_or(0.0),
        monto_usd: parse_number(header.resolve(
            &values,
            "Monto USD Total Solicitado por el Cliente",
        ))
        .unwrap_or(0.0),
        ejecutivo: header
            .resolve_or(&values, "Correo del Ejecutivo de Negocios", "N/A")
            .to_string(),
        tipo_credito,
        resultado_analisis: header
            .resolve_or(&values, "Resultado", "Pendiente")
            .to_string(),
        phases,
        raw: values,
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parses the longest leading numeric prefix of `raw` as an `f64`.
///
/// Mirrors the lenient number handling of spreadsheet exports: leading
/// whitespace is skipped, an optional sign and one decimal point are
/// accepted, and trailing junk is ignored (`"5 dias"` parses as `5`).
/// Returns `None` when no digit is found.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0usize;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let mut has_digit = false;
    let mut has_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => has_digit = true,
            b'.' if !has_dot => has_dot = true,
            _ => break,
        }
        end += 1;
    }

    if !has_digit {
        return None;
    }
    s[..end].parse().ok()
}
