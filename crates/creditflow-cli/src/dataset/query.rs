use creditflow_core::{filter_records, summarize, CreditRecord};

/// Print portfolio-level statistics.
///
/// # Errors
///
/// Never fails; the signature matches the other handlers for uniform
/// dispatch.
pub(crate) fn run_summary(records: &[CreditRecord]) -> anyhow::Result<()> {
    let Some(summary) = summarize(records) else {
        println!("no records loaded");
        return Ok(());
    };

    println!("Expedientes:      {}", summary.count);
    println!("Monto DOP total:  {:.2}", summary.total_dop);
    println!("Tiempo promedio:  {:.1} días", summary.avg_time);
    Ok(())
}

/// Print a table of records, optionally filtered, up to `limit` rows.
///
/// # Errors
///
/// Returns an error when the filter matches nothing.
pub(crate) fn run_list(
    records: &[CreditRecord],
    filter: &str,
    limit: usize,
) -> anyhow::Result<()> {
    let matches = filter_records(records, filter);
    if matches.is_empty() {
        anyhow::bail!("no records match '{filter}'");
    }

    let header = format!(
        "{:<12}{:<28}{:<24}{:>16}  {}",
        "ID", "CLIENTE", "FASE ACTUAL", "MONTO DOP", "DÍAS"
    );
    println!("{header}");
    for record in matches.iter().take(limit) {
        println!(
            "{:<12}{:<28}{:<24}{:>16.2}  {:.1}",
            truncate(&record.id, 10),
            truncate(&record.cliente, 26),
            truncate(&record.fase_actual, 22),
            record.monto_dop,
            record.total_days()
        );
    }
    if matches.len() > limit {
        eprintln!("showing {limit} of {} matches", matches.len());
    }
    Ok(())
}

/// Print the phase timeline of one record, in canonical pipeline order.
///
/// # Errors
///
/// Returns an error when no record carries the given id.
pub(crate) fn run_timeline(records: &[CreditRecord], id: &str) -> anyhow::Result<()> {
    let record = records
        .iter()
        .find(|r| r.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| anyhow::anyhow!("record '{id}' not found; run `dataset list` to see ids"))?;

    println!("Cliente: {} \u{2014} {}", record.cliente, record.id);
    println!("Fase actual: {}", record.fase_actual);
    println!("Resultado: {}", record.resultado_analisis);
    println!();

    if record.phases.is_empty() {
        println!("no phase activity recorded");
        return Ok(());
    }

    let header = format!("{:<26}{:>8}  {:<18}{}", "FASE", "DÍAS", "ENTRADA", "SALIDA");
    println!("{header}");
    for phase in &record.phases {
        println!(
            "{:<26}{:>8.1}  {:<18}{}",
            phase.phase_name,
            phase.days,
            fmt_date(phase.entry_date.as_deref()),
            fmt_date(phase.exit_date.as_deref())
        );
    }
    Ok(())
}

/// Format an optional opaque date string for display, returning `"—"` when
/// absent.
fn fmt_date(date: Option<&str>) -> String {
    date.map_or_else(|| "\u{2014}".to_string(), ToString::to_string)
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        format!("{}...", value.chars().take(max).collect::<String>())
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use creditflow_core::parse_records;

    fn demo() -> Vec<CreditRecord> {
        parse_records(&creditflow_core::demo_csv())
    }

    #[test]
    fn list_fails_on_unmatched_filter() {
        let err = run_list(&demo(), "zzz", 10).unwrap_err();
        assert!(err.to_string().contains("zzz"));
    }

    #[test]
    fn list_accepts_a_matching_filter() {
        assert!(run_list(&demo(), "tech", 10).is_ok());
    }

    #[test]
    fn timeline_fails_on_unknown_id() {
        let err = run_timeline(&demo(), "CR-404").unwrap_err();
        assert!(err.to_string().contains("CR-404"));
    }

    #[test]
    fn timeline_finds_synthetic_ids_case_insensitively() {
        assert!(run_timeline(&demo(), "rec-1").is_ok());
    }

    #[test]
    fn truncate_leaves_short_values_alone() {
        assert_eq!(truncate("Juan", 10), "Juan");
        assert_eq!(truncate("Tech Solutions SRL", 10), "Tech Solut...");
    }
}
