use std::path::Path;

use anyhow::Context;

use creditflow_core::sample::TEMPLATE_FILE_NAME;
use creditflow_core::{demo_csv, parse_records, template_csv};

use crate::dataset::{run_list, run_summary};

/// Write the fill-in CSV template to `out` (or the default filename).
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub(crate) fn run_template(out: Option<&Path>) -> anyhow::Result<()> {
    let path = out.unwrap_or_else(|| Path::new(TEMPLATE_FILE_NAME));
    std::fs::write(path, template_csv())
        .with_context(|| format!("writing {}", path.display()))?;
    println!("template written to {}", path.display());
    Ok(())
}

/// Parse the built-in demo dataset and show it as summary + listing.
///
/// # Errors
///
/// Never fails in practice; the demo data always parses.
pub(crate) fn run_demo() -> anyhow::Result<()> {
    let records = parse_records(&demo_csv());
    run_summary(&records)?;
    println!();
    run_list(&records, "", records.len())
}
