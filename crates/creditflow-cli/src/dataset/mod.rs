//! Dataset inspection command handlers.
//!
//! All subcommands share the same load path: read the file, parse it, and
//! fail with a guidance message when nothing usable comes out — the source
//! files are hand-exported spreadsheets and the most common failure is an
//! Excel file that was never saved as CSV.

mod query;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Subcommand;

use creditflow_core::{parse_records, CreditRecord};

pub(crate) use query::{run_list, run_summary, run_timeline};

/// Sub-commands available under `dataset`.
#[derive(Debug, Subcommand)]
pub enum DatasetCommands {
    /// Portfolio-level statistics
    Summary {
        /// Path to the CSV export
        #[arg(long)]
        file: PathBuf,
    },
    /// List records, optionally filtered by client name or id
    List {
        /// Path to the CSV export
        #[arg(long)]
        file: PathBuf,
        /// Case-insensitive substring to match against client name or id
        #[arg(long)]
        filter: Option<String>,
        /// Maximum number of records to show
        #[arg(long, default_value = "50")]
        limit: usize,
    },
    /// Phase timeline for a single record
    Timeline {
        /// Path to the CSV export
        #[arg(long)]
        file: PathBuf,
        /// Record id (IDFase or synthetic REC-<n>)
        #[arg(long)]
        id: String,
    },
}

pub(crate) fn run(command: DatasetCommands) -> anyhow::Result<()> {
    match command {
        DatasetCommands::Summary { file } => run_summary(&load_records(&file)?),
        DatasetCommands::List {
            file,
            filter,
            limit,
        } => run_list(&load_records(&file)?, filter.as_deref().unwrap_or(""), limit),
        DatasetCommands::Timeline { file, id } => run_timeline(&load_records(&file)?, &id),
    }
}

/// Reads and parses an export, rejecting obviously-wrong inputs with the
/// same guidance the original tool gives its users.
pub(crate) fn load_records(path: &Path) -> anyhow::Result<Vec<CreditRecord>> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        anyhow::bail!(
            "'{}' is not a .csv file; if you have an Excel (.xlsx), use 'Guardar como' and choose CSV",
            path.display()
        );
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;

    let records = parse_records(&text);
    if records.is_empty() {
        anyhow::bail!(
            "no usable data in '{}'; make sure the file uses the template headers (run `creditflow template`)",
            path.display()
        );
    }
    Ok(records)
}
