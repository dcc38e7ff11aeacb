mod ask;
mod dataset;
mod template;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "creditflow")]
#[command(about = "Credit-pipeline analytics over CSV exports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Inspect a CSV export
    Dataset {
        #[command(subcommand)]
        command: dataset::DatasetCommands,
    },
    /// Ask the AI assistant a free-text question about a CSV export
    Ask {
        /// Path to the CSV export
        #[arg(long)]
        file: PathBuf,
        /// The question, e.g. "¿Qué fase está retrasando más los procesos?"
        question: String,
    },
    /// Write the fill-in CSV template
    Template {
        /// Output path (defaults to plantilla_creditflow.csv)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Show the built-in demo dataset
    Demo,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Dataset { command } => dataset::run(command),
        Commands::Ask { file, question } => ask::run_ask(&file, &question).await,
        Commands::Template { out } => template::run_template(out.as_deref()),
        Commands::Demo => template::run_demo(),
    }
}
