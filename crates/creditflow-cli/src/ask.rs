use std::path::Path;

use creditflow_ai::{analyze_credit_data, GeminiClient};

use crate::dataset::load_records;

/// Ask the AI assistant a question about an export.
///
/// AI transport/API failures do not reach this function as errors — the
/// collaborator boundary converts them into a fixed apologetic answer. The
/// only hard failures here are an unreadable file or missing configuration.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or no API key is
/// configured.
pub(crate) async fn run_ask(file: &Path, question: &str) -> anyhow::Result<()> {
    let records = load_records(file)?;
    tracing::debug!(count = records.len(), "export loaded");

    let config = creditflow_core::load_app_config()?;
    let api_key = config
        .gemini_api_key
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("GEMINI_API_KEY is not set; export it or add it to .env"))?;
    let client = GeminiClient::new(api_key, &config.gemini_model, config.ai_request_timeout_secs)?;

    let answer = analyze_credit_data(&client, &records, question).await;
    println!("{answer}");
    Ok(())
}
