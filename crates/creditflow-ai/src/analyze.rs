//! The isolation boundary between the dataset and the language model.

use creditflow_core::CreditRecord;

use crate::client::GeminiClient;
use crate::condense::{build_prompt, condense};
use crate::error::AiError;

/// Fixed user-facing message substituted for any AI failure.
pub const AI_APOLOGY: &str = "Lo siento, hubo un error al procesar tu consulta con la IA.";

/// Answers a free-text question about the dataset.
///
/// Every failure mode — transport, API error, unexpected response shape —
/// is logged and converted into [`AI_APOLOGY`]; nothing propagates to the
/// caller or touches the parsed dataset.
pub async fn analyze_credit_data(
    client: &GeminiClient,
    records: &[CreditRecord],
    question: &str,
) -> String {
    match ask(client, records, question).await {
        Ok(answer) => answer,
        Err(error) => {
            tracing::error!(%error, "Gemini query failed");
            AI_APOLOGY.to_string()
        }
    }
}

async fn ask(
    client: &GeminiClient,
    records: &[CreditRecord],
    question: &str,
) -> Result<String, AiError> {
    let condensed = condense(records);
    let prompt = build_prompt(&condensed, question)?;
    client.generate(&prompt).await
}
