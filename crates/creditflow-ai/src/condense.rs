//! The condensed projection sent to the language model.
//!
//! Only a bounded slice of the dataset is forwarded, each record reduced to
//! a handful of fields, to keep the prompt payload small.

use creditflow_core::CreditRecord;
use serde::Serialize;

use crate::error::AiError;

/// Upper bound on records included in a prompt.
pub const MAX_PROMPT_RECORDS: usize = 20;

/// One record as the model sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CondensedRecord {
    pub cliente: String,
    pub fase: String,
    pub monto_dop: f64,
    /// Flattened phase durations, e.g. `"Análisis: 5d, Contratos: 1.5d"`.
    pub tiempos: String,
}

/// Reduces the record collection to its first [`MAX_PROMPT_RECORDS`]
/// entries in condensed form.
#[must_use]
pub fn condense(records: &[CreditRecord]) -> Vec<CondensedRecord> {
    records
        .iter()
        .take(MAX_PROMPT_RECORDS)
        .map(|r| CondensedRecord {
            cliente: r.cliente.clone(),
            fase: r.fase_actual.clone(),
            monto_dop: r.monto_dop,
            tiempos: r
                .phases
                .iter()
                .map(|p| format!("{}: {}d", p.phase_name, p.days))
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect()
}

/// Assembles the Spanish analyst prompt around the condensed data and the
/// user's question.
///
/// # Errors
///
/// Returns [`AiError::Deserialize`] if the condensed data cannot be
/// serialized (which only happens for non-finite amounts).
pub fn build_prompt(condensed: &[CondensedRecord], question: &str) -> Result<String, AiError> {
    let data = serde_json::to_string(condensed).map_err(|e| AiError::Deserialize {
        context: "condensed dataset".to_string(),
        source: e,
    })?;

    Ok(format!(
        "Eres un analista experto en banca y riesgos. Tienes los siguientes datos de expedientes de crédito:\n\
         {data}\n\n\
         El usuario pregunta: \"{question}\"\n\n\
         Por favor, responde en español de manera profesional. Si detectas cuellos de botella (fases que duran mucho) o irregularidades, menciónalas."
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use creditflow_core::parse_records;

    fn sample() -> Vec<CreditRecord> {
        parse_records(
            "Nombre del Cliente,Fase actual,Monto DOP Total Solicitado por el Cliente,Tiempo total en Análisis (días),Tiempo total en Contratos (días)\n\
             Juan Perez,Análisis,1500000,5,1.5",
        )
    }

    #[test]
    fn condensed_record_flattens_phases() {
        let condensed = condense(&sample());
        assert_eq!(condensed.len(), 1);
        assert_eq!(condensed[0].cliente, "Juan Perez");
        assert_eq!(condensed[0].fase, "Análisis");
        assert_eq!(condensed[0].tiempos, "Análisis: 5d, Contratos: 1.5d");
    }

    #[test]
    fn condense_caps_at_the_prompt_limit() {
        let mut csv = String::from("Nombre del Cliente\n");
        for i in 0..30 {
            csv.push_str(&format!("Cliente {i}\n"));
        }
        let records = parse_records(&csv);
        assert_eq!(records.len(), 30);
        assert_eq!(condense(&records).len(), MAX_PROMPT_RECORDS);
    }

    #[test]
    fn prompt_embeds_data_and_question() {
        let condensed = condense(&sample());
        let prompt =
            build_prompt(&condensed, "¿Qué fase retrasa más?").expect("prompt builds");
        assert!(prompt.contains("Juan Perez"));
        assert!(prompt.contains("\"¿Qué fase retrasa más?\""));
        assert!(prompt.contains("analista experto en banca"));
    }

    #[test]
    fn prompt_works_with_no_records() {
        let prompt = build_prompt(&[], "¿Hay datos?").expect("prompt builds");
        assert!(prompt.contains("[]"));
    }
}
