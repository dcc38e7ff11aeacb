//! Fixed-content CSV generators for user guidance.
//!
//! Both outputs are derived from (or checked against) the phase catalog so
//! they stay byte-compatible with the logical names the header resolver
//! expects. They are guidance artifacts, not part of the parsing contract.

use crate::phases::{PhaseSpec, PHASES};

/// Suggested filename for the downloadable template.
pub const TEMPLATE_FILE_NAME: &str = "plantilla_creditflow.csv";

/// A valid one-row template: scalar columns, every phase's days column, and
/// the executive email, plus one example row.
#[must_use]
pub fn template_csv() -> String {
    let mut headers = vec![
        "Nombre del Cliente".to_string(),
        "IDFase".to_string(),
        "Fase actual".to_string(),
        "Monto DOP Total Solicitado por el Cliente".to_string(),
    ];
    headers.extend(PHASES.iter().map(PhaseSpec::days_header));
    headers.push("Correo del Ejecutivo de Negocios".to_string());

    let mut row = vec!["Empresa Ejemplo SA", "REC-001", "Análisis", "5000000"];
    let example_days = ["1.5", "3", "0.5", "1", "2"];
    row.extend(example_days);
    row.extend(std::iter::repeat_n("0", PHASES.len() - example_days.len()));
    row.push("ejecutivo@banco.com");

    format!("{}\n{}", headers.join(","), row.join(","))
}

/// A small three-client demo dataset.
#[must_use]
pub fn demo_csv() -> String {
    [
        "Nombre del Cliente,Fase actual,Monto DOP Total Solicitado por el Cliente,Tiempo total en Recepción Negocios (días),Tiempo total en Análisis (días),Tiempo total en Contratos (días),Correo del Ejecutivo de Negocios",
        "Juan Perez,Análisis,1500000,2,5,0,pedro@banco.com",
        "Maria Rodriguez,Contratos,2800000,1,3,4,ana@banco.com",
        "Tech Solutions SRL,Liquidación de Operación,12000000,3,10,2,luis@banco.com",
    ]
    .join("\n")
}
