//! The canonical credit-approval pipeline.
//!
//! The catalog below is configuration data, not logic: it fixes the display
//! label and source column stem for every pipeline stage, in the order used
//! for display and aggregation. Source files may present these columns in
//! any order (or omit them); the catalog order always wins.

/// One stage of the credit pipeline.
///
/// `name` is the display label attached to parsed [`crate::PhaseTime`]
/// entries. `column` is the stem the source export embeds in the three
/// per-phase column headers; for several phases the stem differs from the
/// display label (e.g. `Liquidación` is exported as
/// `Liquidación de Operación`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSpec {
    pub name: &'static str,
    pub column: &'static str,
}

impl PhaseSpec {
    /// Logical header carrying the total days spent in this phase.
    #[must_use]
    pub fn days_header(&self) -> String {
        format!("Tiempo total en {} (días)", self.column)
    }

    /// Logical header carrying the first entry timestamp for this phase.
    #[must_use]
    pub fn entry_header(&self) -> String {
        format!("Primera vez que entró en la fase {}", self.column)
    }

    /// Logical header carrying the first exit timestamp for this phase.
    ///
    /// "salida" (not "salió") is what the export actually writes.
    #[must_use]
    pub fn exit_header(&self) -> String {
        format!("Primera vez que salida en la fase {}", self.column)
    }
}

/// The pipeline stages in canonical order.
pub const PHASES: &[PhaseSpec] = &[
    PhaseSpec {
        name: "Recepción Negocios",
        column: "Recepción Negocios",
    },
    PhaseSpec {
        name: "Análisis",
        column: "Análisis",
    },
    PhaseSpec {
        name: "Dudas de Análisis",
        column: "Dudas de Análisis",
    },
    PhaseSpec {
        name: "Respuesta Dudas",
        column: "Respuesta dudas análisis",
    },
    PhaseSpec {
        name: "Aprobación Análisis",
        column: "Aprobación Análisis",
    },
    PhaseSpec {
        name: "Consideración",
        column: "Consideración",
    },
    PhaseSpec {
        name: "Revisión Análisis",
        column: "Revisión Análisis",
    },
    PhaseSpec {
        name: "Contratos",
        column: "Contratos",
    },
    PhaseSpec {
        name: "Aprobación Contratos",
        column: "Aprobación de Contratos",
    },
    PhaseSpec {
        name: "Firma y Documentación",
        column: "Firma de Contrato y documentación p/desembolso",
    },
    PhaseSpec {
        name: "Verificación Desembolso",
        column: "Verificación para Desembolso",
    },
    PhaseSpec {
        name: "Validación Garantías",
        column: "Validación Garantías",
    },
    PhaseSpec {
        name: "Liquidación",
        column: "Liquidación de Operación",
    },
];
