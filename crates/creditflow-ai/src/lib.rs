//! External language-model collaborator for free-text Q&A over the parsed
//! dataset.
//!
//! The rest of the system treats this crate as fully isolated: whatever
//! goes wrong here (network, API, response shape) degrades to a fixed
//! apologetic message and never reaches the data layer.

pub mod analyze;
pub mod client;
pub mod condense;
pub mod error;

pub use analyze::{analyze_credit_data, AI_APOLOGY};
pub use client::GeminiClient;
pub use condense::{build_prompt, condense, CondensedRecord, MAX_PROMPT_RECORDS};
pub use error::AiError;
