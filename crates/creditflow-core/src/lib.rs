pub mod aggregate;
pub mod app_config;
pub mod config;
pub mod dataset;
pub mod header;
pub mod phases;
pub mod record;
pub mod sample;
pub mod store;
pub mod tokenize;

pub use aggregate::{filter_records, summarize, PortfolioSummary};
pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use dataset::parse_records;
pub use header::HeaderIndex;
pub use phases::{PhaseSpec, PHASES};
pub use record::{build_record, CreditRecord, PhaseTime};
pub use sample::{demo_csv, template_csv};
pub use store::RecordStore;
pub use tokenize::split_line;
