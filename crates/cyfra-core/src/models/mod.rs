//! Data models: schema, records, statuses, and configuration.

pub mod config;
pub mod record;
pub mod schema;
pub mod status;

pub use config::CyfraConfig;
pub use record::{Record, NULL_MARKER};
pub use schema::{FieldSchema, LabelRule};
pub use status::{ComplaintStatus, FirStatus, InvestigationStatus};
