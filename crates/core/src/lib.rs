//! # Mirrulations Core
//!
//! Storage path derivation for records downloaded from regulations.gov.
//!
//! This crate contains pure path logic:
//! - Docket, document and comment JSON records are placed under their agency and docket
//! - Attachments referenced by a record get a path in the docket's binary tree
//! - Extracted text for an attachment gets a companion path in the docket's text tree
//! - Document counts used to report ingestion progress are read through a small trait
//!
//! **No I/O**: reading records, downloading attachments and talking to the count store belong
//! to callers such as `mirr-cli`.
//!
//! ```
//! use mirr_core::PathGenerator;
//! use serde_json::json;
//!
//! let record = json!({
//!     "data": {
//!         "id": "EPA-2020-0001-0001",
//!         "type": "documents",
//!         "attributes": {"agencyId": "EPA"}
//!     }
//! });
//!
//! let path = PathGenerator::new().get_path(&record).unwrap();
//! assert_eq!(
//!     path,
//!     "/EPA/EPA-2020-0001/text-EPA-2020-0001/documents/EPA-2020-0001-0001.json"
//! );
//! ```

pub mod config;
pub mod constants;
pub mod counts;
pub mod error;
pub mod generator;
pub mod json;
pub mod paths;
pub mod record;
pub mod validation;

pub use config::CoreConfig;
pub use counts::{ingestion_counts, Collection, CountStore, DocumentCounter, IngestionCounts};
pub use error::{CountError, CountResult, PathError, PathResult};
pub use generator::PathGenerator;
pub use record::{RecordAttributes, RecordKind};
