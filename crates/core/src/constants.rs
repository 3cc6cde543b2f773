//! Constants used throughout the mirrulations core crate.
//!
//! Identifier fallbacks, file suffixes and environment variable names live here so
//! the path templates and the CLI agree on them.

/// Placeholder used for any identifier that is missing from a record.
pub const UNKNOWN: &str = "unknown";

/// Path returned for records that carry no `data` payload at all.
pub const UNKNOWN_RECORD_PATH: &str = "/unknown/unknown.json";

/// Separator between a docket id and the sequence suffix of its documents and comments.
pub const ID_SEPARATOR: char = '-';

/// Separator between an item id and an attachment file name.
pub const ATTACHMENT_ID_SEPARATOR: &str = "_";

/// Extension for record JSON files.
pub const JSON_EXTENSION: &str = "json";

/// Extension of binary attachments that text is extracted from.
pub const PDF_EXTENSION: &str = ".pdf";

/// Suffix replacing [`PDF_EXTENSION`] on extracted text files.
pub const EXTRACTED_TEXT_SUFFIX: &str = "_extracted.txt";

/// Name of the database holding the document-count collections.
pub const DATABASE_NAME: &str = "mirrulations";

/// Environment variable naming the directory storage paths are placed under.
pub const DATA_ROOT_ENV_VAR: &str = "MIRR_DATA_ROOT";
