//! Docket-rooted storage paths.
//!
//! Everything belonging to a docket is stored below `/<agencyId>/<docketId>/`, split into a
//! text tree for JSON records and extracted text, and a binary tree for attachments:
//!
//! ```text
//! /<agencyId>/<docketId>/
//!     text-<docketId>/
//!         docket/<docketId>.json
//!         documents/<documentId>.json
//!         comments/<commentId>.json
//!     binary-<docketId>/
//!         comments_attachments/<commentId>_<fileName>
//! ```
//!
//! This module performs no I/O and no escaping: identifiers are interpolated as given.

use crate::constants::JSON_EXTENSION;

/// Prefix of the per-docket tree holding JSON records and extracted text.
#[derive(Debug, Clone, Copy)]
pub struct TextPrefix;

impl TextPrefix {
    pub const NAME: &'static str = "text-";
}

/// Prefix of the per-docket tree holding binary attachments.
#[derive(Debug, Clone, Copy)]
pub struct BinaryPrefix;

impl BinaryPrefix {
    pub const NAME: &'static str = "binary-";
}

/// Directory holding the docket record itself.
#[derive(Debug, Clone, Copy)]
pub struct DocketDir;

impl DocketDir {
    pub const NAME: &'static str = "docket";
}

/// Directory holding document records.
#[derive(Debug, Clone, Copy)]
pub struct DocumentsDir;

impl DocumentsDir {
    pub const NAME: &'static str = "documents";
}

/// Directory holding comment records.
#[derive(Debug, Clone, Copy)]
pub struct CommentsDir;

impl CommentsDir {
    pub const NAME: &'static str = "comments";
}

/// Binary attachments downloaded for comments.
#[derive(Debug, Clone, Copy)]
pub struct CommentsAttachmentsDir;

impl CommentsAttachmentsDir {
    pub const NAME: &'static str = "comments_attachments";
}

/// Storage paths for one docket.
#[derive(Debug, Clone)]
pub struct DocketPaths<'a> {
    agency_id: &'a str,
    docket_id: &'a str,
}

impl<'a> DocketPaths<'a> {
    pub fn new(agency_id: &'a str, docket_id: &'a str) -> Self {
        Self {
            agency_id,
            docket_id,
        }
    }

    /// `/<agencyId>/<docketId>`
    pub fn root(&self) -> String {
        format!("/{}/{}", self.agency_id, self.docket_id)
    }

    /// `/<agencyId>/<docketId>/text-<docketId>`
    pub fn text_dir(&self) -> String {
        format!("{}/{}{}", self.root(), TextPrefix::NAME, self.docket_id)
    }

    /// `/<agencyId>/<docketId>/binary-<docketId>`
    pub fn binary_dir(&self) -> String {
        format!("{}/{}{}", self.root(), BinaryPrefix::NAME, self.docket_id)
    }

    pub fn docket_json(&self) -> String {
        format!(
            "{}/{}/{}.{}",
            self.text_dir(),
            DocketDir::NAME,
            self.docket_id,
            JSON_EXTENSION
        )
    }

    pub fn document_json(&self, document_id: &str) -> String {
        format!(
            "{}/{}/{}.{}",
            self.text_dir(),
            DocumentsDir::NAME,
            document_id,
            JSON_EXTENSION
        )
    }

    pub fn comment_json(&self, comment_id: &str) -> String {
        format!(
            "{}/{}/{}.{}",
            self.text_dir(),
            CommentsDir::NAME,
            comment_id,
            JSON_EXTENSION
        )
    }

    /// Path of a downloaded attachment, keyed by `<itemId>_<fileName>`.
    pub fn comment_attachment(&self, attachment_id: &str) -> String {
        format!(
            "{}/{}/{}",
            self.binary_dir(),
            CommentsAttachmentsDir::NAME,
            attachment_id
        )
    }
}
