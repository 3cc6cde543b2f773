//! Attachment naming and extracted-text paths.
//!
//! Extracted text sits in the docket's text tree, beside the binary it came from:
//!
//! ```text
//! /EPA/EPA-2020-0001/binary-EPA-2020-0001/comments_attachments/EPA-2020-0001-0001_file1.pdf
//! /EPA/EPA-2020-0001/text-EPA-2020-0001/comments_extracted_text/pdfminer/EPA-2020-0001-0001_file1_extracted.txt
//! ```

use crate::constants::{ATTACHMENT_ID_SEPARATOR, EXTRACTED_TEXT_SUFFIX, PDF_EXTENSION};
use crate::paths::docket::{CommentsAttachmentsDir, CommentsDir};

const BINARY_MARKER: &str = "binary";
const TEXT_MARKER: &str = "text";

/// Binary attachments downloaded for documents.
#[derive(Debug, Clone, Copy)]
pub struct DocumentsAttachmentsDir;

impl DocumentsAttachmentsDir {
    pub const NAME: &'static str = "documents_attachments";
}

/// Text extracted from comment attachments.
#[derive(Debug, Clone, Copy)]
pub struct CommentsExtractedTextDir;

impl CommentsExtractedTextDir {
    pub const NAME: &'static str = "comments_extracted_text";
}

/// Text extracted from document attachments.
#[derive(Debug, Clone, Copy)]
pub struct DocumentsExtractedTextDir;

impl DocumentsExtractedTextDir {
    pub const NAME: &'static str = "documents_extracted_text";
}

/// Subdirectory named after the tool that produced the extracted text.
#[derive(Debug, Clone, Copy)]
pub struct ExtractorDir;

impl ExtractorDir {
    pub const NAME: &'static str = "pdfminer";
}

/// Builds the attachment id `<itemId>_<fileName>`, where the file name is the last `/` segment
/// of `file_url`.
pub fn attachment_id(item_id: &str, file_url: &str) -> String {
    let attachment_name = file_url.rsplit('/').next().unwrap_or(file_url);
    format!("{item_id}{ATTACHMENT_ID_SEPARATOR}{attachment_name}")
}

/// Rewrites an attachment path into the path of its extracted text.
///
/// Paths containing `comments` are treated as comment attachments, anything else as a
/// document attachment. Every occurrence of each pattern is replaced.
pub fn extracted_text_path(attachment_path: &str) -> String {
    let (attachments_dir, extracted_dir) = if attachment_path.contains(CommentsDir::NAME) {
        (CommentsAttachmentsDir::NAME, CommentsExtractedTextDir::NAME)
    } else {
        (DocumentsAttachmentsDir::NAME, DocumentsExtractedTextDir::NAME)
    };

    attachment_path
        .replace(BINARY_MARKER, TEXT_MARKER)
        .replace(
            attachments_dir,
            &format!("{extracted_dir}/{}", ExtractorDir::NAME),
        )
        .replace(PDF_EXTENSION, EXTRACTED_TEXT_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attachment_id_uses_last_url_segment() {
        assert_eq!(
            attachment_id(
                "EPA-2020-0001-0001",
                "https://downloads.regulations.gov/EPA-2020-0001-0001/attachment_1.pdf"
            ),
            "EPA-2020-0001-0001_attachment_1.pdf"
        );
    }

    #[test]
    fn attachment_id_without_slash_keeps_whole_url() {
        assert_eq!(attachment_id("X-1", "file.pdf"), "X-1_file.pdf");
    }

    #[test]
    fn attachment_id_with_trailing_slash_has_empty_name() {
        assert_eq!(attachment_id("X-1", "https://host/dir/"), "X-1_");
    }

    #[test]
    fn comment_attachment_maps_to_comments_extracted_text() {
        let path = "/EPA/EPA-2020-0001/binary-EPA-2020-0001/comments_attachments/EPA-2020-0001-0001_file1.pdf";
        assert_eq!(
            extracted_text_path(path),
            "/EPA/EPA-2020-0001/text-EPA-2020-0001/comments_extracted_text/pdfminer/EPA-2020-0001-0001_file1_extracted.txt"
        );
    }

    #[test]
    fn document_attachment_maps_to_documents_extracted_text() {
        let path = "/USTR/USTR-2015-0010/binary-USTR-2015-0010/documents_attachments/USTR-2015-0010-0001_content.pdf";
        assert_eq!(
            extracted_text_path(path),
            "/USTR/USTR-2015-0010/text-USTR-2015-0010/documents_extracted_text/pdfminer/USTR-2015-0010-0001_content_extracted.txt"
        );
    }

    #[test]
    fn non_pdf_attachment_keeps_extension() {
        let path = "/A/A-1/binary-A-1/comments_attachments/A-1-2_scan.docx";
        assert_eq!(
            extracted_text_path(path),
            "/A/A-1/text-A-1/comments_extracted_text/pdfminer/A-1-2_scan.docx"
        );
    }

    #[test]
    fn every_occurrence_is_replaced() {
        assert_eq!(
            extracted_text_path("/binary/comments_attachments/a.pdf.pdf"),
            "/text/comments_extracted_text/pdfminer/a_extracted.txt_extracted.txt"
        );
    }
}
