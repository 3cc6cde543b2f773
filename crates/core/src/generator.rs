//! Storage path generation for regulations.gov records.
//!
//! [`PathGenerator`] places docket, document and comment JSON records, and the attachments
//! referenced by a record, into the storage layout described in [`crate::paths`]. Paths are
//! derived from three identifiers:
//!
//! - `agencyId`: the agency abbreviation, e.g. `USTR`
//! - `docketId`: the docket a record belongs to, e.g. `USTR-2015-0010`
//! - `id`: the record's own id, e.g. `USTR-2015-0010-0001` for a document
//!
//! Any identifier missing from a record becomes `"unknown"`. When a document or comment has no
//! `docketId`, it is parsed from the record id by dropping the final `-` segment.

use crate::constants::{ID_SEPARATOR, UNKNOWN, UNKNOWN_RECORD_PATH};
use crate::json::{self, NULL};
use crate::paths::attachment::{attachment_id, extracted_text_path};
use crate::paths::docket::DocketPaths;
use crate::record::{RecordAttributes, RecordKind};
use crate::{PathError, PathResult};
use serde_json::Value;

const ITEM_ID_KEYS: &[&str] = &["data", "id"];
const AGENCY_ID_KEYS: &[&str] = &["data", "attributes", "agencyId"];
const DOCKET_ID_KEYS: &[&str] = &["data", "attributes", "docketId"];
const FILE_FORMATS_KEYS: &[&str] = &["attributes", "fileFormats"];

/// Stateless resolver from record JSON to storage paths.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathGenerator;

impl PathGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Returns the storage path for a docket, document or comment record.
    ///
    /// Records with a missing, `null` or empty `data` field map to `/unknown/unknown.json`.
    ///
    /// # Errors
    ///
    /// - `PathError::UnsupportedRecordType` if `data.type` is not `dockets`, `documents` or
    ///   `comments`.
    /// - `PathError::MalformedRecord` if the record is not shaped like a record at all.
    pub fn get_path(&self, json: &Value) -> PathResult<String> {
        let Some(data) = record_data(json)? else {
            return Ok(UNKNOWN_RECORD_PATH.to_string());
        };

        let kind = match data.get("type") {
            Some(Value::String(kind)) => kind.parse::<RecordKind>()?,
            None | Some(Value::Null) => {
                return Err(PathError::MalformedRecord("`data.type` is missing".into()))
            }
            Some(other) => {
                return Err(PathError::MalformedRecord(format!(
                    "`data.type` must be a string, found {}",
                    json::type_name(other)
                )))
            }
        };

        let path = match kind {
            RecordKind::Docket => self.get_docket_json_path(json)?,
            RecordKind::Document => self.get_document_json_path(json)?,
            RecordKind::Comment => self.get_comment_json_path(json)?,
        };

        tracing::debug!(record_type = %kind, path = %path, "resolved record path");
        Ok(path)
    }

    /// Derives a docket id from a document or comment id by dropping its final `-` segment.
    ///
    /// `USTR-2015-0010-0001` parses to `USTR-2015-0010`. A missing id, or one with nothing
    /// before its last `-`, parses to `"unknown"`.
    pub fn parse_docket_id(&self, item_id: Option<&str>) -> String {
        let Some(item_id) = item_id else {
            tracing::warn!("no docketId or id found, docket id is unknown");
            return UNKNOWN.to_string();
        };

        let parsed_docket_id = match item_id.rsplit_once(ID_SEPARATOR) {
            Some((docket_id, _sequence)) if !docket_id.is_empty() => docket_id,
            _ => UNKNOWN,
        };

        tracing::warn!(
            item_id = %item_id,
            parsed_docket_id = %parsed_docket_id,
            "no docketId key found, parsed docket id from the id key"
        );

        parsed_docket_id.to_string()
    }

    /// Returns the agency id, docket id and item id of a record.
    ///
    /// For dockets the record id is the docket id and the item id is `None`. Every other
    /// missing or empty identifier is replaced with `"unknown"`.
    ///
    /// # Errors
    ///
    /// Returns `PathError::MalformedRecord` if the record is not a JSON object or an identifier
    /// is present but not a string.
    pub fn get_attributes(
        &self,
        json_data: &Value,
        is_docket_json: bool,
    ) -> PathResult<RecordAttributes> {
        ensure_object(json_data)?;

        let mut item_id = nested_id(json_data, ITEM_ID_KEYS)?;
        let agency_id = nested_id(json_data, AGENCY_ID_KEYS)?;

        let docket_id = if is_docket_json {
            item_id.take()
        } else {
            match nested_id(json_data, DOCKET_ID_KEYS)? {
                Some(docket_id) => Some(docket_id),
                None => Some(self.parse_docket_id(item_id.as_deref())),
            }
        };

        if !is_docket_json && item_id.is_none() {
            item_id = Some(UNKNOWN.to_string());
        }

        Ok(RecordAttributes {
            agency_id: agency_id.unwrap_or_else(|| UNKNOWN.to_string()),
            docket_id: docket_id.unwrap_or_else(|| UNKNOWN.to_string()),
            item_id,
        })
    }

    pub fn get_docket_json_path(&self, json: &Value) -> PathResult<String> {
        let attributes = self.get_attributes(json, true)?;

        Ok(DocketPaths::new(&attributes.agency_id, &attributes.docket_id).docket_json())
    }

    pub fn get_document_json_path(&self, json: &Value) -> PathResult<String> {
        let attributes = self.get_attributes(json, false)?;

        Ok(DocketPaths::new(&attributes.agency_id, &attributes.docket_id)
            .document_json(attributes.item_id_or_unknown()))
    }

    pub fn get_comment_json_path(&self, json: &Value) -> PathResult<String> {
        let attributes = self.get_attributes(json, false)?;

        Ok(DocketPaths::new(&attributes.agency_id, &attributes.docket_id)
            .comment_json(attributes.item_id_or_unknown()))
    }

    /// Returns the storage path of every downloadable file referenced under `included`.
    ///
    /// Attachments without `fileFormats`, and file formats without a `fileUrl`, are skipped
    /// with a warning. Paths are returned in the order they appear in the record.
    ///
    /// # Errors
    ///
    /// Returns `PathError::MalformedRecord` if `data`, `included`, `fileFormats` or a `fileUrl`
    /// has the wrong JSON type.
    pub fn get_attachment_json_paths(&self, json: &Value) -> PathResult<Vec<String>> {
        record_data(json)?;

        let attributes = self.get_attributes(json, false)?;
        let item_id = attributes.item_id_or_unknown();
        let paths = DocketPaths::new(&attributes.agency_id, &attributes.docket_id);

        let included = match json.get("included") {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Array(included)) => included,
            Some(other) => {
                return Err(PathError::MalformedRecord(format!(
                    "`included` must be an array, found {}",
                    json::type_name(other)
                )))
            }
        };

        let mut attachments = Vec::new();

        for attachment in included {
            let id = display_id(attachment.get("id"));
            let file_formats = json::get_nested(attachment, FILE_FORMATS_KEYS, &NULL);

            if json::is_falsy(file_formats) || file_formats.as_str() == Some("null") {
                tracing::warn!(attachment_id = %id, "fileFormats did not exist for attachment");
                continue;
            }

            let Value::Array(file_formats) = file_formats else {
                return Err(PathError::MalformedRecord(format!(
                    "`fileFormats` of attachment {id} must be an array, found {}",
                    json::type_name(file_formats)
                )));
            };

            for file_format in file_formats {
                match file_format.get("fileUrl") {
                    Some(Value::String(file_url)) => {
                        attachments.push(paths.comment_attachment(&attachment_id(item_id, file_url)));
                    }
                    None | Some(Value::Null) if file_format.is_object() => {
                        tracing::warn!(attachment_id = %id, "fileUrl did not exist for attachment");
                    }
                    None | Some(Value::Null) => {
                        return Err(PathError::MalformedRecord(format!(
                            "file format of attachment {id} must be an object, found {}",
                            json::type_name(file_format)
                        )));
                    }
                    Some(other) => {
                        return Err(PathError::MalformedRecord(format!(
                            "`fileUrl` of attachment {id} must be a string, found {}",
                            json::type_name(other)
                        )));
                    }
                }
            }
        }

        Ok(attachments)
    }

    /// Returns where the text extracted from an attachment is saved.
    ///
    /// `/EPA/EPA-2020-0001/binary-EPA-2020-0001/comments_attachments/x_file1.pdf` becomes
    /// `/EPA/EPA-2020-0001/text-EPA-2020-0001/comments_extracted_text/pdfminer/x_file1_extracted.txt`.
    pub fn make_attachment_save_path(path: &str) -> String {
        extracted_text_path(path)
    }
}

fn ensure_object(json: &Value) -> PathResult<()> {
    if json.is_object() {
        Ok(())
    } else {
        Err(PathError::MalformedRecord(format!(
            "record must be an object, found {}",
            json::type_name(json)
        )))
    }
}

/// Reads an identifier, treating an empty string like a missing one.
fn nested_id(json: &Value, keys: &[&str]) -> PathResult<Option<String>> {
    Ok(json::nested_str(json, keys)?
        .filter(|id| !id.is_empty())
        .map(str::to_owned))
}

/// Returns the record's `data` object, or `None` when the record carries no data.
fn record_data(json: &Value) -> PathResult<Option<&Value>> {
    ensure_object(json)?;

    match json.get("data") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(data)) if data.is_empty() => Ok(None),
        Some(Value::Array(data)) if data.is_empty() => Ok(None),
        Some(data @ Value::Object(_)) => Ok(Some(data)),
        Some(other) => Err(PathError::MalformedRecord(format!(
            "`data` must be an object, found {}",
            json::type_name(other)
        ))),
    }
}

fn display_id(id: Option<&Value>) -> String {
    match id {
        Some(Value::String(id)) => id.clone(),
        None | Some(Value::Null) => "<missing>".to_string(),
        Some(other) => other.to_string(),
    }
}
