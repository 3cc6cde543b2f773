//! Record kinds and the identifiers resolved from a record.

use crate::constants::UNKNOWN;
use crate::PathError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The kinds of regulations.gov record that have a storage path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// A regulatory proceeding (`"dockets"`).
    Docket,
    /// A filing within a docket (`"documents"`).
    Document,
    /// A public comment on a docket (`"comments"`).
    Comment,
}

impl RecordKind {
    /// The value of `data.type` for this kind.
    pub fn as_wire(self) -> &'static str {
        match self {
            RecordKind::Docket => "dockets",
            RecordKind::Document => "documents",
            RecordKind::Comment => "comments",
        }
    }
}

impl FromStr for RecordKind {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dockets" => Ok(RecordKind::Docket),
            "documents" => Ok(RecordKind::Document),
            "comments" => Ok(RecordKind::Comment),
            other => Err(PathError::UnsupportedRecordType(other.to_string())),
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Identifiers that place a record in storage.
///
/// Missing values have already been replaced with `"unknown"`. `item_id` is `None` only for
/// dockets, whose own id is the docket id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordAttributes {
    pub agency_id: String,
    pub docket_id: String,
    pub item_id: Option<String>,
}

impl RecordAttributes {
    /// Item id for path building, `"unknown"` when the record has none.
    pub fn item_id_or_unknown(&self) -> &str {
        self.item_id.as_deref().unwrap_or(UNKNOWN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_types() {
        assert_eq!("dockets".parse::<RecordKind>().unwrap(), RecordKind::Docket);
        assert_eq!("documents".parse::<RecordKind>().unwrap(), RecordKind::Document);
        assert_eq!("comments".parse::<RecordKind>().unwrap(), RecordKind::Comment);
    }

    #[test]
    fn rejects_unknown_wire_type() {
        let err = "attachments".parse::<RecordKind>().expect_err("not a record kind");
        match err {
            PathError::UnsupportedRecordType(kind) => assert_eq!(kind, "attachments"),
            other => panic!("expected UnsupportedRecordType, got {other:?}"),
        }
    }

    #[test]
    fn wire_type_is_case_sensitive() {
        assert!("Dockets".parse::<RecordKind>().is_err());
    }

    #[test]
    fn attributes_serialise_with_camel_case_keys() {
        let attributes = RecordAttributes {
            agency_id: "EPA".into(),
            docket_id: "EPA-2020-0001".into(),
            item_id: None,
        };
        let value = serde_json::to_value(&attributes).expect("serialise");
        assert_eq!(
            value,
            serde_json::json!({
                "agencyId": "EPA",
                "docketId": "EPA-2020-0001",
                "itemId": null
            })
        );
    }
}
