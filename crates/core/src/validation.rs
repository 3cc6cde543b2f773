//! Input validation utilities.
//!
//! Storage paths are built by plain interpolation of record identifiers, so a hostile or broken
//! record can yield paths with empty or relative segments. These checks run before a storage
//! path is placed under a real directory.

use crate::{PathError, PathResult};

/// Validates that a storage path is safe to join under a data root.
///
/// The path must:
/// - be non-empty and rooted (start with `/`)
/// - contain no empty, `.` or `..` segments
///
/// # Errors
///
/// Returns `PathError::InvalidPath` describing the first violation found.
pub fn validate_storage_path(path: &str) -> PathResult<()> {
    if path.trim().is_empty() {
        return Err(PathError::InvalidPath("storage path cannot be empty".into()));
    }

    let Some(relative) = path.strip_prefix('/') else {
        return Err(PathError::InvalidPath(format!(
            "storage path must start with '/': {path}"
        )));
    };

    for segment in relative.split('/') {
        match segment {
            "" => {
                return Err(PathError::InvalidPath(format!(
                    "storage path contains an empty segment: {path}"
                )))
            }
            "." | ".." => {
                return Err(PathError::InvalidPath(format!(
                    "storage path contains a relative segment '{segment}': {path}"
                )))
            }
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_generated_paths() {
        for path in [
            "/unknown/unknown.json",
            "/EPA/EPA-2020-0001/text-EPA-2020-0001/docket/EPA-2020-0001.json",
            "/EPA/EPA-2020-0001/binary-EPA-2020-0001/comments_attachments/EPA-2020-0001-0001_file1.pdf",
        ] {
            validate_storage_path(path).expect("valid path");
        }
    }

    #[test]
    fn rejects_invalid_paths() {
        for path in [
            "",
            "   ",
            "EPA/EPA-2020-0001",
            "/",
            "/EPA//docket.json",
            "/EPA/EPA-2020-0001/",
            "/EPA/../etc/passwd",
            "/./EPA",
        ] {
            let err = validate_storage_path(path).expect_err("invalid path");
            assert!(
                matches!(err, PathError::InvalidPath(_)),
                "path {path:?} gave {err:?}"
            );
        }
    }
}
