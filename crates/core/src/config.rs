//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into callers. Environment variables are read by the binary, never here, so that
//! tests and library users see consistent behaviour.

use crate::validation::validate_storage_path;
use crate::{PathError, PathResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_root: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig` placing storage paths under `data_root`.
    pub fn new(data_root: PathBuf) -> PathResult<Self> {
        if data_root.as_os_str().is_empty() {
            return Err(PathError::InvalidInput("data_root cannot be empty".into()));
        }

        Ok(Self { data_root })
    }

    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    /// Places a rooted storage path under the data root.
    ///
    /// `/EPA/EPA-2020-0001/docket.json` under `data` becomes `data/EPA/EPA-2020-0001/docket.json`.
    ///
    /// # Errors
    ///
    /// Returns `PathError::InvalidPath` if the storage path fails
    /// [`validate_storage_path`].
    pub fn locate(&self, storage_path: &str) -> PathResult<PathBuf> {
        validate_storage_path(storage_path)?;

        Ok(storage_path
            .trim_start_matches('/')
            .split('/')
            .fold(self.data_root.clone(), |dir, segment| dir.join(segment)))
    }
}

/// Resolve the data root from a command-line override and the raw environment value.
///
/// The override wins. A missing or whitespace-only environment value means no data root is
/// configured and `None` is returned.
pub fn resolve_data_root(
    override_dir: Option<PathBuf>,
    env_value: Option<String>,
) -> PathResult<Option<CoreConfig>> {
    if let Some(dir) = override_dir {
        return CoreConfig::new(dir).map(Some);
    }

    env_value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(|v| CoreConfig::new(PathBuf::from(v)))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_joins_under_data_root() {
        let config = CoreConfig::new(PathBuf::from("/srv/mirrulations")).expect("config");

        assert_eq!(
            config
                .locate("/EPA/EPA-2020-0001/text-EPA-2020-0001/docket/EPA-2020-0001.json")
                .expect("locate"),
            PathBuf::from(
                "/srv/mirrulations/EPA/EPA-2020-0001/text-EPA-2020-0001/docket/EPA-2020-0001.json"
            )
        );
    }

    #[test]
    fn locate_rejects_traversal() {
        let config = CoreConfig::new(PathBuf::from("data")).expect("config");

        let err = config.locate("/EPA/../../etc").expect_err("traversal");
        assert!(matches!(err, PathError::InvalidPath(_)));
    }

    #[test]
    fn empty_data_root_is_rejected() {
        let err = CoreConfig::new(PathBuf::new()).expect_err("empty root");
        assert!(matches!(err, PathError::InvalidInput(_)));
    }

    #[test]
    fn override_wins_over_env() {
        let config = resolve_data_root(Some(PathBuf::from("cli")), Some("env".into()))
            .expect("resolve")
            .expect("configured");
        assert_eq!(config.data_root(), Path::new("cli"));
    }

    #[test]
    fn env_value_is_trimmed() {
        let config = resolve_data_root(None, Some("  /data  ".into()))
            .expect("resolve")
            .expect("configured");
        assert_eq!(config.data_root(), Path::new("/data"));
    }

    #[test]
    fn blank_env_value_means_unconfigured() {
        assert!(resolve_data_root(None, Some("   ".into()))
            .expect("resolve")
            .is_none());
        assert!(resolve_data_root(None, None).expect("resolve").is_none());
    }
}
