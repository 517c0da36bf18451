//! Identifier for the running folio instance.
//!
//! Nothing is generated at load time: hosts call [`InstanceId::init`] once
//! during startup and keep the returned id in their own context.

mod config;
mod source;

use std::path::PathBuf;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub use config::{IdSource, InstanceConfig};

pub const ANONYMOUS_INSTANCE_ID: &str = "<anonymous>";

/// File name used for persisted ids when no explicit path is configured
pub const DEFAULT_ID_FILE: &str = ".folio_instance_id";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub struct InstanceId(String);

impl InstanceId {
    /// Resolves the instance id from the configured source.
    pub fn init(config: &InstanceConfig) -> anyhow::Result<Self> {
        let id = match config.source {
            IdSource::Random => source::random(),
            IdSource::File => source::persisted(&id_file(config))?,
            IdSource::Machine => source::machine()?,
        };
        Ok(Self(id))
    }

    /// Like [`InstanceId::init`], but falls back to the anonymous id when the
    /// configured source is unavailable.
    pub fn init_or_anonymous(config: &InstanceConfig) -> Self {
        Self::init(config).unwrap_or_else(|error| {
            warn!(%error, source = ?config.source, "Could not resolve instance id");
            Self::anonymous()
        })
    }

    pub fn anonymous() -> Self {
        Self(ANONYMOUS_INSTANCE_ID.to_string())
    }

    pub fn is_anonymous(&self) -> bool {
        self.0 == ANONYMOUS_INSTANCE_ID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for InstanceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn id_file(config: &InstanceConfig) -> PathBuf {
    config.id_file.clone().unwrap_or_else(|| {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_ID_FILE)
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_random_ids_are_uuids() {
        let fixture = InstanceConfig::default();

        let first = InstanceId::init(&fixture).unwrap();
        let second = InstanceId::init(&fixture).unwrap();

        assert!(uuid::Uuid::parse_str(first.as_str()).is_ok());
        assert_ne!(first, second);
    }

    #[test]
    fn test_machine_ids_are_stable() {
        let fixture = InstanceConfig::default().source(IdSource::Machine);

        let first = InstanceId::init_or_anonymous(&fixture);
        let second = InstanceId::init_or_anonymous(&fixture);

        assert_eq!(first, second);
        // Sandboxes without hardware identifiers fall back to the anonymous id.
        if !first.is_anonymous() {
            assert!(uuid::Uuid::parse_str(first.as_str()).is_ok());
        }
    }

    #[test]
    fn test_file_ids_are_reused() {
        let dir = tempfile::tempdir().unwrap();
        let fixture = InstanceConfig::default()
            .source(IdSource::File)
            .id_file(dir.path().join("nested").join("instance_id"));

        let first = InstanceId::init(&fixture).unwrap();
        let second = InstanceId::init(&fixture).unwrap();

        assert_eq!(first, second);
        assert!(!first.is_anonymous());
    }

    #[test]
    fn test_blank_id_file_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("instance_id");
        std::fs::write(&path, "  \n").unwrap();
        let fixture = InstanceConfig::default().source(IdSource::File).id_file(path.clone());

        let actual = InstanceId::init(&fixture).unwrap();

        let expected = std::fs::read_to_string(&path).unwrap();
        assert_eq!(actual.as_str(), expected);
    }

    #[test]
    fn test_existing_id_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("instance_id");
        std::fs::write(&path, "site-42\n").unwrap();
        let fixture = InstanceConfig::default().source(IdSource::File).id_file(path);

        let actual = InstanceId::init(&fixture).unwrap();

        assert_eq!(actual.to_string(), "site-42");
    }

    #[test]
    fn test_unwritable_file_falls_back_to_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be read or written as an id file.
        let fixture = InstanceConfig::default()
            .source(IdSource::File)
            .id_file(dir.path().to_path_buf());

        let actual = InstanceId::init_or_anonymous(&fixture);

        assert_eq!(actual, InstanceId::anonymous());
        assert_eq!(actual.as_ref(), ANONYMOUS_INSTANCE_ID);
    }
}
