use std::path::PathBuf;

use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Where the instance id comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdSource {
    /// A fresh UUID on every start
    #[default]
    Random,
    /// A UUID persisted to `id_file` and reused across restarts
    File,
    /// Derived from hardware identifiers, stable per machine; unavailable on
    /// Android
    Machine,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[serde(default)]
#[setters(into)]
pub struct InstanceConfig {
    pub source: IdSource,
    /// Used by [`IdSource::File`]; defaults to `~/.folio_instance_id`
    #[setters(strip_option)]
    pub id_file: Option<PathBuf>,
}
