use derive_setters::Setters;
use folio_instance::{InstanceConfig, InstanceId};
use folio_text::{SearchOptions, SearchPattern, TruncateOptions, Truncator};
use folio_tree::PruneOptions;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[serde(default)]
#[setters(into)]
pub struct FolioConfig {
    pub truncate: TruncateOptions,
    pub search: SearchOptions,
    pub prune: PruneOptions,
    pub instance: InstanceConfig,
}

impl FolioConfig {
    pub fn truncator(&self, max_chars: usize) -> Truncator {
        self.truncate.truncator(max_chars)
    }

    pub fn search_pattern(&self, query: &str, prefix: bool) -> folio_text::Result<SearchPattern> {
        self.search.builder().prefix(prefix).build(query)
    }

    /// Strips the configured temporary keys from `doc`.
    pub fn sanitize(&self, doc: &mut Value) {
        self.prune.prune(doc)
    }

    pub fn instance_id(&self) -> InstanceId {
        InstanceId::init_or_anonymous(&self.instance)
    }
}
