//! Recursive pruning of JSON document trees.
//!
//! Documents are plain [`serde_json::Value`]s. [`prune_deep`] visits every
//! key of every object, hands it to a caller-supplied predicate along with
//! its dot path, and removes the keys the predicate selects.

pub mod path;
mod prune;

pub use prune::{PruneOptions, prune_deep, prune_temporary_properties};
