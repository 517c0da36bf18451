use std::convert::Infallible;

use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::path;

/// Walks `doc` and removes every object key for which `predicate` returns
/// `true`.
///
/// The predicate receives the containing object, the key, its value and the
/// key's dot path. Keys are removed once their whole object has been visited,
/// so the predicate always sees the object as it was when the level started,
/// apart from changes made to nested children. Values whose key is kept are
/// visited recursively; removed values are not.
///
/// Arrays are traversed (indices become path segments) but the predicate is
/// never called for array elements and array slots are never removed.
///
/// # Errors
///
/// The first error returned by `predicate` stops the walk and is returned
/// as-is. Removals already applied to nested objects stay applied; keys
/// marked on the object being visited at that moment are kept.
pub fn prune_deep<F, E>(doc: &mut Value, mut predicate: F) -> Result<(), E>
where
    F: FnMut(&Map<String, Value>, &str, &Value, &str) -> Result<bool, E>,
{
    let removed = prune_value(doc, "", &mut predicate)?;
    debug!(removed, "Pruned document");
    Ok(())
}

fn prune_value<F, E>(value: &mut Value, path: &str, predicate: &mut F) -> Result<usize, E>
where
    F: FnMut(&Map<String, Value>, &str, &Value, &str) -> Result<bool, E>,
{
    match value {
        Value::Object(map) => prune_map(map, path, predicate),
        Value::Array(items) => {
            let mut removed = 0;
            for (index, item) in items.iter_mut().enumerate() {
                if is_container(item) {
                    let item_path = path::join(path, &index.to_string());
                    removed += prune_value(item, &item_path, predicate)?;
                }
            }
            Ok(removed)
        }
        _ => Ok(0),
    }
}

fn prune_map<F, E>(
    map: &mut Map<String, Value>,
    path: &str,
    predicate: &mut F,
) -> Result<usize, E>
where
    F: FnMut(&Map<String, Value>, &str, &Value, &str) -> Result<bool, E>,
{
    let keys = map.keys().cloned().collect::<Vec<_>>();
    let mut marked = Vec::new();
    let mut removed = 0;

    for key in keys {
        let key_path = path::join(path, &key);
        let container = &*map;
        let Some(value) = container.get(&key) else {
            continue;
        };

        if predicate(container, &key, value, &key_path)? {
            trace!(path = %key_path, "Marked key for removal");
            marked.push(key);
        } else if let Some(child) = map.get_mut(&key)
            && is_container(child)
        {
            removed += prune_value(child, &key_path, predicate)?;
        }
    }

    removed += marked.len();
    for key in &marked {
        map.remove(key);
    }

    Ok(removed)
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Selects the temporary keys stripped from documents before they are
/// persisted: every key starting with `reserved_prefix`, except the
/// `preserved_keys`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[serde(default)]
#[setters(into)]
pub struct PruneOptions {
    pub reserved_prefix: char,
    pub preserved_keys: Vec<String>,
}

impl Default for PruneOptions {
    fn default() -> Self {
        Self { reserved_prefix: '_', preserved_keys: vec!["_id".to_string()] }
    }
}

impl PruneOptions {
    pub fn is_temporary(&self, key: &str) -> bool {
        key.starts_with(self.reserved_prefix) && !self.preserved_keys.iter().any(|k| k == key)
    }

    pub fn prune(&self, doc: &mut Value) {
        let Ok(()) = prune_deep::<_, Infallible>(doc, |_, key, _, _| Ok(self.is_temporary(key)));
    }
}

/// Removes every `_`-prefixed key except `_id` at any depth of `doc`.
pub fn prune_temporary_properties(doc: &mut Value) {
    PruneOptions::default().prune(doc)
}
