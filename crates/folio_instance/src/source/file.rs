use std::path::Path;

use tracing::debug;
use uuid::Uuid;

pub fn random() -> String {
    Uuid::new_v4().to_string()
}

/// Reads the id stored at `path`, creating and storing a new one when the
/// file is missing or blank.
pub fn persisted(path: &Path) -> anyhow::Result<String> {
    if let Ok(existing_id) = std::fs::read_to_string(path) {
        let trimmed = existing_id.trim();
        if !trimmed.is_empty() {
            debug!(path = %path.display(), "Reusing persisted instance id");
            return Ok(trimmed.to_string());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let new_id = random();
    std::fs::write(path, &new_id)?;
    debug!(path = %path.display(), "Persisted new instance id");

    Ok(new_id)
}
