/// Extends a dot path with one more segment. The root has the empty path, so
/// its children are addressed by their bare key.
pub fn join(parent: &str, segment: &str) -> String {
    if parent.is_empty() {
        segment.to_string()
    } else {
        format!("{parent}.{segment}")
    }
}
