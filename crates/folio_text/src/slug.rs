use derive_setters::Setters;

/// Controls how [`slugify`] joins and filters words.
#[derive(Debug, Clone, PartialEq, Eq, Setters)]
#[setters(into)]
pub struct SlugOptions {
    /// Inserted between words in place of any run of other characters
    pub separator: String,
    /// A single punctuation character kept verbatim, e.g. `/` for paths
    #[setters(strip_option)]
    pub allowed_punctuation: Option<char>,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self { separator: "-".to_string(), allowed_punctuation: None }
    }
}

impl SlugOptions {
    /// Space-separated form used for sorting and fuzzy matching.
    pub fn sortable() -> Self {
        Self::default().separator(" ")
    }
}

/// Lowercases `text`, keeps alphanumerics (and the allowed punctuation
/// character) and collapses every other run of characters into a single
/// separator. Leading and trailing separators are never emitted.
pub fn slugify(text: &str, options: &SlugOptions) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() || options.allowed_punctuation == Some(ch) {
            if pending_separator && !slug.is_empty() {
                slug.push_str(&options.separator);
            }
            slug.push(ch);
            pending_separator = false;
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// URL slug with `-` between words.
pub fn slug(text: &str) -> String {
    slugify(text, &SlugOptions::default())
}

/// Canonical lowercase, space-separated form of `text` used for sort keys and
/// as the haystack for [`crate::searchify`] patterns.
pub fn sortify(text: &str) -> String {
    slugify(text, &SlugOptions::sortable())
}
