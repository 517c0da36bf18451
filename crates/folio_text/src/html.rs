use std::borrow::Cow;

/// Escapes `&`, `<`, `>` and both quote characters so the result is safe in
/// element content and quoted attribute values.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// Decodes named and numeric character references.
pub fn unescape_html(text: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(text)
}
