//! Normalization of user-supplied text before validation and storage.

/// Trims `value`, returning `None` when nothing but whitespace is left.
pub fn required(value: &str) -> Option<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Trims and uppercases `value`, returning `None` when it is blank.
///
/// Used for plates, chassis numbers and zone letters, which are compared
/// case-insensitively by storing them uppercase.
pub fn required_upper(value: &str) -> Option<String> {
    required(value).map(|v| v.to_uppercase())
}

/// Trims an optional value, collapsing blank strings to `None`.
pub fn optional(value: Option<String>) -> Option<String> {
    value.as_deref().and_then(required)
}
