//! Lenient matching for fixed-vocabulary inputs.

/// Folds a code, label, or `snake_case` spelling to a comparison key.
///
/// `"ToBeOpened"`, `"To Be Opened"` and `"to_be_opened"` all fold to
/// `"tobeopened"`.
pub(crate) fn fold(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Finds the vocabulary entry whose code or label folds to the same key.
pub(crate) fn lookup<T: Copy>(
    value: &str,
    entries: &[T],
    code: impl Fn(T) -> &'static str,
    label: impl Fn(T) -> &'static str,
) -> Option<T> {
    let key = fold(value);
    if key.is_empty() {
        return None;
    }
    entries
        .iter()
        .copied()
        .find(|entry| fold(code(*entry)) == key || fold(label(*entry)) == key)
}
