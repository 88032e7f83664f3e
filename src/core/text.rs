//! Display-string helpers shared across features
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.3.0
//!
//! ## Changelog
//! - 1.0.0: Extracted from duplicate implementations in the reminder and agenda cards

/// Uppercase the first character of a display string (UTF-8 safe).
///
/// The rest of the string is left untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Join items with a separator, switching to a conjunction before the last.
///
/// `join_with_conjunction(&["a", "b", "c"], ", ", " e ")` yields `"a, b e c"`.
/// Zero items yield the empty string; a single item passes through.
pub fn join_with_conjunction(items: &[&str], separator: &str, conjunction: &str) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_string(),
        [head @ .., last] => format!("{}{}{}", head.join(separator), conjunction, last),
    }
}
