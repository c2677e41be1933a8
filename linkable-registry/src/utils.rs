//! Utility functions for the linkable registry.

/// Case-insensitive substring test. An empty needle matches every value.
///
/// # Example
///
/// ```
/// use linkable_registry::utils::icontains;
///
/// assert!(icontains("Annual REPORT", "report"));
/// assert!(icontains("anything", ""));
/// ```
pub fn icontains(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Title-case a human readable name: the first letter of every word is
/// upper-cased and the rest lower-cased.
///
/// Word boundaries are any non-alphabetic character, so `"filer file"`
/// becomes `"Filer File"` and `"o'neil"` becomes `"O'Neil"`.
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut at_word_start = true;

    for c in value.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(c);
            at_word_start = true;
        }
    }

    result
}
