//! String helpers.

/// Whitespace as JavaScript's `\s` and `String.prototype.trim` see it.
///
/// Unicode `White_Space` minus U+0085 (NEL), plus U+FEFF (BOM).
pub(crate) fn is_js_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Returns true if `s` reads the same backwards, ignoring case and whitespace.
///
/// ## Example
/// ```rust
/// use cartkit_core::utils::is_palindrome;
///
/// assert!(is_palindrome("A man a plan a canal Panama"));
/// assert!(is_palindrome(""));
/// assert!(!is_palindrome("hello"));
/// ```
pub fn is_palindrome(s: &str) -> bool {
    let clean: Vec<char> = s
        .to_lowercase()
        .chars()
        .filter(|c| !is_js_whitespace(*c))
        .collect();

    clean.iter().eq(clean.iter().rev())
}

/// Upper-cases the first character and lower-cases the rest.
///
/// `None` and `""` both give `""`.
///
/// ## Example
/// ```rust
/// use cartkit_core::utils::capitalize;
///
/// assert_eq!(capitalize("hELLO"), "Hello");
/// assert_eq!(capitalize(None), "");
/// ```
pub fn capitalize<'a>(s: impl Into<Option<&'a str>>) -> String {
    let Some(s) = s.into() else {
        return String::new();
    };

    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out: String = first.to_uppercase().collect();
    out.push_str(&chars.as_str().to_lowercase());
    out
}
