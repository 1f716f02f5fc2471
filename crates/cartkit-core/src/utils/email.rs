//! # Email Syntax Validation
//!
//! A fixed sequence of cheap checks. The first one that fails decides.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  input                                                                  │
//! │    │                                                                    │
//! │    ├─ 1. absent / blank after trim ───────────────────────────► false   │
//! │    ├─ 2. '@' count in raw input != 1 ─────────────────────────► false   │
//! │    ├─ 3. trimmed value fails EMAIL_PATTERN ───────────────────► false   │
//! │    ├─ 4. split local@domain                                             │
//! │    ├─ 5. local  > 64 bytes ───────────────────────────────────► false   │
//! │    ├─ 6. domain > 253 bytes ──────────────────────────────────► false   │
//! │    ├─ 7. local starts/ends with '.' ──────────────────────────► false   │
//! │    ├─ 8. local contains ".." ─────────────────────────────────► false   │
//! │    ├─ 9. domain label empty or starts/ends with '-' ──────────► false   │
//! │    └─ 10. ────────────────────────────────────────────────────► true    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Surrounding whitespace is tolerated; embedded whitespace fails step 3.
//! After step 3 the value is ASCII, so byte lengths are character counts.

use regex::Regex;
use std::sync::OnceLock;

use super::text::is_js_whitespace;

/// Maximum length of the part before `@`.
pub const MAX_LOCAL_PART_LEN: usize = 64;

/// Maximum length of the part after `@`.
pub const MAX_DOMAIN_LEN: usize = 253;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Returns true if `email` passes every syntax check.
///
/// ## Example
/// ```rust
/// use cartkit_core::utils::validate_email;
///
/// assert!(validate_email("test@example.com"));
/// assert!(validate_email("  user@example.com  "));
/// assert!(!validate_email("user..name@example.com"));
/// assert!(!validate_email("user@-example.com"));
/// assert!(!validate_email(None));
/// ```
pub fn validate_email<'a>(email: impl Into<Option<&'a str>>) -> bool {
    let Some(raw) = email.into() else {
        return false;
    };

    let email = raw.trim_matches(is_js_whitespace);
    if email.is_empty() {
        return false;
    }

    if raw.matches('@').count() != 1 {
        return false;
    }

    if !email_regex().is_match(email) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.len() > MAX_LOCAL_PART_LEN || domain.len() > MAX_DOMAIN_LEN {
        return false;
    }

    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }

    domain
        .split('.')
        .all(|label| !label.is_empty() && !label.starts_with('-') && !label.ends_with('-'))
}
