//! Project parameters and name sanitization.
//! A [`ProjectSpec`] is built once from command-line input and is
//! immutable afterwards; it doubles as the template render context via
//! its `Serialize` implementation.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\-]").unwrap());

/// Parameters describing one generated project.
///
/// Every template placeholder resolves to a field of this struct, so
/// repeated occurrences of the same placeholder (the application id
/// appears in the app build file, the manifest package derivation and
/// the source stub) always render identically.
#[derive(Debug, Serialize)]
pub struct ProjectSpec {
    /// Project directory name; must already be sanitized
    pub project_name: String,
    /// Human-readable app label, substituted verbatim into strings.xml
    pub app_name: String,
    /// Dotted Android application id, e.g. `com.example.app`
    pub application_id: String,
    pub compile_sdk: u32,
    pub min_sdk: u32,
    pub target_sdk: u32,
}

/// Normalizes a free-form string into a safe filesystem name.
///
/// Trims surrounding whitespace, then deletes every character outside
/// `[A-Za-z0-9_-]`. If nothing survives, returns `fallback` unchanged.
/// This function never fails.
///
/// # Arguments
/// * `raw` - User-supplied name
/// * `fallback` - Name to use when sanitization leaves an empty string
pub fn sanitize_name(raw: &str, fallback: &str) -> String {
    let cleaned = UNSAFE_CHARS.replace_all(raw.trim(), "");
    if cleaned.is_empty() {
        fallback.to_string()
    } else {
        cleaned.into_owned()
    }
}
