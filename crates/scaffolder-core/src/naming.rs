//! Package name rules
//!
//! Project directory names double as package names, so they are checked
//! against the npm package-name grammar and normalized when they don't fit.

use regex::Regex;
use std::sync::OnceLock;

/// Optional `@scope/` segment followed by the main segment
fn valid_package_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:@[a-z0-9\-*~][a-z0-9\-*._~]*/)?[a-z0-9\-~][a-z0-9\-._~]*$")
            .expect("Invalid package name regex")
    })
}

fn whitespace_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("Invalid whitespace regex"))
}

fn leading_dot_or_underscore_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[._]").expect("Invalid leading character regex"))
}

/// Runs of characters a normalized name may not contain
fn invalid_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9\-~]+").expect("Invalid character run regex"))
}

fn trailing_slashes_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/+$").expect("Invalid trailing slash regex"))
}

/// Check whether `name` is usable as-is for the `name` field of package.json
pub fn is_valid_package_name(name: &str) -> bool {
    valid_package_name_regex().is_match(name)
}

/// Best-effort conversion of an arbitrary project name into a package name.
///
/// The result is not guaranteed to be valid (an empty or blank input stays
/// empty), so callers must re-check it with
/// [`is_valid_package_name`].
pub fn to_valid_package_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let dashed = whitespace_regex().replace_all(&lowered, "-");
    let stripped = leading_dot_or_underscore_regex().replace(&dashed, "");
    invalid_run_regex().replace_all(&stripped, "-").into_owned()
}

/// Normalize raw directory input: surrounding whitespace and trailing slashes are dropped
pub fn format_target_dir(raw: &str) -> String {
    trailing_slashes_regex().replace(raw.trim(), "").into_owned()
}
