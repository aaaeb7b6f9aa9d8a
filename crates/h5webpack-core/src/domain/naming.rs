//! Package-name derivation.
//!
//! npm package names are lowercase and restricted to ASCII letters, digits
//! and `. ( ) ! ~ * ' -`. The generated `package.json` takes its name from
//! the destination directory, so the final path segment is squeezed into
//! that alphabet here.

use std::path::Path;

/// Name used when the destination directory yields nothing usable
/// (e.g. `/`, or a directory called `___`).
pub const FALLBACK_APP_NAME: &str = "hello-world";

/// Derive a package-safe name from the last segment of `path`.
///
/// Every run of disallowed characters becomes a single `-`, leading
/// `-`/`_`/`.` and trailing `-` are stripped, and the result is lowercased.
/// May return an empty string; see [`app_name_or_fallback`].
pub fn create_app_name(path: &Path) -> String {
    let Some(segment) = path.file_name() else {
        return String::new();
    };
    let segment = segment.to_string_lossy();

    let mut squeezed = String::with_capacity(segment.len());
    let mut in_run = false;
    for ch in segment.chars() {
        if is_allowed(ch) {
            squeezed.push(ch);
            in_run = false;
        } else if !in_run {
            squeezed.push('-');
            in_run = true;
        }
    }

    squeezed
        .trim_start_matches(['-', '_', '.'])
        .trim_end_matches('-')
        .to_ascii_lowercase()
}

/// [`create_app_name`], substituting [`FALLBACK_APP_NAME`] for an empty result.
pub fn app_name_or_fallback(path: &Path) -> String {
    let name = create_app_name(path);
    if name.is_empty() {
        FALLBACK_APP_NAME.to_string()
    } else {
        name
    }
}

fn is_allowed(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '.' | '(' | ')' | '!' | '~' | '*' | '\'' | '-')
}
