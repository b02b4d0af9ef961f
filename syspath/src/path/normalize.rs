//! Pure path-string normalization.
//!
//! This module provides the canonical-string routine shared by every path
//! type: separator rewriting plus leading/trailing separator enforcement.
//! Nothing here touches the filesystem; [`normalize`] is a total function
//! over all strings.

use std::path::MAIN_SEPARATOR;

/// The canonical separator character for the current platform.
pub const SEPARATOR: char = MAIN_SEPARATOR;

/// The alternate separator rewritten to [`SEPARATOR`] at construction.
///
/// On Windows this is `/`; on Unix the platform has no alternate separator,
/// so the rewrite is a no-op (a backslash is an ordinary name character
/// there).
#[cfg(windows)]
pub const ALT_SEPARATOR: char = '/';
/// The alternate separator rewritten to [`SEPARATOR`] at construction.
///
/// On Windows this is `/`; on Unix the platform has no alternate separator,
/// so the rewrite is a no-op (a backslash is an ordinary name character
/// there).
#[cfg(not(windows))]
pub const ALT_SEPARATOR: char = MAIN_SEPARATOR;

/// Normalize a path string.
///
/// Alternate separators are rewritten to the canonical one, then the string
/// is reduced to its separator-free-at-the-edges body and exactly one
/// leading/trailing separator is applied per flag:
///
/// - `begin_separator = true` ensures exactly one leading separator,
///   `false` strips all leading separators;
/// - `end_separator = true` ensures exactly one trailing separator,
///   `false` strips all trailing separators;
/// - an empty body (empty input, or input that is nothing but separators)
///   yields a single separator if either flag is set, else the empty string.
///
/// Interior separator runs are preserved; this routine shapes the edges
/// only. It never fails and performs no I/O.
///
/// # Examples
///
/// ```
/// use syspath::path::normalize::{normalize, SEPARATOR};
///
/// let sep = SEPARATOR;
/// assert_eq!(normalize("temp", false, true), format!("temp{sep}"));
/// assert_eq!(normalize(&format!("{sep}temp{sep}"), false, false), "temp");
/// assert_eq!(normalize("", true, false), sep.to_string());
/// assert_eq!(normalize("", false, false), "");
/// ```
#[must_use]
pub fn normalize(raw: &str, begin_separator: bool, end_separator: bool) -> String {
    let rewritten = if ALT_SEPARATOR == SEPARATOR {
        raw.to_owned()
    } else {
        raw.replace(ALT_SEPARATOR, &SEPARATOR.to_string())
    };

    let body = rewritten.trim_matches(SEPARATOR);
    if body.is_empty() {
        return if begin_separator || end_separator {
            SEPARATOR.to_string()
        } else {
            String::new()
        };
    }

    let mut out = String::with_capacity(body.len() + 2);
    if begin_separator {
        out.push(SEPARATOR);
    }
    out.push_str(body);
    if end_separator {
        out.push(SEPARATOR);
    }
    out
}

/// Normalize a string that is assumed to name an absolute location.
///
/// This is the rooted wrapper around [`normalize`] used by the absolute path
/// types. On Unix the result always carries exactly one leading separator.
/// On Windows drive (`C:`) and UNC (`\\server`) prefixes are preserved
/// verbatim and only the remainder is normalized.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use syspath::path::normalize::normalize_absolute;
///
/// assert_eq!(normalize_absolute("usr/tmp", true), "/usr/tmp/");
/// assert_eq!(normalize_absolute("/usr/tmp/", false), "/usr/tmp");
/// # }
/// ```
#[must_use]
pub fn normalize_absolute(raw: &str, end_separator: bool) -> String {
    #[cfg(windows)]
    {
        let rewritten = raw.replace(ALT_SEPARATOR, &SEPARATOR.to_string());
        if rewritten.as_bytes().starts_with(b"\\\\") {
            // UNC share: keep the double-separator root intact.
            let rest = normalize(&rewritten[2..], false, end_separator);
            return format!("{SEPARATOR}{SEPARATOR}{rest}");
        }
        normalize(&rewritten, false, end_separator)
    }
    #[cfg(not(windows))]
    {
        normalize(raw, true, end_separator)
    }
}

/// Test whether a string is an absolute path by the library's recognition
/// rule: a two-character drive prefix (`<letter>:`) or a double leading
/// backslash (UNC). Any other string is not absolute; note that on Unix
/// this rule deliberately does not consider `/usr` absolute; it mirrors the
/// interchange-format convention, not the OS root test (see [`is_relative`]
/// for the classification actually used by the relative-or-absolute entry
/// points).
///
/// # Examples
///
/// ```
/// use syspath::path::normalize::is_absolute;
///
/// assert!(!is_absolute("1"));
/// assert!(is_absolute("c:"));
/// assert!(is_absolute(r"c:\temp\"));
/// assert!(is_absolute(r"\\"));
/// assert!(is_absolute(r"\\server\video"));
/// ```
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    let bytes = path.as_bytes();
    if bytes.len() < 2 {
        return false;
    }
    if bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        return true;
    }
    bytes[0] == b'\\' && bytes[1] == b'\\'
}

/// Test whether a string can be processed as a relative path: it must
/// contain no characters invalid for the platform's path syntax and must
/// not be OS-rooted. A string failing the character test is neither
/// relative nor absolute; the relative-or-absolute entry points reject it.
///
/// # Examples
///
/// ```
/// use syspath::path::normalize::is_relative;
///
/// assert!(is_relative("src/lib.rs"));
/// assert!(!is_relative("bad\0name"));
/// # #[cfg(unix)]
/// assert!(!is_relative("/usr/tmp"));
/// ```
#[must_use]
pub fn is_relative(path: &str) -> bool {
    !contains_invalid_chars(path) && !is_rooted(path)
}

/// OS-rooted test: leading `/` on Unix; drive prefix, UNC prefix or a
/// leading separator on Windows.
pub(crate) fn is_rooted(path: &str) -> bool {
    #[cfg(windows)]
    {
        let bytes = path.as_bytes();
        if bytes.first().is_some_and(|&b| b == b'\\' || b == b'/') {
            return true;
        }
        bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
    }
    #[cfg(not(windows))]
    {
        path.starts_with('/')
    }
}

/// Characters that disqualify a string from being a path at all.
pub(crate) fn contains_invalid_chars(path: &str) -> bool {
    #[cfg(windows)]
    {
        path.chars()
            .any(|c| c.is_control() || matches!(c, '<' | '>' | '"' | '|' | '?' | '*'))
    }
    #[cfg(not(windows))]
    {
        path.contains('\0')
    }
}
