//! Relative-path resolution and typed composition.
//!
//! Two directions live here: composing an absolute path from a base
//! directory plus a relative displacement, and recovering the displacement
//! between two absolute paths. Displacement recovery works segment-wise on
//! the canonical strings and never touches the filesystem; on Windows the
//! segment match folds case, mirroring the equality semantics of the value
//! types.

use crate::error::Result;
use crate::path::absolute::{DirectoryPath, FilePath};
#[cfg(windows)]
use crate::path::compare;
use crate::path::normalize::{self, normalize_absolute, SEPARATOR};
use crate::path::relative::{RelativeDirectoryPath, RelativeFilePath};

impl DirectoryPath {
    /// Append a relative directory displacement below this directory.
    ///
    /// Appending the root displacement is an identity.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(unix)] {
    /// use syspath::{DirectoryPath, RelativeDirectoryPath};
    ///
    /// let base = DirectoryPath::from_string("/srv");
    /// let rel = RelativeDirectoryPath::from_string("www/html");
    /// assert_eq!(base.directory(&rel).as_str(), "/srv/www/html/");
    /// assert_eq!(base.directory(&RelativeDirectoryPath::root()), base);
    /// # }
    /// ```
    #[must_use]
    pub fn directory(&self, rel: &RelativeDirectoryPath) -> DirectoryPath {
        if rel.is_root() {
            self.clone()
        } else {
            DirectoryPath::from_normalized(format!("{}{}", self.as_str(), rel.as_str()))
        }
    }

    /// Append a directory component (or slash-separated run of components)
    /// by name.
    #[must_use]
    pub fn directory_named(&self, name: &str) -> DirectoryPath {
        self.directory(&RelativeDirectoryPath::from_string(name))
    }

    /// Append a relative file displacement below this directory.
    #[must_use]
    pub fn file(&self, rel: &RelativeFilePath) -> FilePath {
        FilePath::from_normalized(format!("{}{}", self.as_str(), rel.as_str()))
    }

    /// Append a file component by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or separator-only.
    pub fn file_named(&self, name: &str) -> Result<FilePath> {
        Ok(self.file(&RelativeFilePath::from_string(name)?))
    }

    /// The displacement that leads from `base` to this directory.
    ///
    /// Equal directories yield the root displacement; a target outside
    /// `base` ascends with `..` components. The inverse of
    /// [`directory`](Self::directory) whenever this directory lies below
    /// `base`.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(unix)] {
    /// use syspath::DirectoryPath;
    ///
    /// let base = DirectoryPath::from_string("/usr/tmp");
    /// let below = DirectoryPath::from_string("/usr/tmp/test/abc");
    /// assert_eq!(below.relative_to(&base).as_str(), "test/abc/");
    ///
    /// let sibling = DirectoryPath::from_string("/usr/abc");
    /// assert_eq!(sibling.relative_to(&base).as_str(), "../abc/");
    /// # }
    /// ```
    #[must_use]
    pub fn relative_to(&self, base: &DirectoryPath) -> RelativeDirectoryPath {
        let rel = relative_between(base.as_str(), self.as_str());
        if rel == "." {
            RelativeDirectoryPath::root()
        } else {
            RelativeDirectoryPath::from_string(&rel)
        }
    }

    /// Like [`relative_to`](Self::relative_to), also reporting whether this
    /// directory lies at or below `base`.
    ///
    /// Containment is judged textually on the canonical strings: a base
    /// whose full string reappears in the middle of the target also counts
    /// as containing it.
    #[must_use]
    pub fn relative_to_with_parent(&self, base: &DirectoryPath) -> (RelativeDirectoryPath, bool) {
        let rel = self.relative_to(base);
        let is_parent = rel.is_root() || contains_ignoring_platform_case(self.as_str(), base.as_str());
        (rel, is_parent)
    }
}

impl FilePath {
    /// The displacement that leads from `base` to this file.
    ///
    /// The inverse of [`DirectoryPath::file`] whenever this file lies below
    /// `base`.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(unix)] {
    /// use syspath::{DirectoryPath, FilePath};
    ///
    /// let base = DirectoryPath::from_string("/usr/tmp");
    /// let file = FilePath::from_string("/usr/tmp/test/1.tmp").unwrap();
    /// assert_eq!(file.relative_to(&base).as_str(), "test/1.tmp");
    /// # }
    /// ```
    #[must_use]
    pub fn relative_to(&self, base: &DirectoryPath) -> RelativeFilePath {
        RelativeFilePath::from_normalized(relative_between(base.as_str(), self.as_str()))
    }

    /// Like [`relative_to`](Self::relative_to), also reporting whether this
    /// file lies below `base`, judged textually as in
    /// [`DirectoryPath::relative_to_with_parent`].
    #[must_use]
    pub fn relative_to_with_parent(&self, base: &DirectoryPath) -> (RelativeFilePath, bool) {
        let rel = self.relative_to(base);
        let is_parent = contains_ignoring_platform_case(self.as_str(), base.as_str());
        (rel, is_parent)
    }
}

/// Whether two path strings name the same location once both are fully
/// qualified.
///
/// Relative input is resolved against the current working directory (read
/// at call time), `.` and `..` components are folded with clamping at the
/// root, and the qualified strings are compared with the platform's case
/// rule: sensitive on Unix, insensitive on Windows.
///
/// # Errors
///
/// Returns an error only when relative input is present and the working
/// directory cannot be determined.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use syspath::path_equals;
///
/// assert!(path_equals("/a/b/../c", "/a/c").unwrap());
/// assert!(path_equals("/a/./b/", "/a/b").unwrap());
/// assert!(!path_equals("/a/b", "/a/c").unwrap());
/// # }
/// ```
pub fn path_equals(a: &str, b: &str) -> Result<bool> {
    let qa = fully_qualify(a)?;
    let qb = fully_qualify(b)?;
    Ok(qualified_eq(&qa, &qb))
}

#[cfg(windows)]
fn qualified_eq(a: &str, b: &str) -> bool {
    compare::eq_ignore_case(a, b)
}

#[cfg(not(windows))]
fn qualified_eq(a: &str, b: &str) -> bool {
    a == b
}

/// Root a possibly-relative string against the working directory and fold
/// `.` / `..` components, clamping ascension at the root.
fn fully_qualify(raw: &str) -> Result<String> {
    let rooted = if normalize::is_rooted(raw) {
        normalize_absolute(raw, false)
    } else {
        let cwd = std::env::current_dir()?;
        normalize_absolute(
            &format!("{}{SEPARATOR}{raw}", cwd.to_string_lossy()),
            false,
        )
    };
    Ok(fold_components(&rooted))
}

fn fold_components(rooted: &str) -> String {
    let (prefix, body, floor) = split_anchor(rooted);
    let mut stack: Vec<&str> = Vec::new();
    for segment in body.split(SEPARATOR).filter(|s| !s.is_empty()) {
        match segment {
            "." => {}
            ".." => {
                if stack.len() > floor {
                    stack.pop();
                }
            }
            other => stack.push(other),
        }
    }
    let joined = stack.join(&SEPARATOR.to_string());
    format!("{prefix}{joined}")
}

/// Split the canonical rooted string into its non-foldable anchor, the
/// foldable body, and how many leading body segments `..` may never pop.
#[cfg(windows)]
fn split_anchor(rooted: &str) -> (String, &str, usize) {
    let bytes = rooted.as_bytes();
    if bytes.starts_with(b"\\\\") {
        // \\server\share is the non-ascendable root.
        (r"\\".to_string(), &rooted[2..], 2)
    } else if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        let after = rooted[2..].trim_start_matches(SEPARATOR);
        (format!("{}{SEPARATOR}", &rooted[..2]), after, 0)
    } else {
        (SEPARATOR.to_string(), rooted.trim_start_matches(SEPARATOR), 0)
    }
}

#[cfg(not(windows))]
fn split_anchor(rooted: &str) -> (String, &str, usize) {
    (
        SEPARATOR.to_string(),
        rooted.trim_start_matches(SEPARATOR),
        0,
    )
}

/// Segment-wise displacement from `root` (a directory canonical string) to
/// `target` (any canonical string). Returns `.` for equal paths; when the
/// two share no segments on a platform with multiple roots, the target comes
/// back verbatim because no `..` chain can reach it.
fn relative_between(root: &str, target: &str) -> String {
    let root_segments: Vec<&str> = root.split(SEPARATOR).filter(|s| !s.is_empty()).collect();
    let target_segments: Vec<&str> = target.split(SEPARATOR).filter(|s| !s.is_empty()).collect();

    let common = root_segments
        .iter()
        .zip(&target_segments)
        .take_while(|(a, b)| segment_eq(a, b))
        .count();

    if cfg!(windows) && common == 0 && !root_segments.is_empty() && !target_segments.is_empty() {
        return target.to_string();
    }

    let mut parts: Vec<&str> = Vec::new();
    for _ in common..root_segments.len() {
        parts.push("..");
    }
    parts.extend(&target_segments[common..]);
    if parts.is_empty() {
        return ".".to_string();
    }
    parts.join(&SEPARATOR.to_string())
}

#[cfg(windows)]
fn segment_eq(a: &str, b: &str) -> bool {
    compare::eq_ignore_case(a, b)
}

#[cfg(not(windows))]
fn segment_eq(a: &str, b: &str) -> bool {
    a == b
}

#[cfg(windows)]
fn contains_ignoring_platform_case(haystack: &str, needle: &str) -> bool {
    let h: String = haystack.chars().flat_map(char::to_lowercase).collect();
    let n: String = needle.chars().flat_map(char::to_lowercase).collect();
    h.contains(&n)
}

#[cfg(not(windows))]
fn contains_ignoring_platform_case(haystack: &str, needle: &str) -> bool {
    haystack.contains(needle)
}
