//! Absolute path value types.
//!
//! [`DirectoryPath`] and [`FilePath`] are immutable values backed by a single
//! canonical string: separator-unified, rooted, and (for directories)
//! always terminated by exactly one separator. The directory/file kind is
//! carried by the concrete type, never re-derived from string shape;
//! [`SystemPath`] is the tagged union for contexts (such as directory
//! enumeration) where the kind is only known at runtime.
//!
//! Filesystem metadata is resolved lazily at most once per value through a
//! single-initialization cell, so the values stay shareable across threads
//! without synchronization.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use std::time::SystemTime;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::path::compare;
use crate::path::normalize::{self, normalize_absolute, SEPARATOR};

/// A memoized snapshot of filesystem metadata for a path value.
///
/// Resolved lazily at most once per instance; a racing redundant probe is
/// benign because both results are equivalent. The snapshot is kind-aware:
/// a directory path whose string names an existing *file* reports
/// `exists() == false`, and vice versa.
#[derive(Debug, Clone)]
pub struct PathMetadata {
    exists: bool,
    file_size: Option<u64>,
    modified: Option<SystemTime>,
    created: Option<SystemTime>,
}

impl PathMetadata {
    fn probe(path: &str, expect_directory: bool) -> Self {
        match std::fs::metadata(Path::new(path)) {
            Ok(meta) if meta.is_dir() == expect_directory => Self {
                exists: true,
                file_size: (!expect_directory).then(|| meta.len()),
                modified: meta.modified().ok(),
                created: meta.created().ok(),
            },
            _ => Self {
                exists: false,
                file_size: None,
                modified: None,
                created: None,
            },
        }
    }

    /// Whether the entry existed (with the expected kind) when probed.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// File size in bytes; `None` for directories or missing entries.
    #[must_use]
    pub fn file_size(&self) -> Option<u64> {
        self.file_size
    }

    /// Last-modified timestamp, when the platform reports one.
    #[must_use]
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    /// Creation timestamp, when the platform reports one.
    #[must_use]
    pub fn created(&self) -> Option<SystemTime> {
        self.created
    }
}

/// An absolute directory path.
///
/// The canonical string begins with the platform root (a single separator on
/// Unix; a drive or UNC prefix on Windows) and always ends with exactly one
/// separator. Construction never fails: any input is coerced into rooted
/// directory form.
///
/// Equality and hashing are case-insensitive on the canonical string and
/// only ever hold between two `DirectoryPath` values; see
/// [`cmp_ordinal`](Self::cmp_ordinal) for the deliberately case-sensitive
/// ordering.
///
/// # Examples
///
/// ```
/// use syspath::DirectoryPath;
///
/// let dir = DirectoryPath::from_string("/data/projects");
/// let same = DirectoryPath::from_string("/Data/Projects/");
/// assert_eq!(dir, same);
/// # #[cfg(unix)]
/// assert_eq!(dir.as_str(), "/data/projects/");
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryPath {
    path: String,
    meta: OnceLock<Arc<PathMetadata>>,
}

/// An absolute file path.
///
/// The canonical string is rooted and never ends with a separator. Unlike
/// [`DirectoryPath`], construction from a string fails unless the input is
/// already OS-rooted; callers holding a possibly-relative string must use
/// [`from_relative_or_absolute`](Self::from_relative_or_absolute).
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use syspath::FilePath;
///
/// let file = FilePath::from_string("/tmp/report.txt").unwrap();
/// assert_eq!(file.name(), Some("report.txt"));
/// assert_eq!(file.extension(), Some("txt"));
/// assert!(FilePath::from_string("report.txt").is_err());
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FilePath {
    path: String,
    meta: OnceLock<Arc<PathMetadata>>,
}

/// A filesystem entry whose kind is only known at runtime.
///
/// This is the tagged counterpart of the static [`DirectoryPath`] /
/// [`FilePath`] split, produced by directory enumeration. Two values of
/// different kinds are never equal, even with textually identical paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SystemPath {
    /// A directory entry.
    Directory(DirectoryPath),
    /// A file entry.
    File(FilePath),
}

impl DirectoryPath {
    /// Build a directory path from any string.
    ///
    /// The input is rooted for the platform and separator-terminated; this
    /// never fails (an empty string yields the root).
    ///
    /// # Examples
    ///
    /// ```
    /// use syspath::DirectoryPath;
    ///
    /// let a = DirectoryPath::from_string("/usr/tmp/1/");
    /// let b = DirectoryPath::from_string("/usr/tmp/1");
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn from_string(path: &str) -> Self {
        Self::from_normalized(normalize_absolute(path, true))
    }

    pub(crate) fn from_normalized(path: String) -> Self {
        Self {
            path,
            meta: OnceLock::new(),
        }
    }

    /// Build a directory path from a string that may be relative, resolving
    /// relative input against the current working directory (read once at
    /// call time, never cached).
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined, or if
    /// the string contains characters invalid for the platform's path syntax
    /// (such input is neither relative nor absolute).
    pub fn from_relative_or_absolute(path: &str) -> Result<Self> {
        let base = Self::current_directory()?;
        Self::from_relative_or_absolute_in(path, &base)
    }

    /// Build a directory path from a string that may be relative, resolving
    /// relative input against `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string contains characters invalid for the
    /// platform's path syntax.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(unix)] {
    /// use syspath::DirectoryPath;
    ///
    /// let base = DirectoryPath::from_string("/srv");
    /// let dir = DirectoryPath::from_relative_or_absolute_in("www/html", &base).unwrap();
    /// assert_eq!(dir.as_str(), "/srv/www/html/");
    ///
    /// let abs = DirectoryPath::from_relative_or_absolute_in("/opt", &base).unwrap();
    /// assert_eq!(abs.as_str(), "/opt/");
    /// # }
    /// ```
    pub fn from_relative_or_absolute_in(path: &str, base: &DirectoryPath) -> Result<Self> {
        if normalize::contains_invalid_chars(path) {
            return Err(Error::InvalidPath {
                path: PathBuf::from(path),
                reason: "contains characters invalid for the platform's path syntax".to_string(),
            });
        }
        if normalize::is_rooted(path) {
            Ok(Self::from_string(path))
        } else {
            Ok(base.directory_named(path))
        }
    }

    /// The current working directory as a directory path.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn current_directory() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::from_string(&cwd.to_string_lossy()))
    }

    /// The platform's temporary-files directory.
    #[must_use]
    pub fn temp_directory() -> Self {
        Self::from_string(&std::env::temp_dir().to_string_lossy())
    }

    /// The canonical string: separator-unified, rooted, separator-terminated.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Consume the value, yielding its canonical string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.path
    }

    /// Borrow the canonical string as a [`std::path::Path`] for interop with
    /// std filesystem APIs.
    #[must_use]
    pub fn as_std_path(&self) -> &Path {
        Path::new(&self.path)
    }

    /// The last name component, or `None` at a root.
    ///
    /// # Examples
    ///
    /// ```
    /// use syspath::DirectoryPath;
    ///
    /// assert_eq!(DirectoryPath::from_string("/usr/tmp/").name(), Some("tmp"));
    /// assert_eq!(DirectoryPath::from_string("/").name(), None);
    /// ```
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        // Skip the trailing separator before searching.
        let interior = &self.path[..self.path.len().saturating_sub(SEPARATOR.len_utf8())];
        let idx = interior.rfind(SEPARATOR)?;
        let name = &interior[idx + SEPARATOR.len_utf8()..];
        (!name.is_empty()).then_some(name)
    }

    /// The parent directory, or `None` at a root.
    ///
    /// A UNC share root (`\\server\share`) and everything at depth ≤ 1 below
    /// `\\server` are non-ascendable: they have no parent, which prevents
    /// walking above the share into an invalid UNC fragment.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(unix)] {
    /// use syspath::DirectoryPath;
    ///
    /// let dir = DirectoryPath::from_string("/usr/tmp");
    /// assert_eq!(dir.parent(), Some(DirectoryPath::from_string("/usr")));
    /// assert_eq!(DirectoryPath::from_string("/").parent(), None);
    /// # }
    /// ```
    #[must_use]
    pub fn parent(&self) -> Option<DirectoryPath> {
        parent_of(&self.path)
    }

    /// Whether the canonical string names a network (UNC) location.
    #[must_use]
    pub fn is_network_path(&self) -> bool {
        is_network(&self.path)
    }

    /// Live existence check against the filesystem: true iff the entry
    /// exists *and* is a directory. Not memoized; see
    /// [`metadata`](Self::metadata) for the cached snapshot.
    #[must_use]
    pub fn exists(&self) -> bool {
        std::fs::metadata(self.as_std_path())
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }

    /// The lazily-resolved, memoized metadata snapshot for this value.
    pub fn metadata(&self) -> &PathMetadata {
        self.meta
            .get_or_init(|| Arc::new(PathMetadata::probe(&self.path, true)))
    }

    /// Ordinal (case-sensitive) comparison of canonical strings.
    ///
    /// Deliberately a different total order than equality: values equal
    /// under the case-insensitive `Eq` may still order apart here. See the
    /// module notes in [`crate::path::compare`].
    #[must_use]
    pub fn cmp_ordinal(&self, other: &Self) -> std::cmp::Ordering {
        self.path.cmp(&other.path)
    }
}

impl FilePath {
    /// The fixed backup-companion postfix appended by the backup-and-replace
    /// convention.
    pub const BAK_POSTFIX: &'static str = ".bak";
    /// The fixed temp-companion postfix.
    pub const TMP_POSTFIX: &'static str = ".~~tmp";

    /// Build a file path from an OS-rooted string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the input is not rooted; callers
    /// holding a possibly-relative string must use
    /// [`from_relative_or_absolute`](Self::from_relative_or_absolute).
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(unix)] {
    /// use syspath::FilePath;
    ///
    /// let file = FilePath::from_string("/usr/tmp/1.tmp").unwrap();
    /// assert_eq!(file.as_str(), "/usr/tmp/1.tmp");
    /// assert!(FilePath::from_string("usr/tmp/1.tmp").is_err());
    /// # }
    /// ```
    pub fn from_string(path: &str) -> Result<Self> {
        if !normalize::is_rooted(path) {
            return Err(Error::InvalidPath {
                path: PathBuf::from(path),
                reason: "path is not rooted".to_string(),
            });
        }
        Ok(Self::from_normalized(normalize_absolute(path, false)))
    }

    pub(crate) fn from_normalized(path: String) -> Self {
        Self {
            path,
            meta: OnceLock::new(),
        }
    }

    /// Build a file path from a string that may be relative, resolving
    /// relative input against the current working directory (read once at
    /// call time, never cached).
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined, if
    /// the string is empty, or if it contains characters invalid for the
    /// platform's path syntax.
    pub fn from_relative_or_absolute(path: &str) -> Result<Self> {
        let base = DirectoryPath::current_directory()?;
        Self::from_relative_or_absolute_in(path, &base)
    }

    /// Build a file path from a string that may be relative, resolving
    /// relative input against `base`.
    ///
    /// # Errors
    ///
    /// Returns an error for empty input, input with characters invalid for
    /// the platform, or non-rooted input that classifies as absolute.
    pub fn from_relative_or_absolute_in(path: &str, base: &DirectoryPath) -> Result<Self> {
        if normalize::contains_invalid_chars(path) {
            return Err(Error::InvalidPath {
                path: PathBuf::from(path),
                reason: "contains characters invalid for the platform's path syntax".to_string(),
            });
        }
        if normalize::is_rooted(path) {
            Self::from_string(path)
        } else {
            base.file_named(path)
        }
    }

    /// The canonical string: separator-unified, rooted, no trailing
    /// separator.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Consume the value, yielding its canonical string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.path
    }

    /// Borrow the canonical string as a [`std::path::Path`] for interop with
    /// std filesystem APIs.
    #[must_use]
    pub fn as_std_path(&self) -> &Path {
        Path::new(&self.path)
    }

    /// The file name (final component), or `None` for a degenerate root
    /// string.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        let idx = self.path.rfind(SEPARATOR)?;
        let name = &self.path[idx + SEPARATOR.len_utf8()..];
        (!name.is_empty()).then_some(name)
    }

    /// The extension without its dot, or `None` if the name has none.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        let name = self.name()?;
        match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
            _ => None,
        }
    }

    /// The file name with its extension (and dot) removed.
    #[must_use]
    pub fn file_stem(&self) -> Option<&str> {
        let name = self.name()?;
        match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(stem),
            _ => Some(name),
        }
    }

    /// The containing directory, or `None` for a degenerate root string.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(unix)] {
    /// use syspath::{DirectoryPath, FilePath};
    ///
    /// let file = FilePath::from_string("/temp/1.tmp").unwrap();
    /// assert_eq!(file.parent(), Some(DirectoryPath::from_string("/temp")));
    /// # }
    /// ```
    #[must_use]
    pub fn parent(&self) -> Option<DirectoryPath> {
        parent_of(&self.path)
    }

    /// Whether the canonical string names a network (UNC) location.
    #[must_use]
    pub fn is_network_path(&self) -> bool {
        is_network(&self.path)
    }

    /// Live existence check: true iff the entry exists *and* is a file.
    #[must_use]
    pub fn exists(&self) -> bool {
        std::fs::metadata(self.as_std_path())
            .map(|m| m.is_file())
            .unwrap_or(false)
    }

    /// The lazily-resolved, memoized metadata snapshot for this value.
    pub fn metadata(&self) -> &PathMetadata {
        self.meta
            .get_or_init(|| Arc::new(PathMetadata::probe(&self.path, false)))
    }

    /// Ordinal (case-sensitive) comparison of canonical strings; the
    /// intentional counterpart to the case-insensitive `Eq`.
    #[must_use]
    pub fn cmp_ordinal(&self, other: &Self) -> std::cmp::Ordering {
        self.path.cmp(&other.path)
    }

    /// Append a postfix to the canonical string, yielding a sibling file.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(unix)] {
    /// use syspath::FilePath;
    ///
    /// let file = FilePath::from_string("/data/db.sqlite").unwrap();
    /// assert_eq!(file.postfix(".bak").as_str(), "/data/db.sqlite.bak");
    /// # }
    /// ```
    #[must_use]
    pub fn postfix(&self, postfix: &str) -> FilePath {
        FilePath::from_normalized(normalize_absolute(
            &format!("{}{postfix}", self.path),
            false,
        ))
    }

    /// The backup companion: the canonical string with `.bak` appended.
    #[must_use]
    pub fn postfix_bak(&self) -> FilePath {
        self.postfix(Self::BAK_POSTFIX)
    }

    /// The temp companion: the canonical string with `.~~tmp` appended.
    #[must_use]
    pub fn postfix_tmp(&self) -> FilePath {
        self.postfix(Self::TMP_POSTFIX)
    }

    /// Insert a prefix before the file name, yielding a sibling file.
    #[must_use]
    pub fn prefix(&self, prefix: &str) -> FilePath {
        match self.path.rfind(SEPARATOR) {
            Some(idx) => {
                let split = idx + SEPARATOR.len_utf8();
                FilePath::from_normalized(format!(
                    "{}{prefix}{}",
                    &self.path[..split],
                    &self.path[split..]
                ))
            }
            None => FilePath::from_normalized(normalize_absolute(
                &format!("{prefix}{}", self.path),
                false,
            )),
        }
    }

    /// Replace the extension (dot optional in `extension`).
    #[must_use]
    pub fn with_extension(&self, extension: &str) -> FilePath {
        let ext = extension.trim_start_matches('.');
        let replaced = Path::new(&self.path).with_extension(ext);
        FilePath::from_normalized(normalize_absolute(&replaced.to_string_lossy(), false))
    }

    /// Drop the extension entirely.
    #[must_use]
    pub fn without_extension(&self) -> FilePath {
        self.with_extension("")
    }

    /// Append the extension unless the file already carries it
    /// (case-insensitive).
    #[must_use]
    pub fn ensure_extension(&self, extension: &str) -> FilePath {
        let wanted = extension.trim_start_matches('.');
        match self.extension() {
            Some(current) if compare::eq_ignore_case(current, wanted) => self.clone(),
            _ => self.postfix(&format!(".{wanted}")),
        }
    }
}

impl SystemPath {
    /// Reconstruct a typed entry from an interchange string, classifying by
    /// the trailing-separator convention of the canonical form.
    ///
    /// # Errors
    ///
    /// Returns an error if the string classifies as a file but is not
    /// rooted.
    pub fn from_canonical(path: &str) -> Result<Self> {
        if path.ends_with(SEPARATOR) {
            Ok(Self::Directory(DirectoryPath::from_string(path)))
        } else {
            Ok(Self::File(FilePath::from_string(path)?))
        }
    }

    /// The canonical string of the underlying value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Directory(d) => d.as_str(),
            Self::File(f) => f.as_str(),
        }
    }

    /// The last name component of the underlying value.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Directory(d) => d.name(),
            Self::File(f) => f.name(),
        }
    }

    /// Live, kind-aware existence check.
    #[must_use]
    pub fn exists(&self) -> bool {
        match self {
            Self::Directory(d) => d.exists(),
            Self::File(f) => f.exists(),
        }
    }

    /// Whether the entry is a directory.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory(_))
    }

    /// Whether the entry is a file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }
}

/// Parent computation shared by both absolute types, including the UNC
/// non-ascendable-root rule.
fn parent_of(canonical: &str) -> Option<DirectoryPath> {
    let full = normalize_absolute(canonical, false);
    // The bare platform root keeps its single separator after stripping;
    // re-rooting its empty prefix would yield the root itself forever.
    if full.len() == SEPARATOR.len_utf8() && full.starts_with(SEPARATOR) {
        return None;
    }
    let idx = full.rfind(SEPARATOR)?;
    if is_network(&full) {
        if idx < 2 * SEPARATOR.len_utf8() {
            return None;
        }
        // \\server\share itself is a root: its only interior separator is
        // the one we just found.
        let interior = &full[2 * SEPARATOR.len_utf8()..];
        if interior.find(SEPARATOR).map(|i| i + 2 * SEPARATOR.len_utf8()) == Some(idx) {
            return None;
        }
    }
    Some(DirectoryPath::from_string(&full[..idx]))
}

fn is_network(canonical: &str) -> bool {
    let mut chars = canonical.chars();
    chars.next() == Some(SEPARATOR) && chars.next() == Some(SEPARATOR)
}

impl PartialEq for DirectoryPath {
    fn eq(&self, other: &Self) -> bool {
        compare::eq_ignore_case(&self.path, &other.path)
    }
}

impl Eq for DirectoryPath {}

impl Hash for DirectoryPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        compare::hash_ignore_case(&self.path, state);
    }
}

impl fmt::Display for DirectoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl PartialEq for FilePath {
    fn eq(&self, other: &Self) -> bool {
        compare::eq_ignore_case(&self.path, &other.path)
    }
}

impl Eq for FilePath {}

impl Hash for FilePath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        compare::hash_ignore_case(&self.path, state);
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl fmt::Display for SystemPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DirectoryPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.path)
    }
}

impl<'de> Deserialize<'de> for DirectoryPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_string(&raw))
    }
}

impl Serialize for FilePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.path)
    }
}

impl<'de> Deserialize<'de> for FilePath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_string(&raw).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_directory_canonical_form() {
        let sep = SEPARATOR;
        let dir = DirectoryPath::from_string(&format!("{sep}usr{sep}tmp"));
        assert!(dir.as_str().ends_with(sep));
        assert_eq!(dir, DirectoryPath::from_string(&format!("{sep}usr{sep}tmp{sep}")));
    }

    #[test]
    fn test_directory_hash_trailing_and_case_insensitive() {
        assert_eq!(
            hash_of(&DirectoryPath::from_string("D:/level0")),
            hash_of(&DirectoryPath::from_string("D:/level0/"))
        );
        assert_eq!(
            hash_of(&DirectoryPath::from_string("D:/A/level0")),
            hash_of(&DirectoryPath::from_string("D:/a/level0"))
        );
        assert_eq!(
            hash_of(&DirectoryPath::from_string("D:/leVel0")),
            hash_of(&DirectoryPath::from_string("D:/level0"))
        );
    }

    #[test]
    fn test_equality_case_insensitive_with_ordinal_asymmetry() {
        let lower = DirectoryPath::from_string("/a/level0");
        let upper = DirectoryPath::from_string("/A/level0");
        assert_eq!(lower, upper);
        assert_eq!(hash_of(&lower), hash_of(&upper));
        assert_ne!(lower.cmp_ordinal(&upper), std::cmp::Ordering::Equal);
        assert_eq!(lower.cmp_ordinal(&lower.clone()), std::cmp::Ordering::Equal);
    }

    #[cfg(unix)]
    #[test]
    fn test_file_from_string_requires_rooted() {
        let file = FilePath::from_string("/usr/tmp/1.tmp").unwrap();
        assert_eq!(file.as_str(), "/usr/tmp/1.tmp");
        assert_eq!(file.name(), Some("1.tmp"));
        assert_eq!(file.extension(), Some("tmp"));
        assert_eq!(file.file_stem(), Some("1"));
        assert!(FilePath::from_string("usr/tmp/1.tmp").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_file_parent() {
        let file = FilePath::from_string("/temp/1.tmp").unwrap();
        assert_eq!(file.parent(), Some(DirectoryPath::from_string("/temp")));
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_name_and_parent() {
        let dir = DirectoryPath::from_string("/usr/tmp/1/");
        assert_eq!(dir.name(), Some("1"));
        assert_eq!(dir.parent(), Some(DirectoryPath::from_string("/usr/tmp")));
        let root = DirectoryPath::from_string("/");
        assert_eq!(root.name(), None);
        assert_eq!(root.parent(), None);
        // Walking up from depth one lands on the root.
        assert_eq!(
            DirectoryPath::from_string("/usr").parent(),
            Some(DirectoryPath::from_string("/"))
        );
    }

    #[test]
    fn test_parent_chain_terminates() {
        let sep = SEPARATOR;
        assert_eq!(DirectoryPath::from_string(&sep.to_string()).parent(), None);
        let mut cursor = Some(DirectoryPath::from_string(&format!("{sep}a{sep}b{sep}c")));
        for _ in 0..8 {
            match cursor {
                Some(d) => cursor = d.parent(),
                None => break,
            }
        }
        assert_eq!(cursor, None);
    }

    #[cfg(windows)]
    #[test]
    fn test_unc_root_has_no_parent() {
        let share = DirectoryPath::from_string(r"\\server\share");
        assert!(share.is_network_path());
        assert_eq!(share.parent(), None);
        assert_eq!(DirectoryPath::from_string(r"\\server").parent(), None);
        let below = DirectoryPath::from_string(r"\\server\share\x");
        assert_eq!(below.parent(), Some(share));
    }

    #[cfg(unix)]
    #[test]
    fn test_unix_paths_are_not_network() {
        assert!(!DirectoryPath::from_string("/srv/share").is_network_path());
    }

    #[test]
    fn test_system_path_kinds_never_equal() {
        let dir = SystemPath::Directory(DirectoryPath::from_string("/temp/tmp1"));
        let sep = SEPARATOR;
        let file = SystemPath::File(FilePath::from_normalized(format!("{sep}temp{sep}tmp1")));
        assert_ne!(dir, file);
        assert!(dir.is_directory());
        assert!(file.is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_system_path_from_canonical() {
        assert!(SystemPath::from_canonical("/a/b/").unwrap().is_directory());
        assert!(SystemPath::from_canonical("/a/b").unwrap().is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_file_name_surgery() {
        let file = FilePath::from_string("/data/db.sqlite").unwrap();
        assert_eq!(file.postfix_bak().as_str(), "/data/db.sqlite.bak");
        assert_eq!(file.postfix_tmp().as_str(), "/data/db.sqlite.~~tmp");
        assert_eq!(file.prefix("old-").as_str(), "/data/old-db.sqlite");
        assert_eq!(file.with_extension("db").as_str(), "/data/db.db");
        assert_eq!(file.with_extension(".db").as_str(), "/data/db.db");
        assert_eq!(file.without_extension().as_str(), "/data/db");
        assert_eq!(file.ensure_extension("SQLITE").as_str(), "/data/db.sqlite");
        assert_eq!(
            file.ensure_extension("txt").as_str(),
            "/data/db.sqlite.txt"
        );
    }

    #[test]
    fn test_metadata_memoized_for_missing_path() {
        let dir = DirectoryPath::from_string("/syspath-test-does-not-exist-1");
        let first = dir.metadata() as *const PathMetadata;
        let second = dir.metadata() as *const PathMetadata;
        assert_eq!(first, second);
        assert!(!dir.metadata().exists());
        assert!(!dir.exists());
    }

    #[test]
    fn test_metadata_snapshot_on_real_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = DirectoryPath::from_string(&tmp.path().to_string_lossy());
        assert!(dir.exists());
        assert!(dir.metadata().exists());
        assert_eq!(dir.metadata().file_size(), None);
    }

    #[test]
    fn test_kind_aware_exists() {
        let tmp = tempfile::tempdir().unwrap();
        let as_file_string = tmp.path().to_string_lossy().into_owned();
        // The entry exists but is a directory, so the file view denies it.
        let file = FilePath::from_normalized(normalize_absolute(&as_file_string, false));
        assert!(!file.exists());
        assert!(!file.metadata().exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_invalid_chars_rejected_by_relative_or_absolute() {
        let base = DirectoryPath::from_string("/srv");
        let err = DirectoryPath::from_relative_or_absolute_in("bad\0name", &base);
        assert!(err.is_err());
        let err = FilePath::from_relative_or_absolute_in("bad\0name", &base);
        assert!(err.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_serde_round_trip() {
        let dir = DirectoryPath::from_string("/data/projects");
        let json = serde_json::to_string(&dir).unwrap();
        assert_eq!(json, "\"/data/projects/\"");
        let back: DirectoryPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dir);

        let file = FilePath::from_string("/data/a.txt").unwrap();
        let json = serde_json::to_string(&file).unwrap();
        let back: FilePath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, file);

        let err: std::result::Result<FilePath, _> = serde_json::from_str("\"not-rooted\"");
        assert!(err.is_err());
    }
}
