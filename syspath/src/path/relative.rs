//! Relative path value types.
//!
//! [`RelativeDirectoryPath`] and [`RelativeFilePath`] are the displacement
//! counterparts to the absolute types: they carry a canonical string with no
//! leading separator, suitable for appending below some
//! [`DirectoryPath`](crate::DirectoryPath). A relative directory string is
//! either empty (the self-referencing root displacement) or
//! separator-terminated; a relative file string never ends with a separator
//! and is never empty.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::path::compare;
use crate::path::normalize::{normalize, SEPARATOR};

/// A relative directory displacement.
///
/// The canonical form never starts with a separator and, unless it is the
/// empty root displacement, always ends with one. Ascending steps (`..`)
/// are ordinary components here; nothing collapses them.
///
/// # Examples
///
/// ```
/// use syspath::RelativeDirectoryPath;
///
/// let rel = RelativeDirectoryPath::from_string("test/abc");
/// assert_eq!(rel, RelativeDirectoryPath::from_string("/test/abc/"));
/// assert!(RelativeDirectoryPath::root().is_root());
/// ```
#[derive(Debug, Clone)]
pub struct RelativeDirectoryPath {
    path: String,
}

/// A relative file displacement.
///
/// The canonical form never starts or ends with a separator and is never
/// empty.
#[derive(Debug, Clone)]
pub struct RelativeFilePath {
    path: String,
}

impl RelativeDirectoryPath {
    /// The empty displacement: appending it to a directory yields that
    /// directory unchanged.
    #[must_use]
    pub fn root() -> Self {
        Self {
            path: String::new(),
        }
    }

    /// Whether this is the empty root displacement.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Build a relative directory displacement from any string.
    ///
    /// Leading separators are stripped, a trailing separator is ensured, and
    /// separator-only or empty input collapses to the root displacement.
    /// This never fails.
    #[must_use]
    pub fn from_string(path: &str) -> Self {
        let normalized = normalize(path, false, true);
        // A separator-only result means the body was empty: that is the root
        // displacement, whose canonical form is the empty string.
        if normalized.chars().all(|c| c == SEPARATOR) {
            Self::root()
        } else {
            Self { path: normalized }
        }
    }

    pub(crate) fn from_normalized(path: String) -> Self {
        Self { path }
    }

    /// The canonical string: empty, or separator-terminated with no leading
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

    /// Append a further directory displacement below this one.
    ///
    /// Appending the root displacement on either side is an identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use syspath::RelativeDirectoryPath;
    ///
    /// let a = RelativeDirectoryPath::from_string("test");
    /// let b = RelativeDirectoryPath::from_string("abc");
    /// assert_eq!(a.directory(&b), RelativeDirectoryPath::from_string("test/abc"));
    /// assert_eq!(a.directory(&RelativeDirectoryPath::root()), a);
    /// ```
    #[must_use]
    pub fn directory(&self, sub: &RelativeDirectoryPath) -> RelativeDirectoryPath {
        if sub.is_root() {
            self.clone()
        } else if self.is_root() {
            sub.clone()
        } else {
            RelativeDirectoryPath::from_normalized(format!("{}{}", self.path, sub.path))
        }
    }

    /// Append a directory component by name.
    #[must_use]
    pub fn directory_named(&self, name: &str) -> RelativeDirectoryPath {
        self.directory(&RelativeDirectoryPath::from_string(name))
    }

    /// Append a file displacement below this directory displacement.
    #[must_use]
    pub fn file(&self, sub: &RelativeFilePath) -> RelativeFilePath {
        RelativeFilePath::from_normalized(format!("{}{}", self.path, sub.path))
    }

    /// Append a file component by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPath`] if the name is empty or separator-only.
    pub fn file_named(&self, name: &str) -> Result<RelativeFilePath> {
        Ok(self.file(&RelativeFilePath::from_string(name)?))
    }
}

impl RelativeFilePath {
    /// Build a relative file displacement from a string.
    ///
    /// Leading and trailing separators are stripped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPath`] if the input is empty or separator-only:
    /// there is no file counterpart to the root displacement.
    pub fn from_string(path: &str) -> Result<Self> {
        let normalized = normalize(path, false, false);
        if normalized.is_empty() {
            return Err(Error::EmptyPath {
                context: "relative file path".to_string(),
            });
        }
        Ok(Self { path: normalized })
    }

    pub(crate) fn from_normalized(path: String) -> Self {
        Self { path }
    }

    /// The canonical string: non-empty, no leading or trailing separator.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Consume the value, yielding its canonical string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.path
    }

    /// The file name: the final component of the displacement.
    #[must_use]
    pub fn name(&self) -> &str {
        match self.path.rfind(SEPARATOR) {
            Some(idx) => &self.path[idx + SEPARATOR.len_utf8()..],
            None => &self.path,
        }
    }

    /// A fresh, process-unique temporary file name.
    ///
    /// The name combines a millisecond wall-clock stamp, the sub-second
    /// nanosecond remainder, and a process-wide counter, so concurrent calls
    /// within the same millisecond still produce distinct names.
    ///
    /// # Examples
    ///
    /// ```
    /// use syspath::RelativeFilePath;
    ///
    /// let a = RelativeFilePath::temp();
    /// let b = RelativeFilePath::temp();
    /// assert_ne!(a, b);
    /// assert!(a.name().ends_with(".tmp"));
    /// ```
    #[must_use]
    pub fn temp() -> Self {
        static SEQ: AtomicU64 = AtomicU64::new(0);
        let now = chrono::Local::now();
        let seq = SEQ.fetch_add(1, Ordering::Relaxed);
        Self {
            path: format!(
                "{}{:08x}{:04x}.tmp",
                now.format("%Y%m%d%H%M%S%3f"),
                now.timestamp_subsec_nanos(),
                seq
            ),
        }
    }
}

impl PartialEq for RelativeDirectoryPath {
    fn eq(&self, other: &Self) -> bool {
        compare::eq_ignore_case(&self.path, &other.path)
    }
}

impl Eq for RelativeDirectoryPath {}

impl Hash for RelativeDirectoryPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        compare::hash_ignore_case(&self.path, state);
    }
}

impl fmt::Display for RelativeDirectoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl PartialEq for RelativeFilePath {
    fn eq(&self, other: &Self) -> bool {
        compare::eq_ignore_case(&self.path, &other.path)
    }
}

impl Eq for RelativeFilePath {}

impl Hash for RelativeFilePath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        compare::hash_ignore_case(&self.path, state);
    }
}

impl fmt::Display for RelativeFilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl Serialize for RelativeDirectoryPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.path)
    }
}

impl<'de> Deserialize<'de> for RelativeDirectoryPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_string(&raw))
    }
}

impl Serialize for RelativeFilePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.path)
    }
}

impl<'de> Deserialize<'de> for RelativeFilePath {
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
        let rel = RelativeDirectoryPath::from_string(&format!("{sep}test{sep}abc"));
        assert_eq!(rel.as_str(), format!("test{sep}abc{sep}"));
        assert_eq!(rel, RelativeDirectoryPath::from_string(&format!("test{sep}abc{sep}")));
    }

    #[test]
    fn test_root_displacement() {
        assert!(RelativeDirectoryPath::root().is_root());
        assert_eq!(RelativeDirectoryPath::root().as_str(), "");
        assert!(RelativeDirectoryPath::from_string("").is_root());
        assert!(RelativeDirectoryPath::from_string(&SEPARATOR.to_string()).is_root());
        assert_eq!(
            RelativeDirectoryPath::from_string(""),
            RelativeDirectoryPath::root()
        );
    }

    #[test]
    fn test_directory_composition() {
        let sep = SEPARATOR;
        let a = RelativeDirectoryPath::from_string("test");
        let b = RelativeDirectoryPath::from_string("abc");
        assert_eq!(a.directory(&b).as_str(), format!("test{sep}abc{sep}"));
        assert_eq!(a.directory(&RelativeDirectoryPath::root()), a);
        assert_eq!(RelativeDirectoryPath::root().directory(&a), a);
        assert_eq!(a.directory_named("abc"), a.directory(&b));
    }

    #[test]
    fn test_file_composition() {
        let sep = SEPARATOR;
        let dir = RelativeDirectoryPath::from_string("test");
        let file = RelativeFilePath::from_string("1.tmp").unwrap();
        assert_eq!(dir.file(&file).as_str(), format!("test{sep}1.tmp"));
        assert_eq!(dir.file_named("1.tmp").unwrap(), dir.file(&file));
        assert_eq!(
            RelativeDirectoryPath::root().file(&file).as_str(),
            "1.tmp"
        );
    }

    #[test]
    fn test_file_rejects_empty() {
        assert!(RelativeFilePath::from_string("").is_err());
        assert!(RelativeFilePath::from_string(&SEPARATOR.to_string()).is_err());
        let err = RelativeFilePath::from_string("").unwrap_err();
        assert!(format!("{err}").contains("empty path"));
    }

    #[test]
    fn test_file_strips_separators_and_names() {
        let sep = SEPARATOR;
        let file = RelativeFilePath::from_string(&format!("{sep}a{sep}b.txt{sep}")).unwrap();
        assert_eq!(file.as_str(), format!("a{sep}b.txt"));
        assert_eq!(file.name(), "b.txt");
        let flat = RelativeFilePath::from_string("b.txt").unwrap();
        assert_eq!(flat.name(), "b.txt");
    }

    #[test]
    fn test_equality_case_insensitive() {
        let lower = RelativeDirectoryPath::from_string("test/abc");
        let upper = RelativeDirectoryPath::from_string("Test/ABC");
        assert_eq!(lower, upper);
        assert_eq!(hash_of(&lower), hash_of(&upper));

        let f1 = RelativeFilePath::from_string("a/B.txt").unwrap();
        let f2 = RelativeFilePath::from_string("A/b.TXT").unwrap();
        assert_eq!(f1, f2);
        assert_eq!(hash_of(&f1), hash_of(&f2));
    }

    #[test]
    fn test_temp_names_unique() {
        let names: Vec<RelativeFilePath> = (0..64).map(|_| RelativeFilePath::temp()).collect();
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let rel = RelativeDirectoryPath::from_string("test/abc");
        let json = serde_json::to_string(&rel).unwrap();
        let back: RelativeDirectoryPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rel);

        let file = RelativeFilePath::from_string("test/1.tmp").unwrap();
        let json = serde_json::to_string(&file).unwrap();
        let back: RelativeFilePath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, file);

        let err: std::result::Result<RelativeFilePath, _> = serde_json::from_str("\"\"");
        assert!(err.is_err());
    }
}
