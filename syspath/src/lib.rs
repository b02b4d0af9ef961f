//! # syspath
//!
//! Typed absolute and relative path values with platform-normalized
//! strings.
//!
//! The four core types split paths along two axes that ordinary string (or
//! [`std::path::PathBuf`]) handling leaves implicit: absolute versus
//! relative, and directory versus file. Each value is backed by one
//! canonical string, so comparisons, hashing, and serialization never
//! depend on how the path happened to be spelled:
//!
//! - [`DirectoryPath`]: absolute, always separator-terminated
//! - [`FilePath`]: absolute, never separator-terminated
//! - [`RelativeDirectoryPath`]: a directory displacement; empty means
//!   "here"
//! - [`RelativeFilePath`]: a file displacement, never empty
//!
//! Composition and resolution are inverse typed operations: a base
//! directory plus a displacement yields an absolute path, and
//! [`DirectoryPath::relative_to`] / [`FilePath::relative_to`] recover the
//! displacement between two absolute paths without touching the
//! filesystem. Equality and hashing fold case on every platform;
//! [`path_equals`] instead answers whether two raw strings name the same
//! location under the *platform's* case rule, after rooting and folding
//! `.` / `..` components.
//!
//! The [`ops`] module is a thin filesystem layer over the typed values:
//! create, delete, move, copy, enumerate, read and write, plus the
//! backup-and-replace convention built on [`FilePath::postfix_bak`].
//!
//! # Examples
//!
//! ```
//! # #[cfg(unix)] {
//! use syspath::{DirectoryPath, RelativeFilePath};
//!
//! let base = DirectoryPath::from_string("/var/app");
//! let rel = RelativeFilePath::from_string("logs/today.log")?;
//! let file = base.file(&rel);
//! assert_eq!(file.as_str(), "/var/app/logs/today.log");
//! assert_eq!(file.relative_to(&base), rel);
//! assert_eq!(file.parent(), Some(DirectoryPath::from_string("/var/app/logs")));
//! # }
//! # Ok::<(), syspath::Error>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod ops;
pub mod path;

pub use error::{Error, Result};
pub use path::{
    path_equals, DirectoryPath, FilePath, PathMetadata, RelativeDirectoryPath, RelativeFilePath,
    SystemPath,
};
