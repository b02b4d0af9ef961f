//! Filesystem operations over the typed path values.
//!
//! Everything here is a thin pass-through to [`std::fs`], kept separate
//! from the pure string algebra in [`crate::path`]. Operations come in two
//! flavors: plain methods return [`crate::Result`] and propagate the I/O
//! error, while `try_*` methods swallow the error into a `bool` outcome and
//! log it at debug level for callers that treat failure as a normal branch
//! (cleanup paths, best-effort backups).

pub mod directory;
pub mod file;
