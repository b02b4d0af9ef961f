//! Typed path values and the string algebra behind them.
//!
//! The submodules layer from raw strings up to typed values:
//!
//! - [`normalize`]: the canonical string forms and classification
//!   predicates every type is built on
//! - `compare`: case-folded equality and hashing shared by all types
//! - [`absolute`]: [`DirectoryPath`], [`FilePath`], [`SystemPath`] and
//!   their memoized metadata
//! - [`relative`]: [`RelativeDirectoryPath`] and [`RelativeFilePath`]
//!   displacements
//! - [`resolve`]: composition, displacement recovery, and full-string
//!   equivalence

pub mod absolute;
pub(crate) mod compare;
pub mod normalize;
pub mod relative;
pub mod resolve;

pub use absolute::{DirectoryPath, FilePath, PathMetadata, SystemPath};
pub use relative::{RelativeDirectoryPath, RelativeFilePath};
pub use resolve::path_equals;
