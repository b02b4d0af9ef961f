//! Directory filesystem operations.

use std::io;

use crate::error::{Error, Result};
use crate::path::absolute::{DirectoryPath, FilePath, SystemPath};
use crate::path::relative::RelativeFilePath;

/// Attempts made by [`DirectoryPath::temp_file`] before giving up.
const TEMP_NAME_ATTEMPTS: u32 = 100;

impl DirectoryPath {
    /// Create this directory, including missing ancestors. Succeeds if it
    /// already exists.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    pub fn create(&self) -> Result<()> {
        std::fs::create_dir_all(self.as_std_path())?;
        Ok(())
    }

    /// Best-effort [`create`](Self::create): failures are logged at debug
    /// level and reported as `false`.
    pub fn try_create(&self) -> bool {
        match self.create() {
            Ok(()) => true,
            Err(e) => {
                log::debug!("create of {self} failed: {e}");
                false
            }
        }
    }

    /// Delete this directory. Fails if it is not empty.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    pub fn delete(&self) -> Result<()> {
        std::fs::remove_dir(self.as_std_path())?;
        Ok(())
    }

    /// Delete this directory and everything below it.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    pub fn delete_recursive(&self) -> Result<()> {
        std::fs::remove_dir_all(self.as_std_path())?;
        Ok(())
    }

    /// Best-effort [`delete`](Self::delete).
    pub fn try_delete(&self) -> bool {
        match self.delete() {
            Ok(()) => true,
            Err(e) => {
                log::debug!("delete of {self} failed: {e}");
                false
            }
        }
    }

    /// Best-effort [`delete_recursive`](Self::delete_recursive).
    pub fn try_delete_recursive(&self) -> bool {
        match self.delete_recursive() {
            Ok(()) => true,
            Err(e) => {
                log::debug!("recursive delete of {self} failed: {e}");
                false
            }
        }
    }

    /// Move (rename) this directory to `destination`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error; moving across filesystems fails on
    /// most platforms.
    pub fn move_to(&self, destination: &DirectoryPath) -> Result<()> {
        std::fs::rename(self.as_std_path(), destination.as_std_path())?;
        Ok(())
    }

    /// The immediate subdirectories, sorted by
    /// [`cmp_ordinal`](Self::cmp_ordinal) for a deterministic order.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    pub fn enumerate_directories(&self) -> Result<Vec<DirectoryPath>> {
        let mut out = Vec::new();
        for entry in std::fs::read_dir(self.as_std_path())? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                out.push(self.directory_named(&entry.file_name().to_string_lossy()));
            }
        }
        out.sort_by(DirectoryPath::cmp_ordinal);
        Ok(out)
    }

    /// The immediate files, sorted by [`FilePath::cmp_ordinal`].
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    pub fn enumerate_files(&self) -> Result<Vec<FilePath>> {
        let mut out = Vec::new();
        for entry in std::fs::read_dir(self.as_std_path())? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                out.push(self.file_named(&entry.file_name().to_string_lossy())?);
            }
        }
        out.sort_by(FilePath::cmp_ordinal);
        Ok(out)
    }

    /// All immediate entries as kind-tagged [`SystemPath`] values,
    /// directories first, each group in ordinal order. Entries that are
    /// neither file nor directory (sockets, broken links) are skipped.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    pub fn enumerate_entries(&self) -> Result<Vec<SystemPath>> {
        let mut out: Vec<SystemPath> = self
            .enumerate_directories()?
            .into_iter()
            .map(SystemPath::Directory)
            .collect();
        out.extend(self.enumerate_files()?.into_iter().map(SystemPath::File));
        Ok(out)
    }

    /// A file path below this directory with a fresh temporary name that
    /// does not currently exist on disk.
    ///
    /// # Errors
    ///
    /// Returns an I/O error of kind `AlreadyExists` if no unused name is
    /// found after a bounded number of attempts.
    pub fn temp_file(&self) -> Result<FilePath> {
        for _ in 0..TEMP_NAME_ATTEMPTS {
            let candidate = self.file(&RelativeFilePath::temp());
            if !candidate.exists() {
                return Ok(candidate);
            }
        }
        Err(Error::Io(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("no unused temporary file name in {self} after {TEMP_NAME_ATTEMPTS} attempts"),
        )))
    }
}
