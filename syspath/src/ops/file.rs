//! File filesystem operations, including the backup-and-replace
//! convention.
//!
//! Replacement works through sibling companions derived by pure name
//! surgery: the candidate content lands in a temp companion
//! ([`FilePath::postfix_tmp`]), the previous content is parked in a backup
//! companion ([`FilePath::postfix_bak`]), and the swap itself is a pair of
//! renames within one directory.

use std::io::{self, BufRead, Write};

use crate::error::{Error, Result};
use crate::path::absolute::FilePath;

impl FilePath {
    /// Create this file empty, truncating any existing content.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error; the parent directory must exist.
    pub fn create(&self) -> Result<()> {
        std::fs::File::create(self.as_std_path())?;
        Ok(())
    }

    /// Delete this file.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    pub fn delete(&self) -> Result<()> {
        std::fs::remove_file(self.as_std_path())?;
        Ok(())
    }

    /// Best-effort [`delete`](Self::delete): failures are logged at debug
    /// level and reported as `false`.
    pub fn try_delete(&self) -> bool {
        match self.delete() {
            Ok(()) => true,
            Err(e) => {
                log::debug!("delete of {self} failed: {e}");
                false
            }
        }
    }

    /// Rename (move) this file to `destination`, replacing it if present.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error; renaming across filesystems fails
    /// on most platforms.
    pub fn rename_to(&self, destination: &FilePath) -> Result<()> {
        std::fs::rename(self.as_std_path(), destination.as_std_path())?;
        Ok(())
    }

    /// Copy this file's content to `destination`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error of kind `AlreadyExists` if `destination` exists
    /// and `overwrite` is false, otherwise the underlying I/O error.
    pub fn copy_to(&self, destination: &FilePath, overwrite: bool) -> Result<()> {
        if !overwrite && destination.exists() {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("destination {destination} already exists"),
            )));
        }
        std::fs::copy(self.as_std_path(), destination.as_std_path())?;
        Ok(())
    }

    /// Read the whole file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error, including invalid UTF-8.
    pub fn read_to_string(&self) -> Result<String> {
        Ok(std::fs::read_to_string(self.as_std_path())?)
    }

    /// Read the whole file as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        Ok(std::fs::read(self.as_std_path())?)
    }

    /// Read the file as UTF-8 text lines, without terminators.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    pub fn read_lines(&self) -> Result<Vec<String>> {
        let file = std::fs::File::open(self.as_std_path())?;
        let mut lines = Vec::new();
        for line in io::BufReader::new(file).lines() {
            lines.push(line?);
        }
        Ok(lines)
    }

    /// Write text to this file, replacing any existing content.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    pub fn write_string(&self, contents: &str) -> Result<()> {
        std::fs::write(self.as_std_path(), contents)?;
        Ok(())
    }

    /// Write raw bytes to this file, replacing any existing content.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    pub fn write_bytes(&self, contents: &[u8]) -> Result<()> {
        std::fs::write(self.as_std_path(), contents)?;
        Ok(())
    }

    /// Append text to this file, creating it if missing.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    pub fn append_string(&self, contents: &str) -> Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(self.as_std_path())?;
        file.write_all(contents.as_bytes())?;
        Ok(())
    }

    /// Best-effort replace: delete this file if present, then rename
    /// `replacement` onto it. Logs and reports `false` on failure, in which
    /// case `replacement` is left in place.
    pub fn try_replace(&self, replacement: &FilePath) -> bool {
        if self.exists() {
            if let Err(e) = self.delete() {
                log::debug!("replace of {self} failed to clear target: {e}");
                return false;
            }
        }
        match replacement.rename_to(self) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("replace of {self} from {replacement} failed: {e}");
                false
            }
        }
    }

    /// Best-effort backup-and-replace: park the current content in the
    /// `.bak` companion (replacing a stale one), then rename `replacement`
    /// onto this file. Logs and reports `false` on failure.
    pub fn try_backup_and_replace(&self, replacement: &FilePath) -> bool {
        if self.exists() && !self.postfix_bak().try_replace(self) {
            return false;
        }
        match replacement.rename_to(self) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("backup-and-replace of {self} from {replacement} failed: {e}");
                false
            }
        }
    }

    /// Best-effort restore from the `.bak` companion: rename it back onto
    /// this file, replacing the current content. Reports `false` when no
    /// backup exists or the rename fails.
    pub fn try_restore(&self) -> bool {
        let bak = self.postfix_bak();
        if !bak.exists() {
            log::debug!("restore of {self} skipped: no backup at {bak}");
            return false;
        }
        self.try_replace(&bak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::absolute::DirectoryPath;

    fn temp_base() -> (tempfile::TempDir, DirectoryPath) {
        let tmp = tempfile::tempdir().unwrap();
        let dir = DirectoryPath::from_string(&tmp.path().to_string_lossy());
        (tmp, dir)
    }

    #[test]
    fn test_create_write_read_delete() {
        let (_guard, base) = temp_base();
        let file = base.file_named("a.txt").unwrap();
        file.create().unwrap();
        assert!(file.exists());
        file.write_string("one\ntwo\n").unwrap();
        assert_eq!(file.read_to_string().unwrap(), "one\ntwo\n");
        assert_eq!(file.read_lines().unwrap(), vec!["one", "two"]);
        assert_eq!(file.read_bytes().unwrap(), b"one\ntwo\n");
        file.delete().unwrap();
        assert!(!file.exists());
        assert!(!file.try_delete());
    }

    #[test]
    fn test_append_creates_and_extends() {
        let (_guard, base) = temp_base();
        let file = base.file_named("log.txt").unwrap();
        file.append_string("a").unwrap();
        file.append_string("b").unwrap();
        assert_eq!(file.read_to_string().unwrap(), "ab");
    }

    #[test]
    fn test_copy_respects_overwrite_flag() {
        let (_guard, base) = temp_base();
        let src = base.file_named("src").unwrap();
        src.write_string("payload").unwrap();
        let dst = base.file_named("dst").unwrap();

        src.copy_to(&dst, false).unwrap();
        assert_eq!(dst.read_to_string().unwrap(), "payload");

        let err = src.copy_to(&dst, false).unwrap_err();
        assert!(matches!(err, Error::Io(ref e) if e.kind() == io::ErrorKind::AlreadyExists));

        src.write_string("updated").unwrap();
        src.copy_to(&dst, true).unwrap();
        assert_eq!(dst.read_to_string().unwrap(), "updated");
    }

    #[test]
    fn test_rename_to() {
        let (_guard, base) = temp_base();
        let from = base.file_named("from").unwrap();
        from.write_string("x").unwrap();
        let to = base.file_named("to").unwrap();
        from.rename_to(&to).unwrap();
        assert!(!from.exists());
        assert_eq!(to.read_to_string().unwrap(), "x");
    }

    #[test]
    fn test_replace_cycle() {
        let (_guard, base) = temp_base();
        let target = base.file_named("config").unwrap();
        target.write_string("v1").unwrap();

        let candidate = target.postfix_tmp();
        candidate.write_string("v2").unwrap();
        assert!(target.try_replace(&candidate));
        assert_eq!(target.read_to_string().unwrap(), "v2");
        assert!(!candidate.exists());
    }

    #[test]
    fn test_backup_and_replace_then_restore() {
        let (_guard, base) = temp_base();
        let target = base.file_named("config").unwrap();
        target.write_string("v1").unwrap();

        let candidate = target.postfix_tmp();
        candidate.write_string("v2").unwrap();
        assert!(target.try_backup_and_replace(&candidate));
        assert_eq!(target.read_to_string().unwrap(), "v2");
        assert_eq!(target.postfix_bak().read_to_string().unwrap(), "v1");

        assert!(target.try_restore());
        assert_eq!(target.read_to_string().unwrap(), "v1");
        assert!(!target.postfix_bak().exists());
    }

    #[test]
    fn test_restore_without_backup_fails() {
        let (_guard, base) = temp_base();
        let target = base.file_named("config").unwrap();
        target.write_string("v1").unwrap();
        assert!(!target.try_restore());
        assert_eq!(target.read_to_string().unwrap(), "v1");
    }

    #[test]
    fn test_backup_and_replace_on_missing_target() {
        let (_guard, base) = temp_base();
        let target = base.file_named("fresh").unwrap();
        let candidate = target.postfix_tmp();
        candidate.write_string("v1").unwrap();
        assert!(target.try_backup_and_replace(&candidate));
        assert_eq!(target.read_to_string().unwrap(), "v1");
        assert!(!target.postfix_bak().exists());
    }
}
