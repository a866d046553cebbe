//! Durable key-value slots.
//!
//! A slot holds one named text value that survives process restarts.
//! [`FileSlot`] keeps it in a JSON file; [`MemorySlot`] keeps it in
//! process memory and can simulate write failures.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{CivicError, Result};

/// A named durable storage location.
pub trait Slot {
    /// Slot name, used in log and error messages.
    fn name(&self) -> &str;

    /// Read the stored value, `None` if nothing has been written.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the backing store cannot be read.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the stored value.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the value cannot be written.
    fn write(&self, contents: &str) -> Result<()>;

    /// Remove the stored value. Clearing an empty slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the backing store cannot be modified.
    fn clear(&self) -> Result<()>;
}

// ============================================================================
// File-backed slot
// ============================================================================

/// A slot stored as `<dir>/<name>.json`.
///
/// Writes go to a temp file first and are renamed into place.
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
    name: String,
}

impl FileSlot {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            name: name.into(),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.name))
    }

    fn storage_error(&self, action: &str, path: &Path, err: &std::io::Error) -> CivicError {
        CivicError::Storage(format!(
            "{action} slot '{}' at {}: {err}",
            self.name,
            path.display()
        ))
    }
}

impl Slot for FileSlot {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> Result<Option<String>> {
        let path = self.path();
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.storage_error("reading", &path, &e)),
        }
    }

    fn write(&self, contents: &str) -> Result<()> {
        let path = self.path();
        fs::create_dir_all(&self.dir).map_err(|e| self.storage_error("creating", &self.dir, &e))?;

        let tmp_path = path.with_extension("json.tmp");
        let write_tmp = || -> std::io::Result<()> {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(contents.as_bytes())?;
            file.flush()?;
            Ok(())
        };
        write_tmp().map_err(|e| self.storage_error("writing", &tmp_path, &e))?;

        // Atomic rename
        fs::rename(&tmp_path, &path).map_err(|e| self.storage_error("replacing", &path, &e))
    }

    fn clear(&self) -> Result<()> {
        let path = self.path();
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.storage_error("clearing", &path, &e)),
        }
    }
}

// ============================================================================
// In-memory slot
// ============================================================================

#[derive(Debug, Default)]
struct MemoryState {
    contents: Option<String>,
    fail_writes: bool,
    writes: usize,
}

/// An in-process slot. Clones share the same value.
#[derive(Debug, Clone)]
pub struct MemorySlot {
    name: String,
    state: Arc<Mutex<MemoryState>>,
}

impl MemorySlot {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Arc::default(),
        }
    }

    /// A slot that already holds `contents`.
    #[must_use]
    pub fn with_contents(name: impl Into<String>, contents: impl Into<String>) -> Self {
        let slot = Self::new(name);
        if let Ok(mut state) = slot.state.lock() {
            state.contents = Some(contents.into());
        }
        slot
    }

    /// Current value, bypassing failure simulation.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.state.lock().ok().and_then(|s| s.contents.clone())
    }

    /// Make subsequent writes fail, as a browser does when storage quota is exhausted.
    pub fn set_fail_writes(&self, fail: bool) {
        if let Ok(mut state) = self.state.lock() {
            state.fail_writes = fail;
        }
    }

    /// Number of successful writes.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.state.lock().map_or(0, |s| s.writes)
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| CivicError::Storage(format!("slot '{}' lock poisoned", self.name)))
    }
}

impl Slot for MemorySlot {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> Result<Option<String>> {
        Ok(self.lock()?.contents.clone())
    }

    fn write(&self, contents: &str) -> Result<()> {
        let mut state = self.lock()?;
        if state.fail_writes {
            return Err(CivicError::Storage(format!(
                "slot '{}' rejected write: quota exceeded",
                self.name
            )));
        }
        state.contents = Some(contents.to_string());
        state.writes += 1;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.lock()?.contents = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_slot_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("data"), "civic-issues");

        assert_eq!(slot.read().unwrap(), None);
        slot.write("[1,2,3]").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("[1,2,3]"));
        assert!(slot.path().ends_with("civic-issues.json"));
        assert!(!slot.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn file_slot_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path(), "s");
        slot.write("first").unwrap();
        slot.write("second").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn file_slot_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path(), "s");
        slot.write("x").unwrap();
        slot.clear().unwrap();
        slot.clear().unwrap();
        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn file_slot_write_failure_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();
        let slot = FileSlot::new(&blocker, "s");

        let err = slot.write("x").unwrap_err();
        assert!(matches!(err, CivicError::Storage(_)));
    }

    #[test]
    fn memory_slot_clones_share_state() {
        let slot = MemorySlot::new("m");
        let other = slot.clone();
        slot.write("hello").unwrap();
        assert_eq!(other.read().unwrap().as_deref(), Some("hello"));
        assert_eq!(other.write_count(), 1);
    }

    #[test]
    fn memory_slot_simulated_failure_keeps_old_value() {
        let slot = MemorySlot::with_contents("m", "old");
        slot.set_fail_writes(true);
        assert!(matches!(slot.write("new"), Err(CivicError::Storage(_))));
        assert_eq!(slot.contents().as_deref(), Some("old"));

        slot.set_fail_writes(false);
        slot.write("new").unwrap();
        assert_eq!(slot.contents().as_deref(), Some("new"));
    }
}
