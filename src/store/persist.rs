//! Durable client storage and the debounced settings writer.
//!
//! Storage is a one-record shadow of the layout configuration. Writes are
//! debounced: a burst of changes within the quiet period produces exactly one
//! write, reflecting the state at the last change. Failures are logged and
//! swallowed — losing a layout preference is non-fatal.

use crate::error::StorageError;

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

// ─── SettingsStorage ─────────────────────────────────────────────────────────

/// Durable storage for the single settings record.
pub trait SettingsStorage: Send + Sync {
    /// Read the stored record, `None` if nothing was ever saved.
    fn load(&self) -> Result<Option<String>, StorageError>;
    /// Overwrite the stored record.
    fn save(&self, data: &str) -> Result<(), StorageError>;
}

/// File-backed settings storage.
pub struct FileSettings {
    path: PathBuf,
}

impl FileSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsStorage for FileSettings {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Unavailable(e.to_string())),
        }
    }

    fn save(&self, data: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::Unavailable(e.to_string()))?;
        }
        fs::write(&self.path, data).map_err(|e| StorageError::Unavailable(e.to_string()))
    }
}

/// In-memory settings storage. Counts writes, which the persistence tests
/// lean on.
#[derive(Default)]
pub struct MemorySettings {
    inner: Mutex<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    value: Option<String>,
    write_count: usize,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-seeded record, as if a previous session had saved it.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            inner: Mutex::new(MemoryInner {
                value: Some(value.into()),
                write_count: 0,
            }),
        }
    }

    pub fn value(&self) -> Option<String> {
        // Inspection helper; a poisoned lock still holds readable state.
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .value
            .clone()
    }

    pub fn write_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .write_count
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, MemoryInner>, StorageError> {
        self.inner
            .lock()
            .map_err(|_| StorageError::Unavailable("settings lock poisoned".to_string()))
    }
}

impl SettingsStorage for MemorySettings {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.guard()?.value.clone())
    }

    fn save(&self, data: &str) -> Result<(), StorageError> {
        let mut inner = self.guard()?;
        inner.value = Some(data.to_string());
        inner.write_count += 1;
        Ok(())
    }
}

// ─── DebouncedWriter ─────────────────────────────────────────────────────────

/// Single-slot debounced writer.
///
/// `schedule` aborts any armed write before arming a new one, so at most one
/// write happens per quiet period and it carries the latest snapshot.
pub struct DebouncedWriter {
    storage: Arc<dyn SettingsStorage>,
    quiet: Duration,
    pending: Option<JoinHandle<()>>,
}

impl DebouncedWriter {
    pub fn new(storage: Arc<dyn SettingsStorage>, quiet: Duration) -> Self {
        Self {
            storage,
            quiet,
            pending: None,
        }
    }

    /// Arm a write of `snapshot` after the quiet period, superseding any
    /// pending write. Requires a tokio runtime; without one the write is
    /// skipped with a warning.
    pub fn schedule(&mut self, snapshot: String) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(h) => h,
            Err(_) => {
                tracing::warn!("No async runtime; settings write skipped");
                return;
            }
        };

        let storage = Arc::clone(&self.storage);
        let quiet = self.quiet;
        self.pending = Some(handle.spawn(async move {
            tokio::time::sleep(quiet).await;
            match storage.save(&snapshot) {
                Ok(()) => tracing::debug!("Persisted settings"),
                Err(e) => tracing::warn!(error = %e, "Failed to persist settings"),
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(300);

    #[tokio::test(start_paused = true)]
    async fn test_burst_produces_single_write_with_last_snapshot() {
        let storage = Arc::new(MemorySettings::new());
        let mut writer = DebouncedWriter::new(storage.clone(), QUIET);

        for i in 0..10 {
            writer.schedule(format!("snapshot-{}", i));
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        tokio::time::sleep(QUIET * 2).await;

        assert_eq!(storage.write_count(), 1);
        assert_eq!(storage.value().as_deref(), Some("snapshot-9"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_changes_each_write() {
        let storage = Arc::new(MemorySettings::new());
        let mut writer = DebouncedWriter::new(storage.clone(), QUIET);

        writer.schedule("first".to_string());
        tokio::time::sleep(QUIET * 2).await;
        writer.schedule("second".to_string());
        tokio::time::sleep(QUIET * 2).await;

        assert_eq!(storage.write_count(), 2);
        assert_eq!(storage.value().as_deref(), Some("second"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_written_before_quiet_period() {
        let storage = Arc::new(MemorySettings::new());
        let mut writer = DebouncedWriter::new(storage.clone(), QUIET);

        writer.schedule("early".to_string());
        tokio::time::sleep(QUIET / 2).await;
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_poisoned_memory_settings_is_unavailable_not_panic() {
        let storage = Arc::new(MemorySettings::new());
        storage.save("before").unwrap();

        let poisoner = storage.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.inner.lock().unwrap();
            panic!("poison the settings lock");
        })
        .join();

        assert!(matches!(
            storage.load(),
            Err(StorageError::Unavailable(_))
        ));
        assert!(matches!(
            storage.save("after"),
            Err(StorageError::Unavailable(_))
        ));
        // Inspection helpers still read the pre-poison state.
        assert_eq!(storage.value().as_deref(), Some("before"));
        assert_eq!(storage.write_count(), 1);
    }

    #[test]
    fn test_file_settings_missing_file_is_none() {
        let path = std::env::temp_dir().join("v3trading-test-missing-settings.json");
        let _ = fs::remove_file(&path);
        let storage = FileSettings::new(&path);
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_file_settings_round_trip() {
        let path = std::env::temp_dir().join("v3trading-test-settings.json");
        let storage = FileSettings::new(&path);
        storage.save(r#"{"darkTheme":true}"#).unwrap();
        assert_eq!(
            storage.load().unwrap().as_deref(),
            Some(r#"{"darkTheme":true}"#)
        );
        let _ = fs::remove_file(&path);
    }
}
