use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Roster with two available agents where agent 1 ends up busiest.
pub(crate) const SAMPLE_ROSTER: &str = r#"
agents:
  - { id: 1, score: 60 }
  - { id: 2, score: 20 }
  - { id: 3, score: 95 }
  - { id: 4, score: 75 }
customers:
  - { id: 1, score: 90 }
  - { id: 2, score: 20 }
  - { id: 3, score: 70 }
  - { id: 4, score: 40 }
  - { id: 5, score: 60 }
  - { id: 6, score: 10 }
away: [2, 4]
"#;

/// Write `content` to `name` inside a fresh temp dir.
pub(crate) fn write_temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    (temp_dir, path)
}
