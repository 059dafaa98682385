//! JSON file task store backed by capability-scoped filesystem access.
//!
//! The whole collection persists as one JSON array, the layout the tracker
//! has always used on disk. Saves write a temporary file and rename it over
//! the target so a crash never leaves a half-written store behind. Reads
//! that find nothing usable degrade to an empty collection.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use tracing::warn;

use crate::tasks::{
    domain::{Task, TaskId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Default file name for the persisted collection.
pub const DEFAULT_FILE_NAME: &str = "tasks.json";

/// Task store persisting to a single JSON file under a fixed directory.
///
/// Identity operations rewrite the whole file; the collection is small by
/// design. Blocking filesystem work runs on the dedicated thread pool.
#[derive(Debug, Clone)]
pub struct JsonFileTaskStore {
    dir: Utf8PathBuf,
    file_name: String,
}

impl JsonFileTaskStore {
    /// Creates a store writing [`DEFAULT_FILE_NAME`] under the directory.
    ///
    /// The directory must already exist; the file is created on first
    /// save.
    #[must_use]
    pub fn new(dir: impl Into<Utf8PathBuf>) -> Self {
        Self::with_file_name(dir, DEFAULT_FILE_NAME)
    }

    /// Creates a store writing the named file under the directory.
    #[must_use]
    pub fn with_file_name(dir: impl Into<Utf8PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            file_name: file_name.into(),
        }
    }

    fn context(&self) -> (Utf8PathBuf, String) {
        (self.dir.clone(), self.file_name.clone())
    }
}

/// Runs a blocking filesystem operation on the dedicated thread pool.
async fn run_blocking<F, T>(f: F) -> TaskStoreResult<T>
where
    F: FnOnce() -> TaskStoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|err| {
        TaskStoreError::persistence(std::io::Error::other(format!("task join error: {err}")))
    })?
}

fn load_blocking(dir: &Utf8Path, file_name: &str) -> TaskStoreResult<Vec<Task>> {
    let handle = match Dir::open_ambient_dir(dir, ambient_authority()) {
        Ok(handle) => handle,
        Err(err) => {
            warn!(error = %err, %dir, "store directory unreadable, starting empty");
            return Ok(Vec::new());
        }
    };
    let contents = match handle.read_to_string(file_name) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => {
            warn!(error = %err, file_name, "task file unreadable, starting empty");
            return Ok(Vec::new());
        }
    };
    Ok(serde_json::from_str(&contents).unwrap_or_else(|err| {
        warn!(error = %err, file_name, "task file corrupt, starting empty");
        Vec::new()
    }))
}

fn persist(dir: &Utf8Path, file_name: &str, tasks: &[Task]) -> TaskStoreResult<()> {
    let payload = serde_json::to_string_pretty(tasks).map_err(TaskStoreError::persistence)?;
    let handle =
        Dir::open_ambient_dir(dir, ambient_authority()).map_err(TaskStoreError::persistence)?;
    let temp_name = format!(".{file_name}.tmp");
    handle
        .write(&temp_name, payload.as_bytes())
        .map_err(TaskStoreError::persistence)?;
    handle
        .rename(&temp_name, &handle, file_name)
        .map_err(TaskStoreError::persistence)?;
    Ok(())
}

#[async_trait]
impl TaskStore for JsonFileTaskStore {
    async fn load(&self) -> TaskStoreResult<Vec<Task>> {
        let (dir, file_name) = self.context();
        run_blocking(move || load_blocking(&dir, &file_name)).await
    }

    async fn save(&self, tasks: &[Task]) -> TaskStoreResult<()> {
        let (dir, file_name) = self.context();
        let snapshot = tasks.to_vec();
        run_blocking(move || persist(&dir, &file_name, &snapshot)).await
    }

    async fn find(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        let (dir, file_name) = self.context();
        run_blocking(move || {
            let tasks = load_blocking(&dir, &file_name)?;
            Ok(tasks.into_iter().find(|task| task.id() == id))
        })
        .await
    }

    async fn insert(&self, task: &Task) -> TaskStoreResult<()> {
        let (dir, file_name) = self.context();
        let owned = task.clone();
        run_blocking(move || {
            let mut tasks = load_blocking(&dir, &file_name)?;
            tasks.push(owned);
            persist(&dir, &file_name, &tasks)
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskStoreResult<()> {
        let (dir, file_name) = self.context();
        let owned = task.clone();
        run_blocking(move || {
            let mut tasks = load_blocking(&dir, &file_name)?;
            let slot = tasks
                .iter_mut()
                .find(|existing| existing.id() == owned.id())
                .ok_or(TaskStoreError::NotFound(owned.id()))?;
            *slot = owned;
            persist(&dir, &file_name, &tasks)
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskStoreResult<()> {
        let (dir, file_name) = self.context();
        run_blocking(move || {
            let mut tasks = load_blocking(&dir, &file_name)?;
            let index = tasks
                .iter()
                .position(|task| task.id() == id)
                .ok_or(TaskStoreError::NotFound(id))?;
            tasks.remove(index);
            persist(&dir, &file_name, &tasks)
        })
        .await
    }
}
