//! Persistence of the engine state as a JSON file.
//!
//! File access runs on the blocking thread pool. A missing file reads as an
//! empty schedule; writes go to a sibling temp file that is then renamed over
//! the state file.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tokio::task;

use crate::{
    engine::EngineSnapshot,
    error::{Result, ResultExt, ScheduleError},
};

/// On-disk layout of the state file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanFile {
    #[serde(flatten)]
    pub engine: EngineSnapshot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Runs blocking file work off the async runtime.
async fn blocking<T, F>(work: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(work)
        .await
        .with_context("Task join error")?
}

fn fs_error(path: &Path, source: std::io::Error) -> ScheduleError {
    ScheduleError::FileSystem {
        path: path.to_path_buf(),
        source,
    }
}

fn read(path: &Path) -> Result<PlanFile> {
    match fs::read_to_string(path) {
        Ok(json) => Ok(serde_json::from_str(&json)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(PlanFile::default()),
        Err(e) => Err(fs_error(path, e)),
    }
}

fn write(path: &Path, file: &PlanFile) -> Result<()> {
    let json = serde_json::to_string_pretty(file)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).map_err(|e| fs_error(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| fs_error(path, e))
}

fn remove(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(fs_error(path, e)),
    }
}

/// Loads the state file, or an empty state when it does not exist yet.
pub async fn load(path: PathBuf) -> Result<PlanFile> {
    blocking(move || read(&path)).await
}

/// Saves the engine state stamped with the current time.
pub async fn save(path: PathBuf, engine: EngineSnapshot) -> Result<PlanFile> {
    blocking(move || {
        let file = PlanFile {
            engine,
            updated_at: Some(Timestamp::now()),
        };
        write(&path, &file)?;
        Ok(file)
    })
    .await
}

/// Deletes the state file. Returns whether there was one.
pub async fn delete(path: PathBuf) -> Result<bool> {
    blocking(move || remove(&path)).await
}
