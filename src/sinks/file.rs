//! Append-mode file sink
//!
//! The file is opened synchronously so a bad path fails when destinations are
//! resolved; writes go through tokio and are serialized by a FIFO mutex, so
//! overlapping log calls land in the order they were issued.

use crate::core::{LoggerError, Result, Sink};
use async_trait::async_trait;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

pub struct FileSink {
    file: Mutex<File>,
    path: PathBuf,
    name: String,
}

impl FileSink {
    /// Open `path` for appending, creating the file and its parent directories
    /// when missing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                LoggerError::io_operation(
                    "creating log directory",
                    parent.display().to_string(),
                    e,
                )
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;

        Ok(Self {
            file: Mutex::new(File::from_std(file)),
            name: path.display().to_string(),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Sink for FileSink {
    async fn write(&self, bytes: &[u8]) -> Result<()> {
        let mut file = self.file.lock().await;
        file.write_all(bytes)
            .await
            .map_err(|e| LoggerError::write_failure(&self.name, e))?;
        // tokio hands the write to a blocking task; flush waits for it
        file.flush()
            .await
            .map_err(|e| LoggerError::write_failure(&self.name, e))?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
