//! Storage layer for tdl
//!
//! Manages persistent state in the per-user data directory (overridable via
//! `--dir` / `TDL_DIR`). Three independent entries plus the optional
//! configuration file:
//!
//! ```text
//! <data dir>/
//!   tasks.json     # JSON array of task records
//!   theme          # "light" | "dark"
//!   lang           # "ar" | "en"
//!   config.toml    # optional tool configuration
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;
use crate::task::Task;

/// File name of the task list entry
pub const TASKS_FILE: &str = "tasks.json";

/// File name of the theme entry
pub const THEME_FILE: &str = "theme";

/// File name of the language entry
pub const LANG_FILE: &str = "lang";

/// File name of the optional configuration file
pub const CONFIG_FILE: &str = "config.toml";

/// Storage manager for tdl state
#[derive(Debug, Clone)]
pub struct Storage {
    data_dir: PathBuf,
}

impl Storage {
    /// Create a storage manager rooted at the given directory
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Resolve the default per-user data directory
    pub fn default_dir() -> Result<PathBuf> {
        match directories::ProjectDirs::from("", "", "tdl") {
            Some(dirs) => Ok(dirs.data_dir().to_path_buf()),
            None => Err(crate::error::Error::OperationFailed(
                "could not determine a data directory; pass --dir".to_string(),
            )),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn tasks_file(&self) -> PathBuf {
        self.data_dir.join(TASKS_FILE)
    }

    pub fn theme_file(&self) -> PathBuf {
        self.data_dir.join(THEME_FILE)
    }

    pub fn lang_file(&self) -> PathBuf {
        self.data_dir.join(LANG_FILE)
    }

    pub fn config_file(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }

    // =========================================================================
    // File I/O helpers (atomic writes for safety)
    // =========================================================================

    /// Write JSON data atomically (write to temp, then rename)
    ///
    /// A crash mid-write leaves the previous file intact, so at most the
    /// in-flight mutation is lost.
    pub fn write_json<T: Serialize>(&self, path: &Path, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        self.write_atomic(path, json.as_bytes())
    }

    /// Read JSON data from a file
    pub fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = fs::read_to_string(path)?;
        let data: T = serde_json::from_str(&content)?;
        Ok(data)
    }

    /// Write data atomically using temp file + rename
    pub fn write_atomic(&self, path: &Path, data: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("tmp");
        let mut file = File::create(&temp_path)?;
        file.write_all(data)?;
        file.sync_all()?;

        fs::rename(&temp_path, path)?;
        Ok(())
    }

    // =========================================================================
    // Task list entry
    // =========================================================================

    /// Read the task list; a missing file yields an empty list
    pub fn read_tasks(&self) -> Result<Vec<Task>> {
        let path = self.tasks_file();
        if !path.exists() {
            return Ok(Vec::new());
        }
        self.read_json(&path)
    }

    /// Write the full task list (atomic)
    pub fn write_tasks(&self, tasks: &[Task]) -> Result<()> {
        self.write_json(&self.tasks_file(), &tasks)
    }

    // =========================================================================
    // Preference entries (plain trimmed strings)
    // =========================================================================

    /// Read the persisted theme entry, if any
    pub fn read_theme(&self) -> Option<String> {
        read_entry(&self.theme_file())
    }

    /// Write the theme entry
    pub fn write_theme(&self, theme: &str) -> Result<()> {
        self.write_atomic(&self.theme_file(), theme.as_bytes())
    }

    /// Read the persisted language entry, if any
    pub fn read_lang(&self) -> Option<String> {
        read_entry(&self.lang_file())
    }

    /// Write the language entry
    pub fn write_lang(&self, lang: &str) -> Result<()> {
        self.write_atomic(&self.lang_file(), lang.as_bytes())
    }
}

fn read_entry(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok().map(|s| s.trim().to_string())
}
