//! Append-only session journal.
//!
//! Every install run appends `[timestamp] [level] message` lines to a flat
//! log file in the user's home directory. The file is opened once per
//! session and has a single writer; `tracing` handles diagnostics
//! separately on stderr.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::Result;

/// Default journal location, relative to the user's real home.
pub const DEFAULT_FILENAME: &str = "armory-install.log";

/// Append-only session log.
#[derive(Debug)]
pub struct Journal {
    file: Mutex<Option<File>>,
    path: Option<PathBuf>,
}

impl Journal {
    /// Open (creating if needed) the journal at `path` and write the
    /// session banner.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let journal = Self {
            file: Mutex::new(Some(file)),
            path: Some(path.to_path_buf()),
        };
        journal.write("INFO", &"=".repeat(60));
        journal.write("INFO", &format!("Session started: {}", now()));
        journal.write("INFO", &"=".repeat(60));
        Ok(journal)
    }

    /// A journal that discards everything. Used when the log file cannot
    /// be opened and in tests that don't care about logging.
    pub fn disabled() -> Self {
        Self {
            file: Mutex::new(None),
            path: None,
        }
    }

    /// Where this journal writes, if anywhere.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn info(&self, msg: &str) {
        self.write("INFO", msg);
    }

    pub fn warn(&self, msg: &str) {
        self.write("WARNING", msg);
    }

    pub fn error(&self, msg: &str) {
        self.write("ERROR", msg);
    }

    pub fn debug(&self, msg: &str) {
        self.write("DEBUG", msg);
    }

    fn write(&self, level: &str, msg: &str) {
        let mut guard = match self.file.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(file) = guard.as_mut() {
            // A failed journal write is not worth failing an install over.
            let _ = writeln!(file, "[{}] [{}] {}", now(), level, msg);
        }
    }
}

fn now() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
