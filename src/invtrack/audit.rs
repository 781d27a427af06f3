//! Deletion audit trail.
//!
//! The inventory reports every deletion to an [`AuditSink`] handed to it at
//! construction, so nothing here is process-global and tests can capture the
//! lines directly. Sink failures are logged and otherwise ignored by the caller.

use crate::error::{InvError, Result};
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

pub trait AuditSink {
    fn record(&mut self, message: &str) -> Result<()>;
}

/// Appends `<timestamp> - <message>` lines to a log file.
pub struct FileAuditLog {
    path: PathBuf,
}

impl FileAuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AuditSink for FileAuditLog {
    fn record(&mut self, message: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(InvError::Io)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(InvError::Io)?;
        writeln!(file, "{} - {}", Local::now().format(TIMESTAMP_FORMAT), message)
            .map_err(InvError::Io)?;
        Ok(())
    }
}

/// Keeps audit lines in memory.
#[derive(Debug, Default)]
pub struct MemoryAuditLog {
    lines: Vec<String>,
}

impl MemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl AuditSink for MemoryAuditLog {
    fn record(&mut self, message: &str) -> Result<()> {
        self.lines.push(message.to_string());
        Ok(())
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAuditLog;

impl AuditSink for NullAuditLog {
    fn record(&mut self, _message: &str) -> Result<()> {
        Ok(())
    }
}
