use std::path::PathBuf;

use chrono::{DateTime, Local, TimeZone};

use crate::error::{Error, Result};
use crate::types::RecoveryLevel;

pub const DEFAULT_QUALITY: &str = "highest";
pub const DEFAULT_SIZE: i32 = 1024;

/// Resolved generation parameters. Built once from user input, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrParams {
    /// Quality string exactly as supplied
    pub quality: String,
    /// Trimmed, non-empty payload
    pub content: String,
    pub output: PathBuf,
    /// Side length in pixels; negative means pixels per module
    pub size: i32,
}

impl QrParams {
    /// Validate raw inputs and fill in defaults.
    ///
    /// `content` is trimmed and must be non-empty. A missing or blank
    /// `output` falls back to [`default_output_path`].
    pub fn resolve(
        quality: &str,
        content: &str,
        output: Option<&str>,
        size: i32,
    ) -> Result<Self> {
        let content = content.trim();
        if content.is_empty() {
            return Err(Error::missing("content"));
        }

        let output = match output.map(str::trim) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => default_output_path(),
        };

        Ok(Self {
            quality: quality.to_string(),
            content: content.to_string(),
            output,
            size,
        })
    }

    pub fn recovery_level(&self) -> RecoveryLevel {
        RecoveryLevel::from_quality(&self.quality)
    }
}

/// Timestamped file name such as `2024-05-01_134502+0200.png`.
pub fn default_output_name<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("{}.png", now.format("%Y-%m-%d_%H%M%S%z"))
}

pub fn default_output_path() -> PathBuf {
    PathBuf::from(default_output_name(&Local::now()))
}
