use crate::analysis::{AnalysisConfig, AnalysisReport};
use crate::reader::ReadStats;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Summary of one analysis run, written by `--stats-out`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunStats {
    /// Input file path
    pub path: String,
    /// Bytes read from the input before trimming
    pub bytes_read: u64,
    /// Characters analysed after trimming
    pub chars: u64,
    /// Delimiter occurrences found
    pub delimiters: u64,
    /// Segments that qualified
    pub qualifying_segments: u64,
    pub window_size: u64,
    pub marker: char,
    pub delimiter: char,
    /// Narrowest window width, null when no window exists
    pub min_width: Option<u64>,
    pub window_start: Option<u64>,
    pub window_end: Option<u64>,
    pub read_time_ms: u64,
    pub analysis_time_ms: u64,
}

impl RunStats {
    pub fn new(
        read: &ReadStats,
        config: &AnalysisConfig,
        report: &AnalysisReport,
        analysis_time_ms: u64,
    ) -> Self {
        Self {
            path: read.file_path.clone(),
            bytes_read: read.bytes_read,
            chars: report.chars as u64,
            delimiters: report.delimiters as u64,
            qualifying_segments: report.qualifying_segments as u64,
            window_size: config.window_size.get() as u64,
            marker: config.marker,
            delimiter: config.delimiter,
            min_width: report.window.map(|w| w.width as u64),
            window_start: report.window.map(|w| w.start as u64),
            window_end: report.window.map(|w| w.end as u64),
            read_time_ms: read.duration_ms,
            analysis_time_ms,
        }
    }

    /// Write the statistics as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write stats file {}", path.display()))?;
        Ok(())
    }
}
