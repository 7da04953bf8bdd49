use anyhow::{Context, Result};
use memmap2::MmapOptions;
use std::path::Path;
use std::time::Instant;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, BufReader};
use tracing::{debug, info, warn};

/// Configuration for input reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
    /// Map the file into memory instead of reading it through a buffer
    pub use_mmap: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            buffer_size: 8192,
            use_mmap: false,
        }
    }
}

/// Statistics for one input read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub bytes_read: u64,
    pub duration_ms: u64,
}

/// Loads one input file as trimmed UTF-8 text
pub struct InputReader {
    config: ReaderConfig,
}

impl InputReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read the whole file, validate UTF-8, unify line breaks and trim surrounding whitespace
    pub async fn read_text<P: AsRef<Path>>(&self, file_path: P) -> Result<(String, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = Instant::now();

        debug!(
            "Starting {} read of file: {}",
            if self.config.use_mmap { "mmap" } else { "async" },
            path.display()
        );

        let read = if self.config.use_mmap {
            read_mapped(path)
        } else {
            self.read_buffered(path).await
        };
        let bytes = read.inspect_err(|e| warn!("{:#}", e))?;

        let bytes_read = bytes.len() as u64;
        let raw = String::from_utf8(bytes)
            .with_context(|| format!("Input file {} is not valid UTF-8", path.display()))?;
        let text = normalize_text(raw);

        let stats = ReadStats {
            file_path: path.display().to_string(),
            bytes_read,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "Read {}: {} bytes in {}ms",
            stats.file_path, stats.bytes_read, stats.duration_ms
        );
        Ok((text, stats))
    }

    async fn read_buffered(&self, path: &Path) -> Result<Vec<u8>> {
        let file = File::open(path)
            .await
            .with_context(|| format!("Input file not found or unreadable: {}", path.display()))?;

        let mut reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .await
            .with_context(|| format!("Failed to read input file {}", path.display()))?;
        Ok(bytes)
    }
}

/// Convert `\r\n` and lone `\r` line breaks to `\n`, then trim surrounding whitespace
///
/// Positions are counted on this text, so a line break always occupies one character.
pub fn normalize_text(raw: String) -> String {
    // WHY: only allocate again when the input actually contains carriage returns
    let unified = if raw.contains('\r') {
        raw.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        raw
    };

    // WHY: window positions in logs and stats count from the first non-blank character
    let trimmed = unified.trim();
    if trimmed.len() == unified.len() {
        unified
    } else {
        trimmed.to_owned()
    }
}

fn read_mapped(path: &Path) -> Result<Vec<u8>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Input file not found or unreadable: {}", path.display()))?;
    if file.metadata()?.len() == 0 {
        return Ok(Vec::new());
    }

    // SAFETY: the map is copied out before returning; the file is not written by this process
    let mmap = unsafe { MmapOptions::new().map(&file) }
        .with_context(|| format!("Failed to memory-map input file {}", path.display()))?;
    Ok(mmap.to_vec())
}

/// Read a single input file with default configuration
pub async fn read_input<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let reader = InputReader::new(ReaderConfig::default());
    let (text, _stats) = reader.read_text(file_path).await?;
    Ok(text)
}
