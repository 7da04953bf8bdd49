use crate::delimiters::locate_delimiters;
use crate::segments::filter_segments;
use crate::window::{find_min_window, Window};
use std::num::NonZeroUsize;
use tracing::{info, warn};

/// Default window size: number of qualifying segments a span must cover
pub const DEFAULT_WINDOW_SIZE: NonZeroUsize = match NonZeroUsize::new(12_000) {
    Some(size) => size,
    None => unreachable!(),
};
/// Default marker character
pub const DEFAULT_MARKER: char = 'Q';
/// Default delimiter character
pub const DEFAULT_DELIMITER: char = '.';

/// Parameters for one analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Character separating the text into segments
    pub delimiter: char,
    /// Character that makes a segment qualify
    pub marker: char,
    /// Number of consecutive qualifying segments a window covers
    pub window_size: NonZeroUsize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            marker: DEFAULT_MARKER,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

/// Outcome of running all three stages over one text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    /// Characters in the analysed text
    pub chars: usize,
    /// Delimiter occurrences found
    pub delimiters: usize,
    /// Segments that are non-empty and contain the marker
    pub qualifying_segments: usize,
    /// Narrowest window, `None` when fewer than `window_size` segments qualify
    pub window: Option<Window>,
}

impl AnalysisReport {
    pub fn min_width(&self) -> Option<usize> {
        self.window.map(|w| w.width)
    }
}

/// Locate delimiters, filter qualifying segments and find the narrowest window
pub fn analyze(text: &str, config: &AnalysisConfig) -> AnalysisReport {
    // WHY: a segment never contains its own delimiter, so this run can only end without a window
    if config.marker == config.delimiter {
        warn!(
            "Marker and delimiter are both {:?}; no segment can qualify",
            config.marker
        );
    }

    let boundaries = locate_delimiters(text, config.delimiter);
    let segments = filter_segments(text, &boundaries, config.delimiter, config.marker);
    let window = find_min_window(&segments, config.window_size);

    let report = AnalysisReport {
        chars: text.chars().count(),
        delimiters: boundaries.len(),
        qualifying_segments: segments.len(),
        window,
    };

    info!(
        delimiters = report.delimiters,
        qualifying_segments = report.qualifying_segments,
        window_size = config.window_size.get(),
        min_width = ?report.min_width(),
        "Analysis complete"
    );
    report
}
