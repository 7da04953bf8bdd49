pub mod analysis;
pub mod delimiters;
pub mod reader;
pub mod segments;
pub mod stats;
pub mod window;

// Re-export the pipeline stages for convenient access
pub use analysis::{analyze, AnalysisConfig, AnalysisReport};
pub use delimiters::{locate_delimiters, Boundary};
pub use segments::{filter_segments, Segment};
pub use window::{find_min_window, window_widths, Window};

// Re-export input and statistics helpers
pub use reader::{read_input, InputReader, ReadStats, ReaderConfig};
pub use stats::RunStats;
