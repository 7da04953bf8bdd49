use anyhow::Result;
use clap::Parser;
use markspan::analysis::{self, AnalysisConfig};
use markspan::reader::{InputReader, ReaderConfig};
use markspan::stats::RunStats;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{info, warn, Level};

/// Exit status when the text holds fewer qualifying segments than the window needs
// WHY: status 1 is taken by read failures; scripts must tell "no window" apart from both
const EXIT_NO_RESULT: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "markspan")]
#[command(about = "Shortest span of text covering K delimiter-separated segments that contain a marker")]
#[command(version)]
struct Args {
    /// Text file to analyse
    #[arg(default_value = "1.txt")]
    input: PathBuf,

    /// Number of consecutive qualifying segments a span must cover
    #[arg(short = 'k', long, default_value_t = analysis::DEFAULT_WINDOW_SIZE)]
    window_size: NonZeroUsize,

    /// Character that makes a segment qualify
    #[arg(long, default_value_t = analysis::DEFAULT_MARKER)]
    marker: char,

    /// Character separating the text into segments
    #[arg(long, default_value_t = analysis::DEFAULT_DELIMITER)]
    delimiter: char,

    /// Use memory-mapped I/O instead of async buffered
    #[arg(long)]
    use_mmap: bool,

    /// Write run statistics as JSON to this path
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Log at debug level
    #[arg(long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // WHY: stdout carries only the result line, so structured logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");

    let config = AnalysisConfig {
        delimiter: args.delimiter,
        marker: args.marker,
        window_size: args.window_size,
    };

    let reader = InputReader::new(ReaderConfig {
        use_mmap: args.use_mmap,
        ..Default::default()
    });
    // WHY: the read is the only fatal step; its error names the path and nothing reaches stdout
    let (text, read_stats) = reader.read_text(&args.input).await?;

    let start_time = Instant::now();
    let report = analysis::analyze(&text, &config);
    let analysis_time_ms = start_time.elapsed().as_millis() as u64;

    if let Some(ref stats_path) = args.stats_out {
        RunStats::new(&read_stats, &config, &report, analysis_time_ms).write_json(stats_path)?;
        info!("Wrote run statistics to {}", stats_path.display());
    }

    match report.window {
        Some(window) => {
            info!(
                first_segment = window.first,
                start = window.start,
                end = window.end,
                "Narrowest window found"
            );
            println!("{}", window.width);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            warn!(
                "Found {} qualifying segments, fewer than the window size {}",
                report.qualifying_segments,
                config.window_size
            );
            // WHY: an explicit word, never a number that could be mistaken for a width
            println!("no result");
            Ok(ExitCode::from(EXIT_NO_RESULT))
        }
    }
}
