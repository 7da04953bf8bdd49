use crate::delimiters::Boundary;
use tracing::debug;

/// A qualifying segment, identified by the character positions of the delimiters around it
///
/// `start` is the delimiter immediately before the segment and `end` the one immediately
/// after it, so `start < end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
}

/// Text strictly between two consecutive delimiters, excluding both delimiter characters
pub fn segment_text<'a>(text: &'a str, open: Boundary, close: Boundary, delimiter: char) -> &'a str {
    &text[open.byte + delimiter.len_utf8()..close.byte]
}

/// Keep every consecutive delimiter pair whose inner text is non-empty and contains `marker`
///
/// Fewer than two boundaries yield an empty list. Output order follows the text.
pub fn filter_segments(
    text: &str,
    boundaries: &[Boundary],
    delimiter: char,
    marker: char,
) -> Vec<Segment> {
    let segments: Vec<Segment> = boundaries
        .windows(2)
        .filter(|pair| {
            let inner = segment_text(text, pair[0], pair[1], delimiter);
            !inner.is_empty() && inner.contains(marker)
        })
        .map(|pair| Segment {
            start: pair[0].pos,
            end: pair[1].pos,
        })
        .collect();

    debug!(
        "{} of {} segments contain {:?}",
        segments.len(),
        boundaries.len().saturating_sub(1),
        marker
    );
    segments
}
