use crate::segments::Segment;
use std::num::NonZeroUsize;
use tracing::debug;

/// The narrowest run of K consecutive qualifying segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Index of the window's first segment in the qualifying list
    pub first: usize,
    /// Position of the delimiter opening the first segment
    pub start: usize,
    /// Position of the delimiter closing the last segment
    pub end: usize,
    /// Characters spanned from `start` to `end`, both delimiters included
    pub width: usize,
}

fn window_at(segments: &[Segment], first: usize, k: usize) -> Window {
    let start = segments[first].start;
    let end = segments[first + k - 1].end;
    Window {
        first,
        start,
        end,
        width: end - start + 1,
    }
}

/// Width of every window of `k` consecutive segments, in order of the first segment
///
/// Empty when there are fewer than `k` segments.
pub fn window_widths(segments: &[Segment], k: NonZeroUsize) -> impl Iterator<Item = usize> + '_ {
    let k = k.get();
    let count = (segments.len() + 1).saturating_sub(k);
    (0..count).map(move |first| window_at(segments, first, k).width)
}

/// Find the narrowest window covering `k` consecutive qualifying segments
///
/// Returns `None` when fewer than `k` segments exist. Ties go to the earliest window.
pub fn find_min_window(segments: &[Segment], k: NonZeroUsize) -> Option<Window> {
    let k_len = k.get();
    if segments.len() < k_len {
        debug!(
            "Only {} qualifying segments, window needs {}",
            segments.len(),
            k_len
        );
        return None;
    }

    let mut best = window_at(segments, 0, k_len);
    for first in 1..=segments.len() - k_len {
        let candidate = window_at(segments, first, k_len);
        if candidate.width < best.width {
            best = candidate;
        }
    }

    debug!(
        "Narrowest window starts at segment {} ({}..={}, width {})",
        best.first, best.start, best.end, best.width
    );
    Some(best)
}
