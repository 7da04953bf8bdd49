// Known inputs with hand-checked answers for delimiter '.' and marker 'Q'

/// Two qualifying segments separated by one that lacks the marker
/// Delimiters at [0, 3, 6, 9]; qualifying (0,3) and (6,9); K=2 width 10
pub const SKIPPED_SEGMENT_TEXT: &str = ".Qa.bb.Qc.";

/// Empty segments between adjacent delimiters
/// Delimiters at [0, 1, 3, 4, 6, 7]; qualifying (1,3) and (4,6); K=2 width 6
pub const EMPTY_SEGMENTS_TEXT: &str = "..Q..Q..";

/// Only one segment carries the marker
#[allow(dead_code)]
pub const SINGLE_QUALIFYING_TEXT: &str = ".Qa.bb.cc.";

/// No delimiter at all
#[allow(dead_code)]
pub const NO_DELIMITER_TEXT: &str = "QQQ QQQ QQQ";

/// Qualifying segments clustered in the middle, sparse at both ends
/// Delimiters at [0, 11, 13, 16, 18, 21, 32], every segment qualifies
/// K=3 widths: 17, 8, 9, 17 -> minimum 8
#[allow(dead_code)]
pub const CLUSTERED_TEXT: &str = ".Qlongwordx.Q.aQ.Q.bQ.Qlongwordy.";

/// Windows line break inside the first segment
/// Read as ".Qa\n.Qc.": delimiters at [0, 4, 7]; K=2 width 8
#[allow(dead_code)]
pub const CRLF_TEXT: &str = ".Qa\r\n.Qc.\r\n";
