use tracing::debug;

/// Location of one delimiter occurrence in the input text
///
/// `pos` counts characters (Unicode scalar values) and is the unit every span width is
/// measured in. `byte` is the matching byte offset, kept so segments can be sliced
/// without re-walking the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Boundary {
    pub pos: usize,
    pub byte: usize,
}

/// Record every position at which `delimiter` occurs in `text`, in order
pub fn locate_delimiters(text: &str, delimiter: char) -> Vec<Boundary> {
    let boundaries: Vec<Boundary> = text
        .char_indices()
        .enumerate()
        .filter(|(_, (_, c))| *c == delimiter)
        .map(|(pos, (byte, _))| Boundary { pos, byte })
        .collect();

    debug!(
        "Located {} occurrences of {:?} in {} bytes",
        boundaries.len(),
        delimiter,
        text.len()
    );
    boundaries
}
