//! Locating line-delimited front matter blocks (`+++` / `---`) in raw bytes.

use std::ops::Range;

use crate::error::{Error, Result};

/// Byte offsets of a delimited front matter block.
///
/// Both ranges cover a whole delimiter line, including its line ending when
/// one is present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub open: Range<usize>,
    pub close: Range<usize>,
}

impl Block {
    /// The bytes between the two delimiter lines.
    pub fn content(&self) -> Range<usize> {
        self.open.end..self.close.start
    }

    pub fn body_start(&self) -> usize {
        self.close.end
    }
}

/// Splits `input` into lines, yielding each line's range including its `\n`.
fn lines(input: &[u8]) -> impl Iterator<Item = Range<usize>> + '_ {
    let mut start = 0;

    input.split_inclusive(|&b| b == b'\n').map(move |line| {
        let range = start..start + line.len();
        start = range.end;
        range
    })
}

fn is_blank(line: &[u8]) -> bool {
    line.iter().all(u8::is_ascii_whitespace)
}

/// The first non-blank line of `input`, trimmed of surrounding whitespace.
pub fn first_line(input: &[u8]) -> Option<&[u8]> {
    lines(input)
        .map(|range| &input[range])
        .find(|line| !is_blank(line))
        .map(<[u8]>::trim_ascii)
}

/// Finds a block opened and closed by a line consisting solely of `marker`.
///
/// Leading blank lines are skipped; anything else before the opening line
/// means there is no block.
pub fn find_block(input: &[u8], marker: &'static str) -> Result<Block> {
    let marker_bytes = marker.as_bytes();
    let mut lines = lines(input).skip_while(|range| is_blank(&input[range.clone()]));

    let open = lines
        .next()
        .filter(|range| input[range.clone()].trim_ascii() == marker_bytes)
        .ok_or(Error::MissingOpening { marker })?;

    let close = lines
        .find(|range| input[range.clone()].trim_ascii() == marker_bytes)
        .ok_or(Error::MissingClosing { marker })?;

    Ok(Block { open, close })
}
