//! Selection ranges inside a control's text value.
//!
//! Offsets count Unicode scalar values (`char`s), never bytes, so a range can
//! always be mapped back onto a `&str` without splitting a code point.

use std::fmt;
use std::str::FromStr;

use super::error::ParseSelectionError;

/// A `[start, end]` range of char offsets into a control's value.
///
/// `start <= end` always holds. Equal offsets describe a collapsed cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    start: usize,
    end: usize,
}

impl Selection {
    /// Create a selection, swapping the offsets if they are reversed.
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// A collapsed selection (plain cursor) at `pos`.
    pub fn cursor(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Whether start and end coincide.
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Number of chars covered by the range.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.is_collapsed()
    }

    /// Clamp both offsets to a value of `len` chars.
    pub fn clamp_to(self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_collapsed() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}:{}", self.start, self.end)
        }
    }
}

/// Parses `START` (collapsed cursor) or `START:END`.
impl FromStr for Selection {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseSelectionError::Empty);
        }

        let parse_offset = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| ParseSelectionError::InvalidOffset {
                    input: part.trim().to_string(),
                })
        };

        match s.split_once(':') {
            Some((start, end)) => Ok(Self::new(parse_offset(start)?, parse_offset(end)?)),
            None => Ok(Self::cursor(parse_offset(s)?)),
        }
    }
}

/// Byte index of the char at `char_offset`, or `s.len()` past the end.
pub(crate) fn byte_index(s: &str, char_offset: usize) -> usize {
    s.char_indices()
        .nth(char_offset)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}
