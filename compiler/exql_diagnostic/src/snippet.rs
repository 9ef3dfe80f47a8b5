//! Source context windows with a caret pointer.

use std::fmt;

/// Bytes of context kept on each side of an error offset.
pub const CONTEXT_RADIUS: usize = 20;

/// A window of source text around an error position.
///
/// The window spans at most [`CONTEXT_RADIUS`] bytes either side of the
/// offset, widened or narrowed to the nearest UTF-8 character boundary.
/// Line breaks and tabs are rendered as spaces so the caret lines up.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Snippet {
    /// The context text.
    pub text: String,
    /// Column of the caret within `text`, counted in characters.
    pub caret: usize,
}

impl Snippet {
    /// Build the window around `offset` in `source`.
    ///
    /// Offsets past the end of the source point just after the last byte.
    pub fn around(source: &str, offset: usize) -> Self {
        let offset = floor_char_boundary(source, offset.min(source.len()));
        let start = floor_char_boundary(source, offset.saturating_sub(CONTEXT_RADIUS));
        let end = ceil_char_boundary(source, (offset + CONTEXT_RADIUS).min(source.len()));

        let text = source[start..end]
            .chars()
            .map(|c| if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c })
            .collect();
        let caret = source[start..offset].chars().count();

        Snippet { text, caret }
    }
}

fn floor_char_boundary(source: &str, mut index: usize) -> usize {
    while index > 0 && !source.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn ceil_char_boundary(source: &str, mut index: usize) -> usize {
    while index < source.len() && !source.is_char_boundary(index) {
        index += 1;
    }
    index
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.text)?;
        write!(f, "{:width$}^", "", width = self.caret)
    }
}
