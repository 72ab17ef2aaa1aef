// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{Endpoint, Error, TextStorage};

/// A validated, half-open byte range into a styled buffer.
///
/// Invariants, checked once by [`TextRange::new`]:
///
/// - `start <= end`
/// - `start` and `end` are within the text bounds
/// - `start` and `end` lie on UTF-8 codepoint boundaries
///
/// A zero-length range denotes a caret position rather than a selection. Formatting operations
/// accept such ranges as ordinary input.
///
/// `TextRange` does not record which text it was validated against; only reuse it with the same
/// buffer.
///
/// ## Example
///
/// ```
/// use styled_buffer::{AttributedString, TextRange};
///
/// let text = AttributedString::new("Hello!");
/// let range = TextRange::new(text.text(), 0..5).unwrap();
/// assert_eq!(range.len(), 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// Returns a validated `TextRange` for the provided text.
    #[inline]
    pub fn new<T: TextStorage>(text: &T, range: Range<usize>) -> Result<Self, Error> {
        validate_range(text, &range)?;
        Ok(Self {
            start: range.start,
            end: range.end,
        })
    }

    /// Creates a `TextRange` without validation.
    ///
    /// This is intended for callers that already maintain range invariants, such as ranges
    /// derived from run boundaries.
    #[must_use]
    #[inline]
    pub const fn new_unchecked(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A zero-length range at `index`.
    #[must_use]
    #[inline]
    pub const fn caret(index: usize) -> Self {
        Self {
            start: index,
            end: index,
        }
    }

    /// The start byte offset.
    #[must_use]
    #[inline]
    pub const fn start(self) -> usize {
        self.start
    }

    /// The end byte offset (exclusive).
    #[must_use]
    #[inline]
    pub const fn end(self) -> usize {
        self.end
    }

    /// The length of the range in bytes.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    /// Returns `true` for a caret (zero-length) range.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// The overlap of two ranges, or `None` when they share no bytes.
    #[must_use]
    pub fn intersection(self, other: Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(Self { start, end })
    }

    /// Returns this range as a `Range<usize>`.
    #[must_use]
    #[inline]
    pub fn as_range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<TextRange> for Range<usize> {
    #[inline]
    fn from(value: TextRange) -> Self {
        value.as_range()
    }
}

#[inline]
pub(crate) fn validate_range<T: TextStorage>(text: &T, range: &Range<usize>) -> Result<(), Error> {
    let text_len = text.len();
    if range.start > range.end {
        return Err(Error::invalid_range(range.start, range.end, text_len));
    }
    if range.start > text_len || range.end > text_len {
        return Err(Error::invalid_bounds(range.start, range.end, text_len));
    }
    for (which, index) in [(Endpoint::Start, range.start), (Endpoint::End, range.end)] {
        if !text.is_char_boundary(index) {
            return Err(Error::not_on_char_boundary(
                text, range.start, range.end, text_len, which, index,
            ));
        }
    }
    Ok(())
}
