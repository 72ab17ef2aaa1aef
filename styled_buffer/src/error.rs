// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{AttributeKey, TextStorage, ValueKind};

/// Rich error type for styled buffer operations.
///
/// Carries a non-exhaustive [`ErrorKind`] plus whichever context applies: the attempted range for
/// range validation failures, the enclosing UTF-8 character span for boundary failures, and the
/// offending key and value kinds for attribute type mismatches.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    range: Option<RangeContext>,
    boundary: Option<BoundaryInfo>,
    mismatch: Option<ValueMismatch>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The caller-provided range and text length, for range validation errors.
    pub fn range(&self) -> Option<RangeContext> {
        self.range
    }

    /// Extra details for boundary-related errors, if available.
    pub fn boundary(&self) -> Option<BoundaryInfo> {
        self.boundary
    }

    /// The rejected key and value kinds, for [`ErrorKind::TypeMismatch`].
    pub fn mismatch(&self) -> Option<&ValueMismatch> {
        self.mismatch.as_ref()
    }

    fn with_range(kind: ErrorKind, start: usize, end: usize, len: usize) -> Self {
        Self {
            kind,
            range: Some(RangeContext { start, end, len }),
            boundary: None,
            mismatch: None,
        }
    }

    pub(crate) fn invalid_bounds(start: usize, end: usize, len: usize) -> Self {
        Self::with_range(ErrorKind::InvalidBounds, start, end, len)
    }

    pub(crate) fn invalid_range(start: usize, end: usize, len: usize) -> Self {
        Self::with_range(ErrorKind::InvalidRange, start, end, len)
    }

    pub(crate) fn not_on_char_boundary<T: TextStorage>(
        text: &T,
        start: usize,
        end: usize,
        len: usize,
        which: Endpoint,
        index: usize,
    ) -> Self {
        let (cs, ce) = enclosing_char_span(text, index).unwrap_or((index, index));
        Self {
            boundary: Some(BoundaryInfo {
                which,
                index,
                char_start: cs,
                char_end: ce,
            }),
            ..Self::with_range(ErrorKind::NotOnCharBoundary, start, end, len)
        }
    }

    pub(crate) fn type_mismatch(key: AttributeKey, expected: ValueKind, found: ValueKind) -> Self {
        Self {
            kind: ErrorKind::TypeMismatch,
            range: None,
            boundary: None,
            mismatch: Some(ValueMismatch {
                key,
                expected,
                found,
            }),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match (self.kind, self.range) {
            (ErrorKind::InvalidBounds, Some(r)) => write!(
                f,
                "range {}..{} out of bounds for len {}",
                r.start, r.end, r.len
            ),
            (ErrorKind::InvalidRange, Some(r)) => {
                write!(f, "invalid range {}..{}: start > end", r.start, r.end)
            }
            (ErrorKind::NotOnCharBoundary, Some(r)) => match self.boundary {
                Some(b) => {
                    let which = match b.which {
                        Endpoint::Start => "start",
                        Endpoint::End => "end",
                    };
                    write!(
                        f,
                        "range {}..{}: {} index {} not on UTF-8 boundary (char {}..{})",
                        r.start, r.end, which, b.index, b.char_start, b.char_end
                    )
                }
                None => write!(f, "range {}..{} not on UTF-8 boundary", r.start, r.end),
            },
            (ErrorKind::TypeMismatch, _) => match &self.mismatch {
                Some(m) => write!(
                    f,
                    "attribute {:?} expects a {:?} value, got {:?}",
                    m.key, m.expected, m.found
                ),
                None => f.write_str("attribute value has the wrong type"),
            },
            (kind, None) => write!(f, "{kind:?}"),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Provided range indices were out of bounds relative to the text length.
    InvalidBounds,

    /// The provided range had `start > end`.
    InvalidRange,

    /// Either `start` or `end` was not aligned to a UTF-8 character boundary.
    NotOnCharBoundary,

    /// A value was stored under a key that requires a different kind of value.
    TypeMismatch,
}

/// The range a caller attempted to use, and the text length it was checked against.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RangeContext {
    /// The start byte index of the caller-provided range.
    pub start: usize,

    /// The end byte index (exclusive) of the caller-provided range.
    pub end: usize,

    /// The length in bytes of the underlying text at the time of failure.
    pub len: usize,
}

/// Identifies which endpoint of a range failed boundary validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The `start` endpoint of the range.
    Start,

    /// The `end` endpoint of the range.
    End,
}

/// Details about an offending index that was not on a UTF-8 character boundary.
///
/// Returned by [`Error::boundary`] when the error kind is
/// [`ErrorKind::NotOnCharBoundary`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundaryInfo {
    /// Which endpoint (`start` or `end`) was invalid.
    pub which: Endpoint,

    /// The offending byte index.
    pub index: usize,

    /// The start byte index of the enclosing UTF-8 codepoint.
    pub char_start: usize,

    /// The end byte index (exclusive) of the enclosing UTF-8 codepoint.
    pub char_end: usize,
}

/// A value of the wrong kind offered for a well-known attribute key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueMismatch {
    /// The key the value was destined for.
    pub key: AttributeKey,

    /// The kind of value the key accepts.
    pub expected: ValueKind,

    /// The kind of value that was offered.
    pub found: ValueKind,
}

fn enclosing_char_span<T: TextStorage>(text: &T, index: usize) -> Option<(usize, usize)> {
    let len = text.len();
    if index > len {
        return None;
    }
    let start = text.floor_char_boundary(index);
    if start == index {
        return Some((index, index));
    }

    // Next boundary (max 3 bytes forward)
    let mut e = index;
    for _ in 0..4 {
        if e >= len {
            break;
        }
        e += 1;
        if text.is_char_boundary(e) {
            break;
        }
    }

    Some((start, e))
}
