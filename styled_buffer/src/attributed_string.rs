// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::{ControlFlow, Range};

use crate::{
    AttributeKey, AttributeMapping, AttributeValue, Error, StyledBuffer, TextRange, TextStorage,
};

#[derive(Clone, Debug, PartialEq)]
struct Run {
    /// Exclusive end offset; the start is the previous run's end.
    end: usize,
    attributes: AttributeMapping,
}

/// A block of text stored as an arena of attribute runs.
///
/// Runs are non-empty, tile the text from `0` to `len`, and no two adjacent runs hold equal
/// mappings, so every run is maximal. Empty text has no runs.
///
/// ## Example
///
/// ```
/// use styled_buffer::{AttributeMapping, AttributedString, FontTraits, StyledBuffer};
///
/// let mut text = AttributedString::new("Hello world");
/// let mut bold = AttributeMapping::new();
/// bold.set_font_traits(FontTraits::BOLD);
///
/// let hello = text.range(0..5).unwrap();
/// text.add_attributes(hello, &bold);
///
/// let (attributes, run) = text.attributes_at(2);
/// assert_eq!(attributes.font_traits(), Some(FontTraits::BOLD));
/// assert_eq!(run.as_range(), 0..5);
/// assert_eq!(text.run_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct AttributedString<T: Debug + TextStorage> {
    text: T,
    runs: Vec<Run>,
}

impl<T: Debug + TextStorage> AttributedString<T> {
    /// Create an `AttributedString` with no attributes applied.
    pub fn new(text: T) -> Self {
        Self::with_attributes(text, AttributeMapping::new())
    }

    /// Create an `AttributedString` whose every position carries `attributes`.
    pub fn with_attributes(text: T, attributes: AttributeMapping) -> Self {
        let len = text.len();
        let runs = if len == 0 {
            Vec::new()
        } else {
            vec![Run {
                end: len,
                attributes,
            }]
        };
        Self { text, runs }
    }

    /// Borrow the underlying text storage.
    pub fn text(&self) -> &T {
        &self.text
    }

    /// Borrow the underlying text as `&str` when the storage is contiguous.
    pub fn as_str(&self) -> &str
    where
        T: AsRef<str>,
    {
        self.text.as_ref()
    }

    /// Validates a byte `range` against this text and returns a [`TextRange`].
    #[inline]
    pub fn range(&self, range: Range<usize>) -> Result<TextRange, Error> {
        TextRange::new(&self.text, range)
    }

    /// Sets `attributes` over the byte `range`, validating it first.
    pub fn add_attributes_bytes(
        &mut self,
        range: Range<usize>,
        attributes: &AttributeMapping,
    ) -> Result<(), Error> {
        let range = self.range(range)?;
        self.add_attributes(range, attributes);
        Ok(())
    }

    /// The number of maximal runs.
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Iterate over every run and its mapping, in text order.
    pub fn runs(&self) -> impl ExactSizeIterator<Item = (TextRange, &AttributeMapping)> {
        self.runs.iter().enumerate().map(|(ix, run)| {
            (
                TextRange::new_unchecked(self.run_start(ix), run.end),
                &run.attributes,
            )
        })
    }

    fn run_start(&self, ix: usize) -> usize {
        if ix == 0 { 0 } else { self.runs[ix - 1].end }
    }

    /// Index of the run containing `offset`; `runs.len()` when `offset >= len`.
    fn run_index(&self, offset: usize) -> usize {
        self.runs.partition_point(|run| run.end <= offset)
    }

    /// Makes `offset` a run boundary, splitting the run that straddles it.
    fn split_at(&mut self, offset: usize) {
        let ix = self.run_index(offset);
        if ix == self.runs.len() || self.run_start(ix) == offset {
            return;
        }
        let head = Run {
            end: offset,
            attributes: self.runs[ix].attributes.clone(),
        };
        self.runs.insert(ix, head);
    }

    /// Merges adjacent runs whose mappings became equal.
    fn coalesce(&mut self) {
        self.runs.dedup_by(|later, kept| {
            if later.attributes == kept.attributes {
                kept.end = later.end;
                true
            } else {
                false
            }
        });
    }

    fn update(&mut self, range: TextRange, mut f: impl FnMut(&mut AttributeMapping)) {
        debug_assert!(
            range.end() <= self.text.len(),
            "range {:?} out of bounds for len {}",
            range.as_range(),
            self.text.len()
        );
        if range.is_empty() {
            return;
        }
        self.split_at(range.start());
        self.split_at(range.end());
        let first = self.run_index(range.start());
        let last = self.run_index(range.end());
        for run in &mut self.runs[first..last] {
            f(&mut run.attributes);
        }
        self.coalesce();
    }

    fn check_index(&self, index: usize) -> usize {
        assert!(
            index < self.text.len(),
            "index {index} out of bounds for styled text of len {}",
            self.text.len()
        );
        self.run_index(index)
    }
}

impl<T: Debug + TextStorage> StyledBuffer for AttributedString<T> {
    fn len(&self) -> usize {
        self.text.len()
    }

    fn attributes_at(&self, index: usize) -> (&AttributeMapping, TextRange) {
        let ix = self.check_index(index);
        let run = &self.runs[ix];
        (
            &run.attributes,
            TextRange::new_unchecked(self.run_start(ix), run.end),
        )
    }

    fn attribute_at(
        &self,
        key: &AttributeKey,
        index: usize,
    ) -> (Option<&AttributeValue>, TextRange) {
        let ix = self.check_index(index);
        let probe = &self.runs[ix].attributes;
        let mut first = ix;
        while first > 0 && self.runs[first - 1].attributes.same_value(probe, key) {
            first -= 1;
        }
        let mut last = ix;
        while last + 1 < self.runs.len() && self.runs[last + 1].attributes.same_value(probe, key)
        {
            last += 1;
        }
        (
            probe.get(key),
            TextRange::new_unchecked(self.run_start(first), self.runs[last].end),
        )
    }

    fn for_each_run(
        &self,
        range: TextRange,
        f: &mut dyn FnMut(TextRange, &AttributeMapping) -> ControlFlow<()>,
    ) {
        if range.is_empty() {
            return;
        }
        let mut ix = self.run_index(range.start());
        while ix < self.runs.len() {
            let run = TextRange::new_unchecked(self.run_start(ix), self.runs[ix].end);
            let Some(clipped) = run.intersection(range) else {
                break;
            };
            if f(clipped, &self.runs[ix].attributes).is_break() {
                break;
            }
            ix += 1;
        }
    }

    fn add_attributes(&mut self, range: TextRange, attributes: &AttributeMapping) {
        self.update(range, |mapping| mapping.merge(attributes));
    }

    fn remove_attribute(&mut self, range: TextRange, key: &AttributeKey) {
        self.update(range, |mapping| {
            mapping.remove(key);
        });
    }
}
