// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::ControlFlow;

use crate::{AttributeKey, AttributeMapping, AttributeValue, TextRange};

/// A mutable sequence of characters where every position carries an [`AttributeMapping`].
///
/// Positions with identical mappings group into maximal *runs*. Formatters only see a buffer
/// through this trait: they read runs, then write back with the two mutation primitives,
/// [`add_attributes`](Self::add_attributes) and [`remove_attribute`](Self::remove_attribute).
///
/// The trait is object safe so that formatters can be used as `dyn` objects against any buffer
/// a host provides.
pub trait StyledBuffer {
    /// The length of the buffer, in bytes.
    fn len(&self) -> usize;

    /// Returns `true` if the buffer holds no text.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The mapping in effect at `index`, and the maximal run over which it is uniform.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. In particular, an empty buffer has no positions.
    fn attributes_at(&self, index: usize) -> (&AttributeMapping, TextRange);

    /// The value of `key` at `index`, and the maximal range over which that value (or its
    /// absence) is the same, regardless of other keys.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn attribute_at(
        &self,
        key: &AttributeKey,
        index: usize,
    ) -> (Option<&AttributeValue>, TextRange);

    /// Calls `f` for each maximal run overlapping `range`, in order, with the run clipped to
    /// `range`. Enumeration stops early when `f` returns [`ControlFlow::Break`].
    ///
    /// A zero-length range enumerates nothing.
    fn for_each_run(
        &self,
        range: TextRange,
        f: &mut dyn FnMut(TextRange, &AttributeMapping) -> ControlFlow<()>,
    );

    /// Sets every entry of `attributes` over `range`. Keys not in `attributes` are untouched.
    fn add_attributes(&mut self, range: TextRange, attributes: &AttributeMapping);

    /// Clears `key` over `range`.
    fn remove_attribute(&mut self, range: TextRange, key: &AttributeKey);
}
