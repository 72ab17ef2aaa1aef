// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use styled_buffer::{AttributeMapping, StyledBuffer, TextRange};

use crate::base;

/// Tests whether a compound attribute is present.
///
/// Presence in a single [`AttributeMapping`] is the one thing an implementation decides; the
/// position and range queries are derived from it in [`base`].
pub trait AttributeVerifier {
    /// Returns `true` if the attribute is present in `attributes`.
    fn present(&self, attributes: &AttributeMapping) -> bool;

    /// Returns `true` if the attribute is present at `index`, clamped into the buffer.
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is empty.
    fn present_at(&self, buffer: &dyn StyledBuffer, index: usize) -> bool {
        base::present_at(self, buffer, index)
    }

    /// Returns `true` if the attribute is present over all of `range`.
    ///
    /// See [`base::present_in_range`].
    fn present_in_range(&self, buffer: &dyn StyledBuffer, range: TextRange) -> bool {
        base::present_in_range(self, buffer, range)
    }
}
