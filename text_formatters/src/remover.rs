// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use styled_buffer::{AttributeMapping, StyledBuffer, TextRange};

use crate::{AttributeRanger, base};

/// Removes a compound attribute.
pub trait AttributeRemover: AttributeRanger {
    /// Returns a copy of `attributes` without the compound attribute or its representation.
    ///
    /// Every other entry is carried over unchanged. Removing an absent attribute returns an
    /// equal mapping.
    fn remove(&self, attributes: &AttributeMapping) -> AttributeMapping;

    /// Removes the attribute from every run of `buffer` inside the application range of
    /// `range`, returning that application range.
    fn remove_attributes(&self, buffer: &mut dyn StyledBuffer, range: TextRange) -> TextRange {
        base::remove_attributes(self, buffer, range)
    }
}
