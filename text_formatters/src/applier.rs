// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use styled_buffer::{AttributeMapping, Representation, StyledBuffer, TextRange};

use crate::base;

/// Decides which part of a buffer an attribute change actually covers.
pub trait AttributeRanger {
    /// The range that a change requested over `range` takes effect on.
    ///
    /// The default is `range` itself. Attributes that must cover a whole existing span, such as
    /// one tied to a recorded representation, grow or shrink the request to that span.
    fn application_range(&self, range: TextRange, buffer: &dyn StyledBuffer) -> TextRange {
        let _ = buffer;
        range
    }
}

/// Adds a compound attribute.
pub trait AttributeApplier: AttributeRanger {
    /// Returns a copy of `attributes` with the compound attribute applied, keeping
    /// `representation` (when given) as the record of its original markup.
    ///
    /// Must not depend on anything but its inputs.
    fn apply_storing(
        &self,
        attributes: &AttributeMapping,
        representation: Option<Representation>,
    ) -> AttributeMapping;

    /// Returns a copy of `attributes` with the compound attribute applied.
    fn apply(&self, attributes: &AttributeMapping) -> AttributeMapping {
        self.apply_storing(attributes, None)
    }

    /// Applies the attribute to every run of `buffer` inside the application range of `range`,
    /// returning that application range.
    fn apply_attributes(&self, buffer: &mut dyn StyledBuffer, range: TextRange) -> TextRange {
        base::apply_attributes(self, buffer, range)
    }
}
