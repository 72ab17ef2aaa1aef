// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use styled_buffer::{AttributeMapping, StyledBuffer, TextRange};

use crate::{AttributeApplier, AttributeRemover, AttributeVerifier};

/// A toggleable style, usable as a trait object.
///
/// Implemented by [`AttributeFormatter`]; hosts usually hold these as `Box<dyn Formatter>` (see
/// [`formatter_for`](crate::formatter_for)).
pub trait Formatter {
    /// Removes the attribute from `attributes` if present, otherwise applies it.
    ///
    /// Useful for the attributes of the next typed character, where there is no range to
    /// format yet.
    fn toggle_attributes(&self, attributes: &AttributeMapping) -> AttributeMapping;

    /// Toggles the attribute over `range`, returning the range actually formatted.
    ///
    /// Whether to apply or remove is decided from the style at the start of `range` only, even
    /// when the range spans runs in different states. An empty buffer always applies.
    fn toggle(&self, buffer: &mut dyn StyledBuffer, range: TextRange) -> TextRange;

    /// Applies the attribute over `range`, returning the range actually formatted.
    fn apply_attributes(&self, buffer: &mut dyn StyledBuffer, range: TextRange) -> TextRange;

    /// Removes the attribute over `range`, returning the range actually formatted.
    fn remove_attributes(&self, buffer: &mut dyn StyledBuffer, range: TextRange) -> TextRange;

    /// Returns `true` if the attribute is present in `attributes`.
    fn present(&self, attributes: &AttributeMapping) -> bool;

    /// Returns `true` if the attribute is present at `index`, clamped into the buffer.
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is empty.
    fn present_at(&self, buffer: &dyn StyledBuffer, index: usize) -> bool;

    /// Returns `true` if the attribute covers all of `range`.
    fn present_in_range(&self, buffer: &dyn StyledBuffer, range: TextRange) -> bool;
}

/// Joins one verifier, one applier and one remover into a [`Formatter`].
///
/// Most attributes implement all three roles on one type; [`AttributeFormatter::from_attribute`]
/// builds a formatter from such a type.
#[derive(Clone, Debug)]
pub struct AttributeFormatter<V, A, R> {
    verifier: V,
    applier: A,
    remover: R,
}

impl<V, A, R> AttributeFormatter<V, A, R>
where
    V: AttributeVerifier,
    A: AttributeApplier,
    R: AttributeRemover,
{
    /// Composes the three roles.
    pub fn new(verifier: V, applier: A, remover: R) -> Self {
        Self {
            verifier,
            applier,
            remover,
        }
    }

    /// The verifier.
    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    /// The applier.
    pub fn applier(&self) -> &A {
        &self.applier
    }

    /// The remover.
    pub fn remover(&self) -> &R {
        &self.remover
    }

    fn should_apply(&self, buffer: &dyn StyledBuffer, range: TextRange) -> bool {
        buffer.is_empty() || !self.verifier.present_at(buffer, range.start())
    }
}

impl<C: CompoundAttribute> AttributeFormatter<C, C, C> {
    /// A formatter whose three roles are all played by `attribute`.
    pub fn from_attribute(attribute: C) -> Self {
        Self::new(attribute.clone(), attribute.clone(), attribute)
    }
}

/// A type that can verify, apply and remove the same attribute.
pub trait CompoundAttribute:
    AttributeVerifier + AttributeApplier + AttributeRemover + Clone
{
}

impl<T> CompoundAttribute for T where
    T: AttributeVerifier + AttributeApplier + AttributeRemover + Clone
{
}

impl<V, A, R> Formatter for AttributeFormatter<V, A, R>
where
    V: AttributeVerifier,
    A: AttributeApplier,
    R: AttributeRemover,
{
    fn toggle_attributes(&self, attributes: &AttributeMapping) -> AttributeMapping {
        if self.verifier.present(attributes) {
            self.remover.remove(attributes)
        } else {
            self.applier.apply(attributes)
        }
    }

    fn toggle(&self, buffer: &mut dyn StyledBuffer, range: TextRange) -> TextRange {
        let apply = self.should_apply(&*buffer, range);
        log::debug!(
            "toggle over {:?}: {}",
            range.as_range(),
            if apply { "apply" } else { "remove" }
        );
        if apply {
            self.applier.apply_attributes(buffer, range)
        } else {
            self.remover.remove_attributes(buffer, range)
        }
    }

    fn apply_attributes(&self, buffer: &mut dyn StyledBuffer, range: TextRange) -> TextRange {
        self.applier.apply_attributes(buffer, range)
    }

    fn remove_attributes(&self, buffer: &mut dyn StyledBuffer, range: TextRange) -> TextRange {
        self.remover.remove_attributes(buffer, range)
    }

    fn present(&self, attributes: &AttributeMapping) -> bool {
        self.verifier.present(attributes)
    }

    fn present_at(&self, buffer: &dyn StyledBuffer, index: usize) -> bool {
        self.verifier.present_at(buffer, index)
    }

    fn present_in_range(&self, buffer: &dyn StyledBuffer, range: TextRange) -> bool {
        self.verifier.present_in_range(buffer, range)
    }
}
