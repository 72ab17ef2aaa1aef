// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use styled_buffer::{
    AttributeKey, AttributeMapping, FontTraits, Representation, RepresentationKey, StyledBuffer,
    TextRange,
};

use crate::{AttributeApplier, AttributeRanger, AttributeRemover, AttributeVerifier};

/// A style expressed as font traits, such as bold or italic.
///
/// Applying adds the traits to whatever the run already has; removing strips only these traits.
/// When no trait is left the font traits key is cleared entirely, so apply followed by remove
/// leaves no residue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontAttribute {
    traits: FontTraits,
    representation_key: RepresentationKey,
}

impl FontAttribute {
    /// Toggles `traits`, keeping representations under `representation_key`.
    pub fn new(traits: FontTraits, representation_key: RepresentationKey) -> Self {
        Self {
            traits,
            representation_key,
        }
    }

    /// Bold.
    pub fn bold() -> Self {
        Self::new(FontTraits::BOLD, RepresentationKey::Bold)
    }

    /// Italic.
    pub fn italic() -> Self {
        Self::new(FontTraits::ITALIC, RepresentationKey::Italic)
    }

    /// The traits this attribute toggles.
    pub fn traits(&self) -> FontTraits {
        self.traits
    }
}

impl AttributeVerifier for FontAttribute {
    fn present(&self, attributes: &AttributeMapping) -> bool {
        attributes
            .font_traits()
            .is_some_and(|traits| traits.contains(self.traits))
    }
}

impl AttributeRanger for FontAttribute {}

impl AttributeApplier for FontAttribute {
    fn apply_storing(
        &self,
        attributes: &AttributeMapping,
        representation: Option<Representation>,
    ) -> AttributeMapping {
        let current = attributes.font_traits().unwrap_or_default();
        let mut result = attributes.clone();
        result.set_font_traits(current | self.traits);
        result.set_representation(&self.representation_key, representation);
        result
    }
}

impl AttributeRemover for FontAttribute {
    fn remove(&self, attributes: &AttributeMapping) -> AttributeMapping {
        let mut result = attributes.clone();
        if let Some(current) = attributes.font_traits() {
            result.set_font_traits(current.difference(self.traits));
        }
        result.set_representation(&self.representation_key, None);
        result
    }
}

/// A citation: italic text whose extent is defined by its recorded `<cite>` representation.
///
/// The application range snaps to the span over which the cite representation (or its absence)
/// is uniform at the start of the request, so toggling part of a citation affects all of it.
/// The same holds for plain text: citing part of an uncited stretch cites the whole stretch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CiteAttribute {
    font: FontAttribute,
}

impl CiteAttribute {
    /// Italic traits with representations under [`RepresentationKey::Cite`].
    pub fn new() -> Self {
        Self {
            font: FontAttribute::new(FontTraits::ITALIC, RepresentationKey::Cite),
        }
    }
}

impl Default for CiteAttribute {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeVerifier for CiteAttribute {
    fn present(&self, attributes: &AttributeMapping) -> bool {
        self.font.present(attributes)
    }
}

impl AttributeRanger for CiteAttribute {
    fn application_range(&self, range: TextRange, buffer: &dyn StyledBuffer) -> TextRange {
        if buffer.is_empty() {
            return range;
        }
        let probe = range.start().min(buffer.len() - 1);
        let key = AttributeKey::Representation(RepresentationKey::Cite);
        buffer.attribute_at(&key, probe).1
    }
}

impl AttributeApplier for CiteAttribute {
    fn apply_storing(
        &self,
        attributes: &AttributeMapping,
        representation: Option<Representation>,
    ) -> AttributeMapping {
        self.font.apply_storing(attributes, representation)
    }
}

impl AttributeRemover for CiteAttribute {
    fn remove(&self, attributes: &AttributeMapping) -> AttributeMapping {
        self.font.remove(attributes)
    }
}
