// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use styled_buffer::{
    Attribute, AttributeKey, AttributeMapping, AttributeValue, Error, Representation,
    RepresentationKey,
};

use crate::{
    AttributeApplier, AttributeFormatter, AttributeRanger, AttributeRemover, AttributeVerifier,
};

/// A single-valued attribute such as an underline style or a color.
///
/// Applying stores the configured value under its key; removing clears the key; presence is the
/// key being set to anything. The application range is never adjusted.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardAttribute {
    attribute: Attribute,
    representation_key: RepresentationKey,
}

/// A [`Formatter`](crate::Formatter) for a [`StandardAttribute`].
pub type StandardAttributeFormatter =
    AttributeFormatter<StandardAttribute, StandardAttribute, StandardAttribute>;

impl StandardAttribute {
    /// Stores `value` under `key`; fails if `key` does not accept that kind of value.
    pub fn new(
        key: AttributeKey,
        value: AttributeValue,
        representation_key: RepresentationKey,
    ) -> Result<Self, Error> {
        Ok(Self::from_attribute(
            Attribute::new(key, value)?,
            representation_key,
        ))
    }

    /// Stores an already validated `attribute`.
    pub fn from_attribute(attribute: Attribute, representation_key: RepresentationKey) -> Self {
        Self {
            attribute,
            representation_key,
        }
    }

    /// A single underline.
    pub fn underline() -> Self {
        Self::from_attribute(Attribute::underline(1), RepresentationKey::Underline)
    }

    /// A single strikethrough line.
    pub fn strikethrough() -> Self {
        Self::from_attribute(Attribute::strikethrough(1), RepresentationKey::Strikethrough)
    }

    /// The key this attribute sets.
    pub fn key(&self) -> &AttributeKey {
        self.attribute.key()
    }

    /// The value this attribute sets.
    pub fn value(&self) -> &AttributeValue {
        self.attribute.value()
    }

    /// Where this attribute's representation is kept.
    pub fn representation_key(&self) -> &RepresentationKey {
        &self.representation_key
    }
}

impl AttributeVerifier for StandardAttribute {
    fn present(&self, attributes: &AttributeMapping) -> bool {
        attributes.contains_key(self.key())
    }
}

impl AttributeRanger for StandardAttribute {}

impl AttributeApplier for StandardAttribute {
    fn apply_storing(
        &self,
        attributes: &AttributeMapping,
        representation: Option<Representation>,
    ) -> AttributeMapping {
        let mut result = attributes.clone();
        result.set(self.attribute.clone());
        result.set_representation(&self.representation_key, representation);
        result
    }
}

impl AttributeRemover for StandardAttribute {
    fn remove(&self, attributes: &AttributeMapping) -> AttributeMapping {
        let mut result = attributes.clone();
        result.remove(self.key());
        result.set_representation(&self.representation_key, None);
        result
    }
}

impl StandardAttributeFormatter {
    /// A formatter storing `value` under `key`; fails if `key` does not accept that kind of
    /// value.
    pub fn standard(
        key: AttributeKey,
        value: AttributeValue,
        representation_key: RepresentationKey,
    ) -> Result<Self, Error> {
        StandardAttribute::new(key, value, representation_key).map(Self::from_attribute)
    }
}
