// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use styled_buffer::{
    AttributeKey, AttributeMapping, HeaderLevel, ParagraphProperty, ParagraphStyle,
    PropertyType, Representation,
};

use crate::{AttributeApplier, AttributeRanger, AttributeRemover, AttributeVerifier};

/// Returns a copy of `attributes` whose paragraph style has been passed through `edit`.
///
/// The existing style is shared with `attributes` until written, so `attributes` itself is never
/// modified. A style left with no properties is removed rather than stored empty.
fn with_paragraph_style(
    attributes: &AttributeMapping,
    edit: impl FnOnce(&mut ParagraphStyle),
) -> AttributeMapping {
    let mut style = attributes.paragraph_style().cloned().unwrap_or_default();
    edit(Arc::make_mut(&mut style));
    let mut result = attributes.clone();
    if style.is_empty() {
        result.remove(&AttributeKey::ParagraphStyle);
    } else {
        result.set_paragraph_style(style);
    }
    result
}

fn has_property(attributes: &AttributeMapping, ty: PropertyType) -> bool {
    attributes
        .paragraph_style()
        .is_some_and(|style| style.contains(ty))
}

/// A block quotation.
///
/// Applying appends a blockquote property unless the paragraph is already quoted, so repeated
/// applications converge. Removal strips every level, including nested quotes that arrived from
/// markup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockquoteAttribute;

impl AttributeVerifier for BlockquoteAttribute {
    fn present(&self, attributes: &AttributeMapping) -> bool {
        has_property(attributes, PropertyType::Blockquote)
    }
}

impl AttributeRanger for BlockquoteAttribute {}

impl AttributeApplier for BlockquoteAttribute {
    fn apply_storing(
        &self,
        attributes: &AttributeMapping,
        representation: Option<Representation>,
    ) -> AttributeMapping {
        if self.present(attributes) {
            return attributes.clone();
        }
        with_paragraph_style(attributes, |style| {
            style.append_property(ParagraphProperty::Blockquote { representation });
        })
    }
}

impl AttributeRemover for BlockquoteAttribute {
    fn remove(&self, attributes: &AttributeMapping) -> AttributeMapping {
        if !self.present(attributes) {
            return attributes.clone();
        }
        with_paragraph_style(attributes, |style| {
            style.remove_properties(PropertyType::Blockquote);
        })
    }
}

/// A heading of one particular level.
///
/// Presence requires the innermost heading to have the configured level. Applying appends a
/// heading of that level as the innermost one and leaves headings of other levels in place, so
/// removing it again restores whatever heading the paragraph had before. Removal only strips
/// headings of the configured level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderAttribute {
    level: HeaderLevel,
}

impl HeaderAttribute {
    /// A heading at `level`.
    pub fn new(level: HeaderLevel) -> Self {
        Self { level }
    }

    /// The configured level.
    pub fn level(&self) -> HeaderLevel {
        self.level
    }

    fn is_own_level(&self, property: &ParagraphProperty) -> bool {
        matches!(property, ParagraphProperty::Header { level, .. } if *level == self.level)
    }
}

impl AttributeVerifier for HeaderAttribute {
    fn present(&self, attributes: &AttributeMapping) -> bool {
        attributes
            .paragraph_style()
            .and_then(|style| style.header_level())
            == Some(self.level)
    }
}

impl AttributeRanger for HeaderAttribute {}

impl AttributeApplier for HeaderAttribute {
    fn apply_storing(
        &self,
        attributes: &AttributeMapping,
        representation: Option<Representation>,
    ) -> AttributeMapping {
        if self.present(attributes) {
            return attributes.clone();
        }
        with_paragraph_style(attributes, |style| {
            style.retain_properties(|p| !self.is_own_level(p));
            style.append_property(ParagraphProperty::Header {
                level: self.level,
                representation,
            });
        })
    }
}

impl AttributeRemover for HeaderAttribute {
    fn remove(&self, attributes: &AttributeMapping) -> AttributeMapping {
        if !self.present(attributes) {
            return attributes.clone();
        }
        with_paragraph_style(attributes, |style| {
            style.retain_properties(|p| !self.is_own_level(p));
        })
    }
}
