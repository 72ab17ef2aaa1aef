// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

use crate::Representation;

/// A heading level, `<h1>` through `<h6>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeaderLevel {
    /// `<h1>`.
    H1,
    /// `<h2>`.
    H2,
    /// `<h3>`.
    H3,
    /// `<h4>`.
    H4,
    /// `<h5>`.
    H5,
    /// `<h6>`.
    H6,
}

impl HeaderLevel {
    /// The numeric level, 1 through 6.
    pub const fn level(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
            Self::H5 => 5,
            Self::H6 => 6,
        }
    }

    /// The level for `1..=6`.
    pub const fn from_level(level: u8) -> Option<Self> {
        Some(match level {
            1 => Self::H1,
            2 => Self::H2,
            3 => Self::H3,
            4 => Self::H4,
            5 => Self::H5,
            6 => Self::H6,
            _ => return None,
        })
    }
}

/// One paragraph-level property, with the markup it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParagraphProperty {
    /// The paragraph is (one level of) a block quotation.
    Blockquote {
        /// Original markup, if any.
        representation: Option<Representation>,
    },
    /// The paragraph is a heading.
    Header {
        /// The heading level.
        level: HeaderLevel,
        /// Original markup, if any.
        representation: Option<Representation>,
    },
}

impl ParagraphProperty {
    /// The type of this property, ignoring its payload.
    pub fn property_type(&self) -> PropertyType {
        match self {
            Self::Blockquote { .. } => PropertyType::Blockquote,
            Self::Header { .. } => PropertyType::Header,
        }
    }

    /// The markup representation carried by this property.
    pub fn representation(&self) -> Option<&Representation> {
        match self {
            Self::Blockquote { representation } | Self::Header { representation, .. } => {
                representation.as_ref()
            }
        }
    }
}

/// The type of a [`ParagraphProperty`], used for membership queries and removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyType {
    /// [`ParagraphProperty::Blockquote`].
    Blockquote,
    /// [`ParagraphProperty::Header`].
    Header,
}

/// An ordered list of paragraph properties.
///
/// Nesting is expressed by order: two blockquote entries mean a quote within a quote. Values of
/// this type are stored behind an `Arc` in [`AttributeValue::ParagraphStyle`], so cloning a
/// mapping shares them and [`Arc::make_mut`] gives copy-on-write.
///
/// [`AttributeValue::ParagraphStyle`]: crate::AttributeValue::ParagraphStyle
/// [`Arc::make_mut`]: alloc::sync::Arc::make_mut
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParagraphStyle {
    properties: SmallVec<[ParagraphProperty; 2]>,
}

impl ParagraphStyle {
    /// Creates a paragraph style with no properties.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The properties, outermost first.
    #[inline]
    pub fn properties(&self) -> &[ParagraphProperty] {
        &self.properties
    }

    /// Returns `true` if there are no properties.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Appends `property` as the innermost property.
    pub fn append_property(&mut self, property: ParagraphProperty) {
        self.properties.push(property);
    }

    /// Removes every property of type `ty`, returning how many were removed.
    pub fn remove_properties(&mut self, ty: PropertyType) -> usize {
        self.retain_properties(|p| p.property_type() != ty)
    }

    /// Keeps only the properties for which `keep` returns `true`, preserving their order.
    ///
    /// Returns how many were removed.
    pub fn retain_properties(&mut self, mut keep: impl FnMut(&ParagraphProperty) -> bool) -> usize {
        let before = self.properties.len();
        self.properties.retain(|p| keep(p));
        before - self.properties.len()
    }

    /// Returns `true` if at least one property of type `ty` is present.
    pub fn contains(&self, ty: PropertyType) -> bool {
        self.properties.iter().any(|p| p.property_type() == ty)
    }

    /// Iterates the properties of type `ty`, outermost first.
    pub fn properties_of(&self, ty: PropertyType) -> impl Iterator<Item = &ParagraphProperty> {
        self.properties
            .iter()
            .filter(move |p| p.property_type() == ty)
    }

    /// The number of nested blockquotes.
    pub fn blockquote_depth(&self) -> usize {
        self.properties_of(PropertyType::Blockquote).count()
    }

    /// The level of the innermost heading, if any.
    pub fn header_level(&self) -> Option<HeaderLevel> {
        self.properties.iter().rev().find_map(|p| match p {
            ParagraphProperty::Header { level, .. } => Some(*level),
            ParagraphProperty::Blockquote { .. } => None,
        })
    }
}
