// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use hashbrown::HashMap;

use crate::{
    Attribute, AttributeKey, AttributeValue, Error, FontTraits, ParagraphStyle, Representation,
    RepresentationKey,
};

/// The style state of one character position or one run: attribute keys mapped to values.
///
/// Every entry was admitted through [`Attribute`], so the value stored under a well-known key
/// always has the kind that key expects and the typed accessors below never have to guess.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeMapping {
    entries: HashMap<AttributeKey, AttributeValue>,
}

impl AttributeMapping {
    /// Creates an empty mapping.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of keys set.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no key is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The value stored under `key`.
    #[inline]
    pub fn get(&self, key: &AttributeKey) -> Option<&AttributeValue> {
        self.entries.get(key)
    }

    /// Returns `true` if `key` is set.
    #[inline]
    pub fn contains_key(&self, key: &AttributeKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Stores a validated attribute, returning the value it replaced.
    pub fn set(&mut self, attribute: Attribute) -> Option<AttributeValue> {
        let (key, value) = attribute.into_parts();
        self.entries.insert(key, value)
    }

    /// Validates and stores `value` under `key`, returning the value it replaced.
    pub fn insert(
        &mut self,
        key: AttributeKey,
        value: AttributeValue,
    ) -> Result<Option<AttributeValue>, Error> {
        Attribute::new(key, value).map(|attribute| self.set(attribute))
    }

    /// Copies every entry of `other` into this mapping, overwriting keys both share.
    ///
    /// Keys that are only in `self` are kept; this never clears anything.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// Removes `key`, returning its value.
    #[inline]
    pub fn remove(&mut self, key: &AttributeKey) -> Option<AttributeValue> {
        self.entries.remove(key)
    }

    /// Iterates the keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &AttributeKey> {
        self.entries.keys()
    }

    /// Iterates the entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&AttributeKey, &AttributeValue)> {
        self.entries.iter()
    }

    /// Returns `true` if `key` maps to the same value (or is absent) in both mappings.
    pub fn same_value(&self, other: &Self, key: &AttributeKey) -> bool {
        self.get(key) == other.get(key)
    }

    /// The font traits, if set.
    pub fn font_traits(&self) -> Option<FontTraits> {
        match self.get(&AttributeKey::FontTraits)? {
            AttributeValue::FontTraits(traits) => Some(*traits),
            _ => None,
        }
    }

    /// Sets the font traits, clearing the key when `traits` is empty.
    pub fn set_font_traits(&mut self, traits: FontTraits) {
        if traits.is_empty() {
            self.remove(&AttributeKey::FontTraits);
        } else {
            self.set(Attribute::font_traits(traits));
        }
    }

    /// The shared paragraph style, if set.
    ///
    /// Clone the `Arc` and use [`Arc::make_mut`] to derive a modified copy without touching
    /// this mapping.
    pub fn paragraph_style(&self) -> Option<&Arc<ParagraphStyle>> {
        match self.get(&AttributeKey::ParagraphStyle)? {
            AttributeValue::ParagraphStyle(style) => Some(style),
            _ => None,
        }
    }

    /// Stores a paragraph style.
    pub fn set_paragraph_style(&mut self, style: Arc<ParagraphStyle>) {
        self.set(Attribute::paragraph_style(style));
    }

    /// The representation stored under `key`, if any.
    pub fn representation(&self, key: &RepresentationKey) -> Option<&Representation> {
        match self.get(&AttributeKey::Representation(key.clone()))? {
            AttributeValue::Representation(representation) => Some(representation),
            _ => None,
        }
    }

    /// Stores `representation` under `key`, or clears `key` when `None`.
    pub fn set_representation(
        &mut self,
        key: &RepresentationKey,
        representation: Option<Representation>,
    ) {
        match representation {
            Some(representation) => {
                self.set(Attribute::representation(key.clone(), representation));
            }
            None => {
                self.remove(&AttributeKey::Representation(key.clone()));
            }
        }
    }
}

impl FromIterator<Attribute> for AttributeMapping {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut mapping = Self::new();
        mapping.extend(iter);
        mapping
    }
}

impl Extend<Attribute> for AttributeMapping {
    fn extend<I: IntoIterator<Item = Attribute>>(&mut self, iter: I) {
        for attribute in iter {
            self.set(attribute);
        }
    }
}

impl<'a> IntoIterator for &'a AttributeMapping {
    type Item = (&'a AttributeKey, &'a AttributeValue);
    type IntoIter = hashbrown::hash_map::Iter<'a, AttributeKey, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::AttributeMapping;
    use crate::{
        AttributeKey, AttributeValue, Color, ErrorKind, FontTraits, ParagraphStyle,
        Representation, RepresentationKey,
    };
    use alloc::sync::Arc;

    #[test]
    fn insert_rejects_mismatched_value_and_leaves_mapping_untouched() {
        let mut m = AttributeMapping::new();
        let err = m
            .insert(AttributeKey::ParagraphStyle, AttributeValue::Integer(1))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert!(m.is_empty());
    }

    #[test]
    fn empty_font_traits_clear_the_key() {
        let mut m = AttributeMapping::new();
        m.set_font_traits(FontTraits::BOLD);
        assert_eq!(m.font_traits(), Some(FontTraits::BOLD));
        m.set_font_traits(FontTraits::EMPTY);
        assert!(!m.contains_key(&AttributeKey::FontTraits));
    }

    #[test]
    fn none_representation_clears_the_key() {
        let mut m = AttributeMapping::new();
        let key = RepresentationKey::Cite;
        m.set_representation(&key, Some(Representation::new("<cite>")));
        assert_eq!(
            m.representation(&key).map(Representation::markup),
            Some("<cite>")
        );
        m.set_representation(&key, None);
        assert!(m.is_empty());
    }

    #[test]
    fn paragraph_style_is_shared_until_written() {
        let mut original = AttributeMapping::new();
        original.set_paragraph_style(Arc::new(ParagraphStyle::new()));
        let copy = original.clone();

        let mut style = Arc::clone(copy.paragraph_style().expect("style set"));
        Arc::make_mut(&mut style).append_property(crate::ParagraphProperty::Blockquote {
            representation: None,
        });

        assert!(original.paragraph_style().expect("style set").is_empty());
        assert!(copy.paragraph_style().expect("style set").is_empty());
        assert_eq!(style.blockquote_depth(), 1);
    }

    #[test]
    fn merge_is_additive() {
        let mut base = AttributeMapping::new();
        base.set_font_traits(FontTraits::ITALIC);
        base.insert(AttributeKey::Underline, AttributeValue::Integer(1))
            .unwrap();
        let mut extra = AttributeMapping::new();
        extra.set_font_traits(FontTraits::BOLD);

        base.merge(&extra);
        assert_eq!(base.len(), 2);
        assert_eq!(base.font_traits(), Some(FontTraits::BOLD));
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let mut a = AttributeMapping::new();
        a.insert(AttributeKey::Underline, AttributeValue::Integer(1))
            .unwrap();
        a.insert(AttributeKey::ForegroundColor, AttributeValue::Color(Color::BLACK))
            .unwrap();
        let mut b = AttributeMapping::new();
        b.insert(AttributeKey::ForegroundColor, AttributeValue::Color(Color::BLACK))
            .unwrap();
        b.insert(AttributeKey::Underline, AttributeValue::Integer(1))
            .unwrap();
        assert_eq!(a, b);
    }
}
