// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use crate::{Color, Error, FontTraits, ParagraphStyle, Representation};

/// Identifies one primitive attribute stored on a run of styled text.
///
/// Well-known keys accept exactly one [`ValueKind`]; [`AttributeKey::Named`] keys are defined by
/// the host and accept any value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    /// Font traits such as bold and italic.
    FontTraits,
    /// Text color.
    ForegroundColor,
    /// Highlight color.
    BackgroundColor,
    /// Underline style, as an integer.
    Underline,
    /// Strikethrough style, as an integer.
    Strikethrough,
    /// Link target.
    Link,
    /// Paragraph-level properties.
    ParagraphStyle,
    /// Markup representation recorded alongside a compound style.
    Representation(RepresentationKey),
    /// A host-defined key.
    Named(Arc<str>),
}

impl AttributeKey {
    /// The value kind this key accepts, or `None` if any value is accepted.
    pub fn expected_kind(&self) -> Option<ValueKind> {
        match self {
            Self::FontTraits => Some(ValueKind::FontTraits),
            Self::ForegroundColor | Self::BackgroundColor => Some(ValueKind::Color),
            Self::Underline | Self::Strikethrough => Some(ValueKind::Integer),
            Self::Link => Some(ValueKind::Text),
            Self::ParagraphStyle => Some(ValueKind::ParagraphStyle),
            Self::Representation(_) => Some(ValueKind::Representation),
            Self::Named(_) => None,
        }
    }

    /// Returns `true` if `value` may be stored under this key.
    pub fn accepts(&self, value: &AttributeValue) -> bool {
        self.expected_kind()
            .is_none_or(|expected| expected == value.kind())
    }
}

impl From<RepresentationKey> for AttributeKey {
    fn from(key: RepresentationKey) -> Self {
        Self::Representation(key)
    }
}

/// The key under which a compound style keeps its [`Representation`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RepresentationKey {
    /// `<b>`, `<strong>` and friends.
    Bold,
    /// `<i>`, `<em>` and friends.
    Italic,
    /// `<cite>`.
    Cite,
    /// `<u>`.
    Underline,
    /// `<s>`, `<del>`, `<strike>`.
    Strikethrough,
    /// `<a>`.
    Link,
    /// A host-defined representation slot.
    Named(Arc<str>),
}

/// The kind of an [`AttributeValue`], without its payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`AttributeValue::Integer`].
    Integer,
    /// [`AttributeValue::Color`].
    Color,
    /// [`AttributeValue::Text`].
    Text,
    /// [`AttributeValue::FontTraits`].
    FontTraits,
    /// [`AttributeValue::ParagraphStyle`].
    ParagraphStyle,
    /// [`AttributeValue::Representation`].
    Representation,
}

/// An attribute value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributeValue {
    /// A plain number, such as an underline style.
    Integer(i64),
    /// A color.
    Color(Color),
    /// A string, such as a link target.
    Text(Arc<str>),
    /// A set of font traits.
    FontTraits(FontTraits),
    /// Shared paragraph properties. Mutate through [`Arc::make_mut`] to get copy-on-write.
    ParagraphStyle(Arc<ParagraphStyle>),
    /// An opaque markup representation.
    Representation(Representation),
}

impl AttributeValue {
    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::Color(_) => ValueKind::Color,
            Self::Text(_) => ValueKind::Text,
            Self::FontTraits(_) => ValueKind::FontTraits,
            Self::ParagraphStyle(_) => ValueKind::ParagraphStyle,
            Self::Representation(_) => ValueKind::Representation,
        }
    }
}

/// A key and a value that the key accepts.
///
/// This is the single place where attribute typing is checked. Once an `Attribute` exists it can
/// be stored into any [`AttributeMapping`] without further validation, and typed accessors on the
/// mapping can rely on the key/value pairing.
///
/// [`AttributeMapping`]: crate::AttributeMapping
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    key: AttributeKey,
    value: AttributeValue,
}

impl Attribute {
    /// Pairs `key` with `value`, failing with [`ErrorKind::TypeMismatch`] if the key does not
    /// accept that kind of value.
    ///
    /// [`ErrorKind::TypeMismatch`]: crate::ErrorKind::TypeMismatch
    pub fn new(key: AttributeKey, value: AttributeValue) -> Result<Self, Error> {
        match key.expected_kind() {
            Some(expected) if expected != value.kind() => {
                Err(Error::type_mismatch(key, expected, value.kind()))
            }
            _ => Ok(Self { key, value }),
        }
    }

    /// An underline style; `1` is a single line.
    pub fn underline(style: i64) -> Self {
        Self {
            key: AttributeKey::Underline,
            value: AttributeValue::Integer(style),
        }
    }

    /// A strikethrough style; `1` is a single line.
    pub fn strikethrough(style: i64) -> Self {
        Self {
            key: AttributeKey::Strikethrough,
            value: AttributeValue::Integer(style),
        }
    }

    /// A text color.
    pub fn foreground_color(color: Color) -> Self {
        Self {
            key: AttributeKey::ForegroundColor,
            value: AttributeValue::Color(color),
        }
    }

    /// A highlight color.
    pub fn background_color(color: Color) -> Self {
        Self {
            key: AttributeKey::BackgroundColor,
            value: AttributeValue::Color(color),
        }
    }

    /// A link target.
    pub fn link(target: impl Into<Arc<str>>) -> Self {
        Self {
            key: AttributeKey::Link,
            value: AttributeValue::Text(target.into()),
        }
    }

    /// Font traits.
    pub fn font_traits(traits: FontTraits) -> Self {
        Self {
            key: AttributeKey::FontTraits,
            value: AttributeValue::FontTraits(traits),
        }
    }

    /// Paragraph properties.
    pub fn paragraph_style(style: Arc<ParagraphStyle>) -> Self {
        Self {
            key: AttributeKey::ParagraphStyle,
            value: AttributeValue::ParagraphStyle(style),
        }
    }

    /// A representation stored under `key`.
    pub fn representation(key: RepresentationKey, representation: Representation) -> Self {
        Self {
            key: AttributeKey::Representation(key),
            value: AttributeValue::Representation(representation),
        }
    }

    /// The key.
    pub fn key(&self) -> &AttributeKey {
        &self.key
    }

    /// The value.
    pub fn value(&self) -> &AttributeValue {
        &self.value
    }

    /// Splits into key and value.
    pub fn into_parts(self) -> (AttributeKey, AttributeValue) {
        (self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Attribute, AttributeKey, AttributeValue, RepresentationKey, ValueKind};
    use crate::{Color, ErrorKind, Representation};
    use alloc::sync::Arc;

    #[test]
    fn well_known_keys_reject_other_kinds() {
        let err = Attribute::new(AttributeKey::Underline, AttributeValue::Color(Color::BLACK))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        let m = err.mismatch().expect("mismatch info");
        assert_eq!(m.expected, ValueKind::Integer);
        assert_eq!(m.found, ValueKind::Color);
    }

    #[test]
    fn representation_keys_only_hold_representations() {
        let key = AttributeKey::from(RepresentationKey::Bold);
        assert!(key.accepts(&AttributeValue::Representation(Representation::new("<b>"))));
        assert!(!key.accepts(&AttributeValue::Integer(1)));
    }

    #[test]
    fn typed_constructors_agree_with_validation() {
        for attribute in [
            Attribute::underline(1),
            Attribute::strikethrough(2),
            Attribute::foreground_color(Color::BLACK),
            Attribute::background_color(Color::rgb(1, 2, 3)),
            Attribute::link("https://example.invalid"),
        ] {
            let (key, value) = attribute.clone().into_parts();
            assert_eq!(Attribute::new(key, value), Ok(attribute));
        }
    }

    #[test]
    fn named_keys_accept_anything() {
        let key = AttributeKey::Named(Arc::from("data-note"));
        assert!(Attribute::new(key.clone(), AttributeValue::Integer(3)).is_ok());
        assert!(Attribute::new(key, AttributeValue::Text(Arc::from("x"))).is_ok());
    }
}
