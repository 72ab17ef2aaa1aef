// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;

use styled_buffer::{HeaderLevel, StyledBuffer, TextRange};

use crate::{
    AttributeFormatter, BlockquoteAttribute, CiteAttribute, FontAttribute, Formatter,
    HeaderAttribute, StandardAttribute,
};

/// The styles an editor toolbar can toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormattingIdentifier {
    /// Bold text.
    Bold,
    /// Italic text.
    Italic,
    /// A citation.
    Cite,
    /// Underlined text.
    Underline,
    /// Struck-through text.
    Strikethrough,
    /// A block quotation.
    Blockquote,
    /// A heading.
    Header(HeaderLevel),
}

impl FormattingIdentifier {
    /// Every identifier, in toolbar order.
    pub const ALL: [Self; 12] = [
        Self::Bold,
        Self::Italic,
        Self::Cite,
        Self::Underline,
        Self::Strikethrough,
        Self::Blockquote,
        Self::Header(HeaderLevel::H1),
        Self::Header(HeaderLevel::H2),
        Self::Header(HeaderLevel::H3),
        Self::Header(HeaderLevel::H4),
        Self::Header(HeaderLevel::H5),
        Self::Header(HeaderLevel::H6),
    ];
}

/// The canonical formatter for `identifier`.
pub fn formatter_for(identifier: FormattingIdentifier) -> Box<dyn Formatter> {
    match identifier {
        FormattingIdentifier::Bold => Box::new(AttributeFormatter::from_attribute(
            FontAttribute::bold(),
        )),
        FormattingIdentifier::Italic => Box::new(AttributeFormatter::from_attribute(
            FontAttribute::italic(),
        )),
        FormattingIdentifier::Cite => {
            Box::new(AttributeFormatter::from_attribute(CiteAttribute::new()))
        }
        FormattingIdentifier::Underline => Box::new(AttributeFormatter::from_attribute(
            StandardAttribute::underline(),
        )),
        FormattingIdentifier::Strikethrough => Box::new(AttributeFormatter::from_attribute(
            StandardAttribute::strikethrough(),
        )),
        FormattingIdentifier::Blockquote => {
            Box::new(AttributeFormatter::from_attribute(BlockquoteAttribute))
        }
        FormattingIdentifier::Header(level) => Box::new(AttributeFormatter::from_attribute(
            HeaderAttribute::new(level),
        )),
    }
}

/// The identifiers whose style covers `range`, for reflecting state in a toolbar.
///
/// A caret reports the style at its position; an empty buffer reports nothing.
pub fn active_formatting(buffer: &dyn StyledBuffer, range: TextRange) -> Vec<FormattingIdentifier> {
    if buffer.is_empty() {
        return Vec::new();
    }
    FormattingIdentifier::ALL
        .into_iter()
        .filter(|&identifier| formatter_for(identifier).present_in_range(buffer, range))
        .collect()
}
