// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::ops::{ControlFlow, Range};

use styled_buffer::{
    Attribute, AttributeKey, AttributeMapping, AttributeValue, AttributedString, Color,
    FontTraits, HeaderLevel, Representation, RepresentationKey, StyledBuffer, TextRange,
};

use crate::{
    AttributeApplier, AttributeFormatter, AttributeRanger, AttributeRemover, AttributeVerifier,
    BlockquoteAttribute, CiteAttribute, FontAttribute, Formatter, FormattingIdentifier,
    StandardAttribute, StandardAttributeFormatter, active_formatting, formatter_for,
};

const TEXT: &str = "The quick brown fox";

/// Every mapping in the buffer, one per byte, for whole-buffer comparisons.
fn snapshot(text: &AttributedString<&str>) -> Vec<AttributeMapping> {
    (0..text.len())
        .map(|ix| text.attributes_at(ix).0.clone())
        .collect()
}

/// A buffer with some unrelated styling already present.
fn decorated() -> AttributedString<&'static str> {
    let mut text = AttributedString::new(TEXT);
    let mut red = AttributeMapping::new();
    red.set(Attribute::foreground_color(Color::rgb(0xFF, 0, 0)));
    let mut italic = AttributeMapping::new();
    italic.set_font_traits(FontTraits::ITALIC);
    text.add_attributes_bytes(0..9, &red).unwrap();
    text.add_attributes_bytes(4..15, &italic).unwrap();
    text
}

fn all_formatters() -> Vec<(FormattingIdentifier, Box<dyn Formatter>)> {
    FormattingIdentifier::ALL
        .into_iter()
        .map(|identifier| (identifier, formatter_for(identifier)))
        .collect()
}

fn ranges() -> Vec<Range<usize>> {
    vec![0..3, 2..11, 10..19, 0..19, 16..19]
}

#[test]
fn bold_mapping_round_trip() {
    let bold = FontAttribute::bold();
    let applied = bold.apply(&AttributeMapping::new());

    let mut expected = AttributeMapping::new();
    expected.set_font_traits(FontTraits::BOLD);
    assert_eq!(applied, expected);
    assert!(bold.present(&applied));
    assert_eq!(bold.remove(&applied), AttributeMapping::new());
}

#[test]
fn blockquote_toggle_twice_restores_hello_world() {
    let mut text = AttributedString::new("Hello world");
    let blockquote = formatter_for(FormattingIdentifier::Blockquote);
    let hello = text.range(0..5).unwrap();
    let before = snapshot(&text);

    assert_eq!(blockquote.toggle(&mut text, hello), hello);
    assert!(blockquote.present_in_range(&text, hello));
    assert!(!blockquote.present_at(&text, 5));

    assert_eq!(blockquote.toggle(&mut text, hello), hello);
    assert!(!blockquote.present_in_range(&text, hello));
    assert_eq!(snapshot(&text), before);
}

#[test]
fn cite_application_range_expands_to_enclosing_citation() {
    let mut text = AttributedString::new("abcdefgh");
    let cite = CiteAttribute::new();
    let cited = cite.apply_storing(&AttributeMapping::new(), Some(Representation::new("<cite>")));
    text.add_attributes_bytes(2..4, &cited).unwrap();

    let expanded = cite.application_range(TextRange::caret(3), &text);
    assert_eq!(expanded.as_range(), 2..4);
}

#[test]
fn cite_toggle_inside_citation_removes_all_of_it() {
    let mut text = AttributedString::new("abcdefgh");
    let cite = AttributeFormatter::from_attribute(CiteAttribute::new());
    let cited = cite
        .applier()
        .apply_storing(&AttributeMapping::new(), Some(Representation::new("<cite>")));
    text.add_attributes_bytes(2..6, &cited).unwrap();

    let inside = text.range(3..4).unwrap();
    let affected = cite.toggle(&mut text, inside);
    assert_eq!(affected.as_range(), 2..6);
    assert_eq!(text.run_count(), 1);
    assert!(text.attributes_at(4).0.is_empty());
}

#[test]
fn cite_toggle_on_plain_text_covers_the_uncited_stretch() {
    let mut text = AttributedString::new("Hello world");
    let cite = formatter_for(FormattingIdentifier::Cite);
    let hello = text.range(0..5).unwrap();

    let affected = cite.toggle(&mut text, hello);
    assert_eq!(affected.as_range(), 0..11);
    assert!(cite.present_in_range(&text, affected));
    assert_eq!(text.run_count(), 1);
}

#[test]
fn header_removal_leaves_other_levels_alone() {
    let mut text = AttributedString::new("Title");
    let all = text.range(0..5).unwrap();
    let h1 = formatter_for(FormattingIdentifier::Header(HeaderLevel::H1));
    let h2 = formatter_for(FormattingIdentifier::Header(HeaderLevel::H2));
    h1.apply_attributes(&mut text, all);
    let titled = snapshot(&text);
    assert!(!h2.present_in_range(&text, all));

    h2.remove_attributes(&mut text, all);
    assert_eq!(snapshot(&text), titled);
    assert!(h1.present_in_range(&text, all));

    h2.apply_attributes(&mut text, all);
    assert!(h2.present_in_range(&text, all));
    h2.remove_attributes(&mut text, all);
    assert_eq!(snapshot(&text), titled);

    h2.toggle(&mut text, all);
    h2.toggle(&mut text, all);
    assert_eq!(snapshot(&text), titled);
}

#[test]
fn apply_is_idempotent() {
    for (identifier, formatter) in all_formatters() {
        for range in ranges() {
            let mut once = decorated();
            let r = once.range(range.clone()).unwrap();
            formatter.apply_attributes(&mut once, r);
            let mut twice = once.clone();
            formatter.apply_attributes(&mut twice, r);
            assert_eq!(
                snapshot(&once),
                snapshot(&twice),
                "{identifier:?} over {range:?}"
            );
        }
    }
}

#[test]
fn remove_is_idempotent() {
    for (identifier, formatter) in all_formatters() {
        for range in ranges() {
            let mut once = decorated();
            let full = once.range(0..TEXT.len()).unwrap();
            formatter.apply_attributes(&mut once, full);
            let r = once.range(range.clone()).unwrap();
            formatter.remove_attributes(&mut once, r);
            let mut twice = once.clone();
            formatter.remove_attributes(&mut twice, r);
            assert_eq!(
                snapshot(&once),
                snapshot(&twice),
                "{identifier:?} over {range:?}"
            );
        }
    }
}

#[test]
fn apply_then_remove_restores_the_buffer() {
    for (identifier, formatter) in all_formatters() {
        if identifier == FormattingIdentifier::Italic || identifier == FormattingIdentifier::Cite {
            // `decorated` already carries italics, which these would legitimately strip.
            continue;
        }
        for range in ranges() {
            let mut text = decorated();
            let before = snapshot(&text);
            let r = text.range(range.clone()).unwrap();
            let applied = formatter.apply_attributes(&mut text, r);
            assert_eq!(applied, r, "{identifier:?} does not adjust ranges");
            assert!(formatter.present_in_range(&text, r), "{identifier:?}");
            formatter.remove_attributes(&mut text, r);
            assert_eq!(snapshot(&text), before, "{identifier:?} over {range:?}");
        }
    }
}

#[test]
fn cite_apply_then_remove_restores_plain_text() {
    let mut text = AttributedString::new(TEXT);
    let before = snapshot(&text);
    let cite = formatter_for(FormattingIdentifier::Cite);
    let r = text.range(4..9).unwrap();
    cite.apply_attributes(&mut text, r);
    cite.remove_attributes(&mut text, r);
    assert_eq!(snapshot(&text), before);
}

#[test]
fn removal_clears_stored_representations() {
    let mut text = AttributedString::new(TEXT);
    let underline = StandardAttributeFormatter::from_attribute(StandardAttribute::underline());
    let stored = underline
        .applier()
        .apply_storing(&AttributeMapping::new(), Some(Representation::new("<u>")));
    text.add_attributes_bytes(4..9, &stored).unwrap();
    assert_eq!(
        text.attributes_at(5)
            .0
            .representation(&RepresentationKey::Underline)
            .map(Representation::markup),
        Some("<u>")
    );

    let r = text.range(4..9).unwrap();
    underline.toggle(&mut text, r);
    assert_eq!(text.run_count(), 1);
    assert!(text.attributes_at(5).0.is_empty());
}

#[test]
fn toggle_matches_apply_when_absent_and_remove_when_present() {
    for (identifier, formatter) in all_formatters() {
        let range = 4..9;

        let mut toggled = AttributedString::new(TEXT);
        let mut applied = toggled.clone();
        let r = toggled.range(range.clone()).unwrap();
        let a = formatter.toggle(&mut toggled, r);
        let b = formatter.apply_attributes(&mut applied, r);
        assert_eq!(a, b, "{identifier:?}");
        assert_eq!(snapshot(&toggled), snapshot(&applied), "{identifier:?}");

        let mut removed = toggled.clone();
        let a = formatter.toggle(&mut toggled, r);
        let b = formatter.remove_attributes(&mut removed, r);
        assert_eq!(a, b, "{identifier:?}");
        assert_eq!(snapshot(&toggled), snapshot(&removed), "{identifier:?}");
    }
}

#[test]
fn toggle_decides_from_the_start_of_the_range() {
    let bold = formatter_for(FormattingIdentifier::Bold);

    // Bold at the start: the whole range is unbolded, even the part that was not bold.
    let mut text = AttributedString::new("abcdef");
    let all = text.range(0..6).unwrap();
    bold.apply_attributes(&mut text, TextRange::new_unchecked(0, 3));
    bold.toggle(&mut text, all);
    assert!((0..6).all(|ix| !bold.present_at(&text, ix)));

    // Plain at the start: the whole range becomes bold.
    let mut text = AttributedString::new("abcdef");
    bold.apply_attributes(&mut text, TextRange::new_unchecked(3, 6));
    bold.toggle(&mut text, all);
    assert!(bold.present_in_range(&text, all));
}

#[test]
fn toggle_on_empty_buffer_applies_without_probing() {
    let mut text = AttributedString::new("");
    for (identifier, formatter) in all_formatters() {
        let caret = TextRange::caret(0);
        assert_eq!(formatter.toggle(&mut text, caret), caret, "{identifier:?}");
    }
    assert_eq!(text.run_count(), 0);
}

#[test]
fn presence_requires_every_run() {
    let mut text = AttributedString::new("abcdef");
    let underline = formatter_for(FormattingIdentifier::Underline);
    underline.apply_attributes(&mut text, TextRange::new_unchecked(0, 3));

    assert!(underline.present_in_range(&text, text.range(0..3).unwrap()));
    assert!(underline.present_in_range(&text, text.range(1..2).unwrap()));
    assert!(!underline.present_in_range(&text, text.range(2..4).unwrap()));
    assert!(!underline.present_in_range(&text, text.range(0..6).unwrap()));
}

/// A buffer that claims to have text but never reports any runs.
struct Runless(AttributeMapping);

impl StyledBuffer for Runless {
    fn len(&self) -> usize {
        4
    }

    fn attributes_at(&self, index: usize) -> (&AttributeMapping, TextRange) {
        (&self.0, TextRange::new_unchecked(index, index + 1))
    }

    fn attribute_at(
        &self,
        key: &AttributeKey,
        index: usize,
    ) -> (Option<&AttributeValue>, TextRange) {
        (self.0.get(key), TextRange::new_unchecked(index, index + 1))
    }

    fn for_each_run(
        &self,
        _range: TextRange,
        _f: &mut dyn FnMut(TextRange, &AttributeMapping) -> ControlFlow<()>,
    ) {
    }

    fn add_attributes(&mut self, _range: TextRange, _attributes: &AttributeMapping) {}

    fn remove_attribute(&mut self, _range: TextRange, _key: &AttributeKey) {}
}

#[test]
fn presence_over_unvisited_range_is_false() {
    struct Always;

    impl AttributeVerifier for Always {
        fn present(&self, _attributes: &AttributeMapping) -> bool {
            true
        }
    }

    let buffer = Runless(AttributeMapping::new());
    assert!(!Always.present_in_range(&buffer, TextRange::new_unchecked(0, 4)));
    // A caret still consults the position directly.
    assert!(Always.present_in_range(&buffer, TextRange::caret(2)));
}

#[test]
fn toggle_attributes_flips_typing_style() {
    let italic = formatter_for(FormattingIdentifier::Italic);
    let typing = italic.toggle_attributes(&AttributeMapping::new());
    assert_eq!(typing.font_traits(), Some(FontTraits::ITALIC));
    assert!(italic.toggle_attributes(&typing).is_empty());
}

#[test]
fn formatters_share_across_buffers() {
    let header = formatter_for(FormattingIdentifier::Header(HeaderLevel::H3));
    let mut a = AttributedString::new("first");
    let mut b = AttributedString::new("second line");
    let first = a.range(0..5).unwrap();
    let second = b.range(0..6).unwrap();
    header.toggle(&mut a, first);
    header.toggle(&mut b, second);
    header.toggle(&mut a, first);
    assert!(!header.present_at(&a, 0));
    assert!(header.present_at(&b, 0));
    assert!(!header.present_at(&b, 6));
}

#[test]
fn active_formatting_reports_covering_styles() {
    let mut text = AttributedString::new(TEXT);
    let r = text.range(4..9).unwrap();
    formatter_for(FormattingIdentifier::Bold).apply_attributes(&mut text, r);
    formatter_for(FormattingIdentifier::Blockquote).apply_attributes(&mut text, r);

    assert_eq!(
        active_formatting(&text, r),
        [FormattingIdentifier::Bold, FormattingIdentifier::Blockquote]
    );
    assert!(active_formatting(&text, text.range(0..9).unwrap()).is_empty());
    assert_eq!(
        active_formatting(&text, TextRange::caret(6)),
        [FormattingIdentifier::Bold, FormattingIdentifier::Blockquote]
    );
    assert!(active_formatting(&AttributedString::new(""), TextRange::caret(0)).is_empty());
}

#[test]
fn standard_formatter_for_custom_color() {
    let highlight = StandardAttributeFormatter::standard(
        AttributeKey::BackgroundColor,
        AttributeValue::Color(Color::rgb(0xFF, 0xFF, 0)),
        RepresentationKey::Named("mark".into()),
    )
    .unwrap();
    let mut text = AttributedString::new(TEXT);
    let r = text.range(10..15).unwrap();
    assert_eq!(highlight.toggle(&mut text, r), r);
    assert_eq!(
        text.attributes_at(12).0.get(&AttributeKey::BackgroundColor),
        Some(&AttributeValue::Color(Color::rgb(0xFF, 0xFF, 0)))
    );
    assert_eq!(highlight.remover().application_range(r, &text), r);
    highlight.toggle(&mut text, r);
    assert_eq!(text.run_count(), 1);
}

#[test]
fn blockquote_formatter_composes_from_parts() {
    let formatter =
        AttributeFormatter::new(BlockquoteAttribute, BlockquoteAttribute, BlockquoteAttribute);
    let mut text = AttributedString::new("quote me");
    let r = text.range(0..8).unwrap();
    formatter.toggle(&mut text, r);
    assert!(formatter.verifier().present_in_range(&text, r));
}
