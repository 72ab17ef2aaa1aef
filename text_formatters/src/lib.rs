// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composable formatters that toggle compound styles on a [`StyledBuffer`].
//!
//! A *compound attribute* is a style that has no single primitive key: bold is a trait inside
//! the font traits value, a blockquote is a property appended to the paragraph style. Each one
//! is described by three narrow roles:
//!
//! - [`AttributeVerifier`]: is the style present in a mapping?
//! - [`AttributeApplier`]: what does a mapping look like with the style added?
//! - [`AttributeRemover`]: what does a mapping look like with the style removed?
//!
//! Both the applier and the remover are [`AttributeRanger`]s, which may widen or narrow a
//! requested range before anything is written. The roles only ever transform single mappings;
//! walking the runs of a buffer, diffing keys and writing back lives once, in [`base`].
//!
//! [`AttributeFormatter`] composes one of each into a [`Formatter`], which adds `toggle`.
//!
//! Every operation may also record a [`Representation`](styled_buffer::Representation): opaque
//! markup describing how the style was originally written, kept so it can be serialized back
//! unchanged.
//!
//! ## Example
//!
//! ```
//! use styled_buffer::{AttributedString, StyledBuffer};
//! use text_formatters::{FormattingIdentifier, formatter_for};
//!
//! let mut text = AttributedString::new("Hello world");
//! let bold = formatter_for(FormattingIdentifier::Bold);
//!
//! let hello = text.range(0..5).unwrap();
//! assert_eq!(bold.toggle(&mut text, hello), hello);
//! assert!(bold.present_in_range(&text, hello));
//! assert!(!bold.present_at(&text, 6));
//!
//! bold.toggle(&mut text, hello);
//! assert_eq!(text.run_count(), 1);
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

pub mod base;

mod applier;
mod font;
mod formatter;
mod identifier;
mod paragraph;
mod remover;
mod standard;
mod verifier;

#[cfg(test)]
mod tests;

pub use crate::applier::{AttributeApplier, AttributeRanger};
pub use crate::font::{CiteAttribute, FontAttribute};
pub use crate::formatter::{AttributeFormatter, CompoundAttribute, Formatter};
pub use crate::identifier::{FormattingIdentifier, active_formatting, formatter_for};
pub use crate::paragraph::{BlockquoteAttribute, HeaderAttribute};
pub use crate::remover::AttributeRemover;
pub use crate::standard::{StandardAttribute, StandardAttributeFormatter};
pub use crate::verifier::AttributeVerifier;
