// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A styled text buffer: text where every position carries a typed [`AttributeMapping`].
//!
//! - [`StyledBuffer`] is the object-safe view that formatting code works against: read the
//!   mapping at a position, enumerate maximal runs, add attributes, clear a key.
//! - [`AttributedString`] implements it as an arena of runs over any [`TextStorage`].
//! - [`AttributeKey`], [`AttributeValue`] and [`Attribute`] form the value vocabulary. Values are
//!   checked against their key once, when an [`Attribute`] is built, so a mapping never holds a
//!   paragraph style under the underline key.
//! - [`Representation`] is an opaque record of the markup a style came from.
//!
//! ## Indices
//!
//! All ranges are **byte indices** into UTF-8 text, and must be on UTF-8 character boundaries.
//! Validate them once with [`TextRange::new`] (or [`AttributedString::range`]).
//!
//! ## Example
//!
//! ```
//! use styled_buffer::{
//!     AttributeKey, AttributeMapping, AttributeValue, AttributedString, StyledBuffer,
//! };
//!
//! let mut text = AttributedString::new("Hello world");
//! let mut underline = AttributeMapping::new();
//! underline
//!     .insert(AttributeKey::Underline, AttributeValue::Integer(1))
//!     .unwrap();
//!
//! text.add_attributes(text.range(6..11).unwrap(), &underline);
//! text.remove_attribute(text.range(6..8).unwrap(), &AttributeKey::Underline);
//!
//! let runs: Vec<_> = text.runs().map(|(range, _)| range.as_range()).collect();
//! assert_eq!(runs, vec![0..8, 8..11]);
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

mod attribute;
mod attributed_string;
mod buffer;
mod error;
mod mapping;
mod paragraph;
mod representation;
mod text_range;
mod text_storage;
mod values;


pub use crate::attribute::{Attribute, AttributeKey, AttributeValue, RepresentationKey, ValueKind};
pub use crate::attributed_string::AttributedString;
pub use crate::buffer::StyledBuffer;
pub use crate::error::{BoundaryInfo, Endpoint, Error, ErrorKind, RangeContext, ValueMismatch};
pub use crate::mapping::AttributeMapping;
pub use crate::paragraph::{HeaderLevel, ParagraphProperty, ParagraphStyle, PropertyType};
pub use crate::representation::Representation;
pub use crate::text_range::TextRange;
pub use crate::text_storage::TextStorage;
pub use crate::values::{Color, FontTraits};
