// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

/// How a style was originally written in markup.
///
/// The buffer and the formatters never look inside a representation; they carry it next to the
/// style it describes so that a serializer can reproduce the original markup (for example
/// `<strong>` rather than `<b>`, or the attributes of a `<blockquote>`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Representation(Arc<str>);

impl Representation {
    /// Wraps serialized markup.
    pub fn new(markup: impl Into<Arc<str>>) -> Self {
        Self(markup.into())
    }

    /// The markup this representation was created from.
    pub fn markup(&self) -> &str {
        &self.0
    }
}
