// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;

/// The characters underlying a [`StyledBuffer`].
///
/// The buffer never edits its text; it only needs enough of it to validate ranges and clamp
/// probe positions onto character starts.
///
/// [`StyledBuffer`]: crate::StyledBuffer
pub trait TextStorage {
    /// The length of the underlying text, in bytes.
    fn len(&self) -> usize;

    /// Return `true` if the underlying text is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return whether `index` is a UTF-8 character boundary in the text.
    fn is_char_boundary(&self, index: usize) -> bool;

    /// Returns the greatest character boundary that is `<= index`.
    ///
    /// Indices past the end of the text are clamped to the text length.
    fn floor_char_boundary(&self, index: usize) -> usize {
        let mut index = index.min(self.len());
        // A UTF-8 codepoint is at most 4 bytes, and index 0 is always a boundary.
        while index > 0 && !self.is_char_boundary(index) {
            index -= 1;
        }
        index
    }
}

impl TextStorage for String {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        self.as_str().is_char_boundary(index)
    }
}

impl TextStorage for &str {
    fn len(&self) -> usize {
        str::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        str::is_char_boundary(self, index)
    }
}

impl TextStorage for Arc<str> {
    fn len(&self) -> usize {
        str::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        str::is_char_boundary(self, index)
    }
}

#[cfg(test)]
mod tests {
    use super::TextStorage;
    use alloc::string::ToString;
    use alloc::sync::Arc;

    #[test]
    fn floor_char_boundary_ascii_is_identity() {
        let s = "abc";
        for i in 0..=3 {
            assert_eq!(s.floor_char_boundary(i), i, "index {i}");
        }
        assert_eq!(s.floor_char_boundary(10), 3);
    }

    #[test]
    fn floor_char_boundary_multibyte() {
        // "é" is 2 bytes in UTF-8.
        let s = "éclair";
        assert_eq!(s.floor_char_boundary(0), 0);
        assert_eq!(s.floor_char_boundary(1), 0);
        assert_eq!(s.floor_char_boundary(2), 2);

        let owned = s.to_string();
        assert_eq!(owned.floor_char_boundary(1), 0);

        let arc: Arc<str> = Arc::from(s);
        assert_eq!(arc.floor_char_boundary(1), 0);
    }

    #[test]
    fn floor_char_boundary_four_byte_codepoints() {
        // Two regional indicators, 4 bytes each.
        let s = "\u{1F1EF}\u{1F1F5}";
        assert_eq!(s.len(), 8);
        assert_eq!(s.floor_char_boundary(3), 0);
        assert_eq!(s.floor_char_boundary(7), 4);
        assert_eq!(s.floor_char_boundary(8), 8);
    }

    #[test]
    fn empty_storage() {
        let s = "";
        assert!(s.is_empty());
        assert_eq!(s.floor_char_boundary(5), 0);
    }
}
