// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Run-walking logic shared by every formatter.
//!
//! The traits in this crate only decide what happens to a single [`AttributeMapping`]. These
//! functions lift that decision to positions and ranges of a [`StyledBuffer`], and own the
//! diffing needed because the buffer's only write primitives are "add these entries" and
//! "clear this key".

use alloc::vec::Vec;
use core::ops::ControlFlow;

use styled_buffer::{AttributeKey, AttributeMapping, StyledBuffer, TextRange};

use crate::{AttributeApplier, AttributeRemover, AttributeVerifier};

/// Returns `true` if `verifier` finds its attribute at `index`.
///
/// `index` is clamped to the last position of the buffer, so a caret at the very end reports
/// the style of the character before it.
///
/// # Panics
///
/// Panics if `buffer` is empty; callers decide what an empty buffer means.
pub fn present_at<V: AttributeVerifier + ?Sized>(
    verifier: &V,
    buffer: &dyn StyledBuffer,
    index: usize,
) -> bool {
    let index = index.min(buffer.len().saturating_sub(1));
    verifier.present(buffer.attributes_at(index).0)
}

/// Returns `true` if `verifier` finds its attribute in every run touching `range`.
///
/// A zero-length range is a position query at its start. Otherwise at least one run must be
/// visited: a range that enumerates nothing is never reported as present.
pub fn present_in_range<V: AttributeVerifier + ?Sized>(
    verifier: &V,
    buffer: &dyn StyledBuffer,
    range: TextRange,
) -> bool {
    if range.is_empty() {
        return present_at(verifier, buffer, range.start());
    }
    let mut visited = false;
    let mut present = true;
    buffer.for_each_run(range, &mut |_, attributes| {
        visited = true;
        if verifier.present(attributes) {
            ControlFlow::Continue(())
        } else {
            present = false;
            ControlFlow::Break(())
        }
    });
    present && visited
}

/// Applies `applier` to every run inside its application range for `range`.
///
/// Each run's new mapping is written back additively. Returns the application range.
pub fn apply_attributes<A: AttributeApplier + ?Sized>(
    applier: &A,
    buffer: &mut dyn StyledBuffer,
    range: TextRange,
) -> TextRange {
    let target = application_range(applier, &*buffer, range);
    let mut updates = Vec::new();
    buffer.for_each_run(target, &mut |run, current| {
        updates.push((run, applier.apply(current)));
        ControlFlow::Continue(())
    });
    for (run, updated) in &updates {
        log::trace!("apply over {:?}: {} keys", run.as_range(), updated.len());
        buffer.add_attributes(*run, updated);
    }
    target
}

/// Removes `remover`'s attribute from every run inside its application range for `range`.
///
/// Keys that the new mapping drops are cleared explicitly, then the remaining entries are
/// written back. Returns the application range.
pub fn remove_attributes<R: AttributeRemover + ?Sized>(
    remover: &R,
    buffer: &mut dyn StyledBuffer,
    range: TextRange,
) -> TextRange {
    let target = application_range(remover, &*buffer, range);
    let mut updates = Vec::new();
    buffer.for_each_run(target, &mut |run, current| {
        let updated = remover.remove(current);
        let cleared = dropped_keys(current, &updated);
        updates.push((run, cleared, updated));
        ControlFlow::Continue(())
    });
    for (run, cleared, updated) in &updates {
        log::trace!(
            "remove over {:?}: clearing {} keys",
            run.as_range(),
            cleared.len()
        );
        for key in cleared {
            buffer.remove_attribute(*run, key);
        }
        buffer.add_attributes(*run, updated);
    }
    target
}

/// The keys of `current` that `updated` no longer has.
pub fn dropped_keys(current: &AttributeMapping, updated: &AttributeMapping) -> Vec<AttributeKey> {
    current
        .keys()
        .filter(|key| !updated.contains_key(key))
        .cloned()
        .collect()
}

fn application_range<A: crate::AttributeRanger + ?Sized>(
    ranger: &A,
    buffer: &dyn StyledBuffer,
    range: TextRange,
) -> TextRange {
    let target = ranger.application_range(range, buffer);
    if target != range {
        log::debug!(
            "application range {:?} widened or narrowed to {:?}",
            range.as_range(),
            target.as_range()
        );
    }
    target
}
