// SPDX-License-Identifier: MPL-2.0
//! Index clamping for collections that may be shorter than the index
//! pointing into them.
//!
//! A stored position survives a collection replacement: reads clamp it to the
//! last valid item instead of resetting it to the first one.

/// Resolves `index` against a collection of `len` items.
///
/// Returns `None` for an empty collection, otherwise `min(index, len - 1)`.
#[must_use]
pub fn effective_index(len: usize, index: usize) -> Option<usize> {
    len.checked_sub(1).map(|last| index.min(last))
}

/// Returns the item to display for `index`, or `fallback` when `items` is empty.
///
/// ```
/// use hotel_showcase::ui::state::display_index::effective_item;
///
/// let photos = ["lobby", "pool"];
/// assert_eq!(*effective_item(&photos, 5, &"facade"), "pool");
/// assert_eq!(*effective_item(&[], 0, &"facade"), "facade");
/// ```
#[must_use]
pub fn effective_item<'a, T>(items: &'a [T], index: usize, fallback: &'a T) -> &'a T {
    effective_index(items.len(), index)
        .and_then(|i| items.get(i))
        .unwrap_or(fallback)
}
