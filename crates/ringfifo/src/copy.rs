//! Wraparound split copy between the backing store and a linear buffer.
//!
//! A transfer of `n` units starting at physical offset `off` either fits
//! before the physical end of the store (`off + n <= store.len()`) or spans
//! it. Either way it is at most two `copy_from_slice` calls:
//!
//! ```text
//!                 off
//!                  v
//! store  [ 2nd leg | ........ | 1st leg ]
//!          ^ 0                          ^ store.len()
//! ```
//!
//! Units are whatever `T` the caller picks: whole elements for
//! `Fifo<T, S>`, bytes for `RawFifo<S>` (offset and count pre-scaled by the
//! element size).

use crate::invariants::debug_assert_copy_bounds;

/// Copies `src` into `store` starting at physical offset `offset`, wrapping
/// to the front of `store` for whatever does not fit before its end.
#[inline]
pub(crate) fn copy_in<T: Copy>(store: &mut [T], offset: usize, src: &[T]) {
    debug_assert_copy_bounds!(offset, src.len(), store.len());

    let first = src.len().min(store.len() - offset);
    let (head, tail) = src.split_at(first);

    store[offset..offset + first].copy_from_slice(head);
    store[..tail.len()].copy_from_slice(tail);
}

/// Copies `dst.len()` units out of `store` starting at physical offset
/// `offset`, wrapping to the front of `store` past its end.
#[inline]
pub(crate) fn copy_out<T: Copy>(store: &[T], offset: usize, dst: &mut [T]) {
    debug_assert_copy_bounds!(offset, dst.len(), store.len());

    let first = dst.len().min(store.len() - offset);
    let (head, tail) = dst.split_at_mut(first);

    head.copy_from_slice(&store[offset..offset + first]);
    tail.copy_from_slice(&store[..tail.len()]);
}

/// The `count` units starting at `offset` as their two physical legs.
#[inline]
pub(crate) fn legs<T>(store: &[T], offset: usize, count: usize) -> (&[T], &[T]) {
    debug_assert_copy_bounds!(offset, count, store.len());

    let first = count.min(store.len() - offset);
    (&store[offset..offset + first], &store[..count - first])
}
