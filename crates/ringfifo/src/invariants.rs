//! Debug assertion macros for cursor invariants.
//!
//! Active only in debug builds (`debug_assert!`), so release builds pay
//! nothing for them.
//!
//! Used by `Cursors` and, through it, by both `Fifo<T, S>` and `RawFifo<S>`.

// =============================================================================
// Bounded Count
// =============================================================================

/// Assert that occupancy does not exceed capacity.
///
/// **Invariant**: `0 ≤ (write - read) ≤ capacity`
///
/// Used in: `Cursors::advance_write()` after computing the new write cursor
macro_rules! debug_assert_bounded_count {
    ($count:expr, $capacity:expr) => {
        debug_assert!(
            $count <= $capacity,
            "bounded count violated: occupancy {} exceeds capacity {}",
            $count,
            $capacity
        )
    };
}

/// Assert that the read cursor does not pass the write cursor.
///
/// **Invariant**: `n ≤ (write - read)` before advancing `read` by `n`
///
/// Used in: `Cursors::advance_read()`
macro_rules! debug_assert_read_not_past_write {
    ($n:expr, $len:expr) => {
        debug_assert!(
            $n <= $len,
            "bounded count violated: advancing read by {} with only {} queued",
            $n,
            $len
        )
    };
}

// =============================================================================
// Power-of-Two Capacity
// =============================================================================

/// Assert that a capacity is usable as a mask base.
///
/// **Invariant**: `capacity` is a non-zero power of two
///
/// Used in: `Cursors::new()`; constructors validate before reaching it
macro_rules! debug_assert_power_of_two {
    ($capacity:expr) => {
        debug_assert!(
            $capacity != 0 && ($capacity & ($capacity - 1)) == 0,
            "capacity {} is not a power of two",
            $capacity
        )
    };
}

// =============================================================================
// Split Copy Bounds
// =============================================================================

/// Assert that a transfer fits the store and starts inside it.
///
/// Used in: `copy::copy_in()` / `copy::copy_out()`
macro_rules! debug_assert_copy_bounds {
    ($offset:expr, $count:expr, $store_len:expr) => {
        debug_assert!(
            $offset < $store_len && $count <= $store_len,
            "split copy out of bounds: offset {} count {} store {}",
            $offset,
            $count,
            $store_len
        )
    };
}

pub(crate) use debug_assert_bounded_count;
pub(crate) use debug_assert_copy_bounds;
pub(crate) use debug_assert_power_of_two;
pub(crate) use debug_assert_read_not_past_write;
