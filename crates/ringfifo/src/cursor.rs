use crate::invariants::{
    debug_assert_bounded_count, debug_assert_power_of_two, debug_assert_read_not_past_write,
};
use crate::FifoError;

// =============================================================================
// FREE-RUNNING CURSORS
// =============================================================================
//
// `write` and `read` count elements since creation (or the last reset). They
// are never reduced modulo the capacity:
//
// - occupancy is `write.wrapping_sub(read)`, correct even after either
//   counter overflows, because 2^32 is a multiple of every power-of-two
//   capacity
// - the slot of logical position `p` is `p & mask`
// - a full fifo (`write - read == capacity`) is distinguishable from an empty
//   one (`write == read`) without sacrificing a slot
//
// Capacity is capped at 2^31 so that a full occupancy still fits in a u32.
//
// =============================================================================

/// Largest supported capacity, in elements.
pub const MAX_CAPACITY: usize = 1 << 31;

/// Write/read cursor pair shared by every fifo shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursors {
    write: u32,
    read: u32,
    mask: u32,
}

impl Cursors {
    /// Creates cursors for an already validated capacity.
    pub(crate) fn new(capacity: usize) -> Self {
        debug_assert_power_of_two!(capacity);
        Self {
            write: 0,
            read: 0,
            mask: (capacity - 1) as u32,
        }
    }

    /// Checks that `capacity` elements can be addressed by the cursors.
    pub(crate) fn validate(capacity: usize) -> Result<(), FifoError> {
        if capacity == 0 {
            return Err(FifoError::ZeroCapacity);
        }
        if !capacity.is_power_of_two() {
            return Err(FifoError::NotPowerOfTwo { capacity });
        }
        if capacity > MAX_CAPACITY {
            return Err(FifoError::CapacityTooLarge {
                capacity,
                max: MAX_CAPACITY,
            });
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // STATUS
    // ---------------------------------------------------------------------

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.mask as usize + 1
    }

    /// Number of queued elements.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.write.wrapping_sub(self.read) as usize
    }

    /// Number of free slots.
    #[inline]
    pub(crate) fn available(&self) -> usize {
        self.capacity() - self.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.write == self.read
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Slot index of the next element to be written.
    #[inline]
    pub(crate) fn write_index(&self) -> usize {
        (self.write & self.mask) as usize
    }

    /// Slot index of the oldest queued element.
    #[inline]
    pub(crate) fn read_index(&self) -> usize {
        (self.read & self.mask) as usize
    }

    // ---------------------------------------------------------------------
    // ADVANCE
    // ---------------------------------------------------------------------

    /// Publishes `n` elements that were just copied in.
    #[inline]
    pub(crate) fn advance_write(&mut self, n: usize) {
        let write = self.write.wrapping_add(n as u32);
        debug_assert_bounded_count!(write.wrapping_sub(self.read) as usize, self.capacity());
        self.write = write;
    }

    /// Releases `n` elements that were just copied out or skipped.
    #[inline]
    pub(crate) fn advance_read(&mut self, n: usize) {
        debug_assert_read_not_past_write!(n, self.len());
        self.read = self.read.wrapping_add(n as u32);
    }

    #[inline]
    pub(crate) fn reset(&mut self) {
        self.write = 0;
        self.read = 0;
    }

    /// Starts both cursors at `pos`, to exercise counter overflow.
    #[cfg(test)]
    pub(crate) fn set_position(&mut self, pos: u32) {
        self.write = pos;
        self.read = pos;
    }
}
