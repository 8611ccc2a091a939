//! Error types for fifo construction.

use thiserror::Error;

/// Errors returned when a fifo cannot be built over the given storage.
///
/// Transfers themselves never fail: a short enqueue or dequeue is reported
/// through the returned element count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FifoError {
    /// The storage holds no whole element.
    #[error("fifo capacity must be non-zero")]
    ZeroCapacity,

    /// The element count of the storage is not a power of two.
    #[error("fifo capacity {capacity} is not a power of two")]
    NotPowerOfTwo { capacity: usize },

    /// The element count does not fit the cursor width.
    #[error("fifo capacity {capacity} exceeds the maximum of {max}")]
    CapacityTooLarge { capacity: usize, max: usize },

    /// A raw fifo was asked to store zero-sized elements.
    #[error("element size must be non-zero")]
    ZeroElementSize,

    /// A raw byte region is not a whole number of elements.
    #[error("region of {len} bytes is not a multiple of the {element_size}-byte element size")]
    RegionSize { len: usize, element_size: usize },

    /// The byte size of the requested region does not fit in `usize`.
    #[error("{capacity} elements of {element_size} bytes overflow the address space")]
    RegionTooLarge { capacity: usize, element_size: usize },

    /// `Config::ring_bits` is out of range.
    #[error("ring_bits {ring_bits} is out of range (max {max})")]
    InvalidRingBits { ring_bits: u8, max: u8 },
}

impl FifoError {
    /// Returns `true` if the storage had the wrong number of elements.
    #[inline]
    pub fn is_capacity_error(&self) -> bool {
        matches!(
            self,
            Self::ZeroCapacity | Self::NotPowerOfTwo { .. } | Self::CapacityTooLarge { .. }
        )
    }
}
