use crate::FifoError;

/// Largest `ring_bits` the `u32` cursors can address.
const MAX_RING_BITS: u8 = 31;

/// Configuration for fifos that allocate their own storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Capacity as a power of 2, in elements (default: 8 = 256 slots)
    pub ring_bits: u8,
    /// Enable metrics collection (slight overhead)
    pub enable_metrics: bool,
}

impl Config {
    /// Creates a new configuration with custom settings.
    pub const fn new(ring_bits: u8, enable_metrics: bool) -> Self {
        Self {
            ring_bits,
            enable_metrics,
        }
    }

    /// Returns the capacity in elements.
    ///
    /// # Panics
    ///
    /// Panics if `ring_bits` is above 31, the range [`Config::validate`]
    /// rejects.
    #[inline]
    pub const fn capacity(&self) -> usize {
        assert!(self.ring_bits <= MAX_RING_BITS, "ring_bits out of range");
        1 << self.ring_bits
    }

    /// Returns the mask for index wrapping.
    ///
    /// # Panics
    ///
    /// Panics under the same condition as [`Config::capacity`].
    #[inline]
    pub const fn mask(&self) -> usize {
        self.capacity() - 1
    }

    /// Checks that `ring_bits` fits the cursor width.
    pub fn validate(&self) -> Result<(), FifoError> {
        if self.ring_bits > MAX_RING_BITS {
            return Err(FifoError::InvalidRingBits {
                ring_bits: self.ring_bits,
                max: MAX_RING_BITS,
            });
        }
        Ok(())
    }

    /// Sets `ring_bits`.
    pub const fn with_ring_bits(mut self, ring_bits: u8) -> Self {
        self.ring_bits = ring_bits;
        self
    }

    /// Enables or disables metrics collection.
    pub const fn with_metrics(mut self, enable: bool) -> Self {
        self.enable_metrics = enable;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ring_bits: 8, // 256 slots
            enable_metrics: false,
        }
    }
}

/// Small configuration (64 slots, e.g. a UART receive buffer)
pub const SMALL_CONFIG: Config = Config::new(6, false);

/// Large configuration (64K slots, bulk byte streaming)
pub const LARGE_CONFIG: Config = Config::new(16, false);
