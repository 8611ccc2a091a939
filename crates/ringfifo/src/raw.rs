//! Byte fifo with a runtime element size.
//!
//! [`RawFifo<S>`] is for callers that only know the element size at run
//! time, or that move elements as raw bytes (serialized frames, DMA
//! descriptors, register snapshots). Element counts are derived from byte
//! lengths and every offset is scaled by the element size before the split
//! copy, so multi-byte elements never tear across the physical end.

use crate::copy;
use crate::cursor::Cursors;
use crate::{Config, FifoError, Metrics};

/// A fixed-capacity circular fifo of `element_size`-byte elements.
pub struct RawFifo<S> {
    storage: S,
    element_size: usize,
    cursors: Cursors,
    metrics: Metrics,
    metrics_enabled: bool,
}

impl<S: AsRef<[u8]> + AsMut<[u8]>> RawFifo<S> {
    /// Creates a fifo over the byte region `storage`, holding
    /// `storage.len() / element_size` elements.
    ///
    /// The region must be a whole number of elements and that number must be
    /// a power of two.
    ///
    /// # Example
    ///
    /// ```
    /// use ringfifo_rs::RawFifo;
    ///
    /// let mut region = [0u8; 96];
    /// let mut fifo = RawFifo::new(&mut region[..], 12).unwrap();
    /// assert_eq!(fifo.capacity(), 8);
    ///
    /// // 2 whole elements; the trailing 5 bytes are not an element
    /// assert_eq!(fifo.enqueue(&[0xAB; 29]), 2);
    /// ```
    pub fn new(storage: S, element_size: usize) -> Result<Self, FifoError> {
        if element_size == 0 {
            return Err(FifoError::ZeroElementSize);
        }

        let len = storage.as_ref().len();
        if len % element_size != 0 {
            return Err(FifoError::RegionSize { len, element_size });
        }

        let capacity = len / element_size;
        Cursors::validate(capacity)?;

        tracing::debug!(capacity, element_size, "raw fifo initialized");

        Ok(Self {
            storage,
            element_size,
            cursors: Cursors::new(capacity),
            metrics: Metrics::new(),
            metrics_enabled: false,
        })
    }

    /// Enables or disables metrics collection.
    pub fn with_metrics(mut self, enable: bool) -> Self {
        self.metrics_enabled = enable;
        self
    }

    // ---------------------------------------------------------------------
    // STATUS
    // ---------------------------------------------------------------------

    /// Returns the capacity in elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cursors.capacity()
    }

    /// Returns the size of one element in bytes.
    #[inline]
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Returns the capacity in bytes.
    #[inline]
    pub fn capacity_bytes(&self) -> usize {
        self.capacity() * self.element_size
    }

    /// Returns the number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    /// Returns the number of free element slots.
    #[inline]
    pub fn available(&self) -> usize {
        self.cursors.available()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cursors.is_full()
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn clear_metrics(&mut self) {
        self.metrics.clear();
    }

    // ---------------------------------------------------------------------
    // TRANSFERS
    // ---------------------------------------------------------------------

    /// Copies as many whole elements of `src` as fit, returning the element
    /// count stored.
    ///
    /// `src` is read as `src.len() / element_size()` elements; a trailing
    /// partial element is ignored.
    pub fn enqueue(&mut self, src: &[u8]) -> usize {
        let requested = src.len() / self.element_size;
        let accepted = requested.min(self.cursors.available());

        let offset = self.cursors.write_index() * self.element_size;
        copy::copy_in(
            self.storage.as_mut(),
            offset,
            &src[..accepted * self.element_size],
        );
        self.cursors.advance_write(accepted);

        if accepted < requested {
            tracing::trace!(requested, accepted, "raw enqueue truncated");
        }
        if self.metrics_enabled {
            self.metrics.record_enqueue(requested, accepted);
        }
        accepted
    }

    /// Moves up to `dst.len() / element_size()` elements into `dst`,
    /// returning the element count delivered.
    pub fn dequeue(&mut self, dst: &mut [u8]) -> usize {
        let requested = dst.len() / self.element_size;
        let delivered = self.peek(dst);
        self.cursors.advance_read(delivered);

        if delivered < requested {
            tracing::trace!(requested, delivered, "raw dequeue short");
        }
        if self.metrics_enabled {
            self.metrics.record_dequeue(requested, delivered);
        }
        delivered
    }

    /// Copies up to `dst.len() / element_size()` elements into `dst` without
    /// removing them.
    pub fn peek(&self, dst: &mut [u8]) -> usize {
        let count = (dst.len() / self.element_size).min(self.cursors.len());

        let offset = self.cursors.read_index() * self.element_size;
        copy::copy_out(
            self.storage.as_ref(),
            offset,
            &mut dst[..count * self.element_size],
        );
        count
    }

    /// Discards up to `n` of the oldest elements, returning how many were
    /// dropped.
    pub fn skip(&mut self, n: usize) -> usize {
        let skipped = n.min(self.cursors.len());
        self.cursors.advance_read(skipped);
        skipped
    }

    // ---------------------------------------------------------------------
    // LIFECYCLE
    // ---------------------------------------------------------------------

    /// Empties the fifo by moving both cursors back to zero.
    pub fn reset(&mut self) {
        tracing::debug!(discarded = self.cursors.len(), "raw fifo reset");
        self.cursors.reset();
    }

    /// Gives the backing region back to the caller.
    pub fn into_storage(self) -> S {
        self.storage
    }

    #[cfg(test)]
    fn set_position(&mut self, pos: u32) {
        self.cursors.set_position(pos);
    }
}

impl RawFifo<Box<[u8]>> {
    /// Allocates a zeroed region of `config.capacity()` elements of
    /// `element_size` bytes each.
    ///
    /// Fails with [`FifoError::RegionTooLarge`] when that byte count does not
    /// fit in `usize`.
    pub fn with_config(config: Config, element_size: usize) -> Result<Self, FifoError> {
        config.validate()?;
        if element_size == 0 {
            return Err(FifoError::ZeroElementSize);
        }
        let capacity = config.capacity();
        let bytes = capacity
            .checked_mul(element_size)
            .ok_or(FifoError::RegionTooLarge {
                capacity,
                element_size,
            })?;
        let storage = vec![0u8; bytes].into_boxed_slice();
        Self::new(storage, element_size).map(|fifo| fifo.with_metrics(config.enable_metrics))
    }
}

impl<S> std::fmt::Debug for RawFifo<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawFifo")
            .field("capacity", &self.cursors.capacity())
            .field("len", &self.cursors.len())
            .field("element_size", &self.element_size)
            .finish_non_exhaustive()
    }
}
