//! Typed fifo with a compile-time element size.
//!
//! [`Fifo<T, S>`] stores `T: Copy` elements in any storage `S` that can be
//! viewed as `[T]`. The storage type decides who owns the memory:
//!
//! | Alias                | Storage        | Owner  | Built with            |
//! |----------------------|----------------|--------|-----------------------|
//! | [`SliceFifo<'a, T>`] | `&'a mut [T]`  | caller | [`Fifo::from_storage`] |
//! | [`BoxedFifo<T>`]     | `Box<[T]>`     | fifo   | [`Fifo::with_config`]  |
//! | [`InlineFifo<T, N>`] | `[T; N]`       | fifo   | [`Fifo::new`]          |
//!
//! Any other `AsRef<[T]> + AsMut<[T]>` storage (for example `Vec<T>`) works
//! through [`Fifo::from_storage`] as well.
//!
//! # Capacity
//!
//! The element count of the storage must be a non-zero power of two no
//! greater than [`MAX_CAPACITY`](crate::MAX_CAPACITY). Runtime constructors
//! return [`FifoError`] otherwise; [`InlineFifo`] checks `N` at compile time.

use crate::copy;
use crate::cursor::{Cursors, MAX_CAPACITY};
use crate::{Config, FifoError, Metrics};
use std::marker::PhantomData;
use std::mem;

/// Fifo over caller-owned storage, borrowed for the fifo's lifetime.
pub type SliceFifo<'a, T> = Fifo<T, &'a mut [T]>;

/// Fifo over heap storage allocated from a [`Config`].
pub type BoxedFifo<T> = Fifo<T, Box<[T]>>;

/// Fifo with `N` slots embedded in the struct.
pub type InlineFifo<T, const N: usize> = Fifo<T, [T; N]>;

/// A fixed-capacity circular fifo of `T` elements.
///
/// Every transfer is best-effort: [`enqueue`](Self::enqueue) stores as many
/// elements as there is room for and [`dequeue`](Self::dequeue) delivers as
/// many as are queued, both returning the count actually moved.
pub struct Fifo<T, S> {
    storage: S,
    cursors: Cursors,
    metrics: Metrics,
    metrics_enabled: bool,
    _marker: PhantomData<T>,
}

impl<T: Copy, S: AsRef<[T]> + AsMut<[T]>> Fifo<T, S> {
    /// Creates a fifo over `storage`, one slot per element.
    ///
    /// The storage contents are left as they are; only the cursors start at
    /// zero.
    ///
    /// # Example
    ///
    /// ```
    /// use ringfifo_rs::SliceFifo;
    ///
    /// let mut buf = [0u16; 16];
    /// let fifo = SliceFifo::from_storage(&mut buf[..]).unwrap();
    /// assert_eq!(fifo.capacity(), 16);
    /// assert_eq!(fifo.element_size(), 2);
    /// ```
    pub fn from_storage(storage: S) -> Result<Self, FifoError> {
        let capacity = storage.as_ref().len();
        Cursors::validate(capacity)?;

        tracing::debug!(
            capacity,
            element_size = mem::size_of::<T>(),
            "fifo initialized"
        );

        Ok(Self {
            storage,
            cursors: Cursors::new(capacity),
            metrics: Metrics::new(),
            metrics_enabled: false,
            _marker: PhantomData,
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
        mem::size_of::<T>()
    }

    /// Returns the capacity in bytes.
    #[inline]
    pub fn capacity_bytes(&self) -> usize {
        self.capacity() * self.element_size()
    }

    /// Returns the number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    /// Returns the number of free slots.
    #[inline]
    pub fn available(&self) -> usize {
        self.cursors.available()
    }

    /// Returns true if nothing is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    /// Returns true if every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cursors.is_full()
    }

    /// Returns a copy of the collected metrics.
    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    /// Zeroes the collected metrics.
    pub fn clear_metrics(&mut self) {
        self.metrics.clear();
    }

    // ---------------------------------------------------------------------
    // PRODUCER API
    // ---------------------------------------------------------------------

    /// Copies as many elements of `src` as fit, returning how many were
    /// stored.
    ///
    /// A return value below `src.len()` means the fifo filled up; the
    /// remaining elements of `src` were not stored.
    pub fn enqueue(&mut self, src: &[T]) -> usize {
        let accepted = src.len().min(self.cursors.available());

        copy::copy_in(
            self.storage.as_mut(),
            self.cursors.write_index(),
            &src[..accepted],
        );
        self.cursors.advance_write(accepted);

        self.record_enqueue(src.len(), accepted);
        accepted
    }

    /// Stores a single element. Returns `false` if the fifo is full.
    #[inline]
    pub fn push(&mut self, item: T) -> bool {
        self.enqueue(std::slice::from_ref(&item)) == 1
    }

    // ---------------------------------------------------------------------
    // CONSUMER API
    // ---------------------------------------------------------------------

    /// Moves up to `dst.len()` elements into `dst`, returning how many were
    /// delivered.
    pub fn dequeue(&mut self, dst: &mut [T]) -> usize {
        let delivered = self.peek(dst);
        self.cursors.advance_read(delivered);

        self.record_dequeue(dst.len(), delivered);
        delivered
    }

    /// Removes and returns the oldest element.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.cursors.is_empty() {
            return None;
        }
        let item = self.storage.as_ref()[self.cursors.read_index()];
        self.cursors.advance_read(1);

        self.record_dequeue(1, 1);
        Some(item)
    }

    /// Copies up to `dst.len()` elements into `dst` without removing them.
    pub fn peek(&self, dst: &mut [T]) -> usize {
        let count = dst.len().min(self.cursors.len());

        copy::copy_out(
            self.storage.as_ref(),
            self.cursors.read_index(),
            &mut dst[..count],
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

    /// Returns the queued elements, oldest first, as the part before the
    /// physical end of the storage and the part that wrapped to its front.
    ///
    /// The second slice is empty unless the queued run crosses the end.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        copy::legs(
            self.storage.as_ref(),
            self.cursors.read_index(),
            self.cursors.len(),
        )
    }

    // ---------------------------------------------------------------------
    // LIFECYCLE
    // ---------------------------------------------------------------------

    /// Empties the fifo by moving both cursors back to zero.
    ///
    /// Slot contents are left in place; metrics are kept.
    pub fn reset(&mut self) {
        tracing::debug!(discarded = self.cursors.len(), "fifo reset");
        self.cursors.reset();
    }

    /// Gives the backing storage back to the caller.
    pub fn into_storage(self) -> S {
        self.storage
    }

    // ---------------------------------------------------------------------
    // INTERNAL
    // ---------------------------------------------------------------------

    fn record_enqueue(&mut self, requested: usize, accepted: usize) {
        if accepted < requested {
            tracing::trace!(requested, accepted, "enqueue truncated");
        }
        if self.metrics_enabled {
            self.metrics.record_enqueue(requested, accepted);
        }
    }

    fn record_dequeue(&mut self, requested: usize, delivered: usize) {
        if delivered < requested {
            tracing::trace!(requested, delivered, "dequeue short");
        }
        if self.metrics_enabled {
            self.metrics.record_dequeue(requested, delivered);
        }
    }

    #[cfg(test)]
    pub(crate) fn set_position(&mut self, pos: u32) {
        self.cursors.set_position(pos);
    }
}

impl<T: Copy + Default> Fifo<T, Box<[T]>> {
    /// Allocates `config.capacity()` default-initialized slots.
    ///
    /// # Example
    ///
    /// ```
    /// use ringfifo_rs::{BoxedFifo, Config};
    ///
    /// let fifo = BoxedFifo::<u32>::with_config(Config::new(10, true)).unwrap();
    /// assert_eq!(fifo.capacity(), 1024);
    /// ```
    pub fn with_config(config: Config) -> Result<Self, FifoError> {
        config.validate()?;
        let storage = vec![T::default(); config.capacity()].into_boxed_slice();
        Self::from_storage(storage).map(|fifo| fifo.with_metrics(config.enable_metrics))
    }
}

impl<T: Copy + Default, const N: usize> Fifo<T, [T; N]> {
    /// Compile-time capacity check, forced by `new()`.
    const CAPACITY_OK: () = assert!(
        N > 0 && N.is_power_of_two() && N <= MAX_CAPACITY,
        "InlineFifo capacity must be a non-zero power of 2 no greater than MAX_CAPACITY"
    );

    /// Creates an inline fifo with `N` default-initialized slots.
    ///
    /// # Panics
    ///
    /// Fails to compile if `N` is not a usable capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use ringfifo_rs::InlineFifo;
    ///
    /// let fifo: InlineFifo<u64, 32> = InlineFifo::new();
    /// assert_eq!(fifo.capacity(), 32);
    /// ```
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_OK;

        Self {
            storage: [T::default(); N],
            cursors: Cursors::new(N),
            metrics: Metrics::new(),
            metrics_enabled: false,
            _marker: PhantomData,
        }
    }
}

impl<T: Copy + Default, const N: usize> Default for Fifo<T, [T; N]> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> std::fmt::Debug for Fifo<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fifo")
            .field("capacity", &self.cursors.capacity())
            .field("len", &self.cursors.len())
            .field("element_size", &mem::size_of::<T>())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// TESTS
// =============================================================================
