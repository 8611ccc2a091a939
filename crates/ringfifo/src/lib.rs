//! ringfifo-rs - Fixed-Capacity Circular FIFO
//!
//! A kfifo-style ring buffer for moving fixed-size elements between a
//! producer and a consumer without allocating on the hot path. The backing
//! store is a single contiguous region whose capacity is a power of two;
//! two free-running `u32` cursors track the write and read positions.
//!
//! # Key Features
//!
//! - Power-of-two capacity (index masking instead of modulo)
//! - Free-running cursors (unsigned wraparound gives the occupancy directly)
//! - Two-leg split copy (one `copy_from_slice` per side of the physical end)
//! - Best-effort transfers (partial enqueue/dequeue, never blocks)
//! - Borrowed, boxed or inline storage, chosen by a type parameter
//! - Runtime element size via [`RawFifo`] for byte-oriented callers
//!
//! # Example
//!
//! ```
//! use ringfifo_rs::InlineFifo;
//!
//! let mut fifo: InlineFifo<u8, 8> = InlineFifo::new();
//!
//! assert_eq!(fifo.enqueue(&[1, 2, 3, 4, 5]), 5);
//!
//! let mut out = [0u8; 3];
//! assert_eq!(fifo.dequeue(&mut out), 3);
//! assert_eq!(out, [1, 2, 3]);
//!
//! // Only 6 slots are free: the enqueue is truncated, not rejected.
//! assert_eq!(fifo.enqueue(&[6, 7, 8, 9, 10, 11, 12]), 6);
//! assert!(fifo.is_full());
//! ```

mod config;
mod copy;
mod cursor;
mod error;
mod fifo;
mod invariants;
mod io;
mod metrics;
mod raw;

pub use config::{Config, LARGE_CONFIG, SMALL_CONFIG};
pub use cursor::MAX_CAPACITY;
pub use error::FifoError;
pub use fifo::{BoxedFifo, Fifo, InlineFifo, SliceFifo};
pub use metrics::Metrics;
pub use raw::RawFifo;
