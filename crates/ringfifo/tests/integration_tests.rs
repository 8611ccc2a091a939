//! End-to-end scenarios across the storage variants.

use ringfifo_rs::{
    BoxedFifo, Config, Fifo, FifoError, InlineFifo, RawFifo, SliceFifo, LARGE_CONFIG,
    SMALL_CONFIG,
};
use std::io::{Read, Write};

// =============================================================================
// STORAGE VARIANTS
// =============================================================================

#[test]
fn test_eight_byte_scenario_on_every_storage() {
    fn run<S: AsRef<[u8]> + AsMut<[u8]>>(mut fifo: Fifo<u8, S>) {
        assert_eq!(fifo.enqueue(&[1, 2, 3, 4, 5]), 5);
        assert_eq!(fifo.len(), 5);

        let mut out = [0u8; 3];
        assert_eq!(fifo.dequeue(&mut out), 3);
        assert_eq!(out, [1, 2, 3]);
        assert_eq!(fifo.len(), 2);

        assert_eq!(fifo.enqueue(&[6, 7, 8, 9, 10, 11]), 6);
        assert_eq!(fifo.len(), 8);
        assert!(fifo.is_full());

        let mut out = [0u8; 8];
        assert_eq!(fifo.dequeue(&mut out), 8);
        assert_eq!(out, [4, 5, 6, 7, 8, 9, 10, 11]);
        assert_eq!(fifo.len(), 0);
        assert!(fifo.is_empty());
    }

    let mut buf = [0u8; 8];
    run(SliceFifo::from_storage(&mut buf[..]).unwrap());
    run(BoxedFifo::<u8>::with_config(Config::new(3, false)).unwrap());
    run(InlineFifo::<u8, 8>::new());
    run(Fifo::<u8, Vec<u8>>::from_storage(vec![0u8; 8]).unwrap());
}

#[test]
fn test_caller_region_is_not_cleared() {
    let mut buf = [0xEEu8; 4];
    let mut fifo = SliceFifo::from_storage(&mut buf[..]).unwrap();
    assert!(fifo.is_empty());
    assert!(fifo.push(1));
    drop(fifo);
    assert_eq!(buf, [1, 0xEE, 0xEE, 0xEE]);
}

#[test]
fn test_rejects_bad_regions() {
    let mut words = vec![0u32; 100];
    let err = SliceFifo::from_storage(&mut words[..]).unwrap_err();
    assert_eq!(err, FifoError::NotPowerOfTwo { capacity: 100 });
    assert!(err.is_capacity_error());

    let mut bytes = [0u8; 100];
    assert_eq!(
        RawFifo::new(&mut bytes[..], 10).unwrap_err(),
        FifoError::NotPowerOfTwo { capacity: 10 }
    );
    assert_eq!(
        RawFifo::new(&mut bytes[..], 8).unwrap_err(),
        FifoError::RegionSize {
            len: 100,
            element_size: 8
        }
    );
    // 100 / 25 = 4 elements
    assert_eq!(RawFifo::new(&mut bytes[..], 25).map(|f| f.capacity()), Ok(4));
}

#[test]
fn test_presets() {
    let small = BoxedFifo::<u8>::with_config(SMALL_CONFIG).unwrap();
    assert_eq!(small.capacity(), 64);

    let large = RawFifo::with_config(LARGE_CONFIG, 4).unwrap();
    assert_eq!(large.capacity(), 65536);
    assert_eq!(large.capacity_bytes(), 65536 * 4);
}

// =============================================================================
// RAW AND TYPED AGREE
// =============================================================================

#[test]
fn test_raw_and_typed_store_the_same_bytes() {
    let samples: [u32; 6] = [0x0102_0304, 5, 6, 7, 8, 0xAABB_CCDD];
    let bytes: Vec<u8> = samples.iter().flat_map(|s| s.to_ne_bytes()).collect();

    let mut typed: InlineFifo<u32, 4> = InlineFifo::new();
    let mut raw = RawFifo::new(vec![0u8; 16], 4).unwrap();

    assert_eq!(typed.enqueue(&samples[..3]), 3);
    assert_eq!(raw.enqueue(&bytes[..12]), 3);
    assert_eq!(typed.skip(2), raw.skip(2));

    // second write straddles the physical end for both
    assert_eq!(typed.enqueue(&samples[3..]), 3);
    assert_eq!(raw.enqueue(&bytes[12..]), 3);

    let mut typed_out = [0u32; 4];
    let mut raw_out = [0u8; 16];
    assert_eq!(typed.dequeue(&mut typed_out), 4);
    assert_eq!(raw.dequeue(&mut raw_out), 4);

    let decoded: Vec<u32> = raw_out
        .chunks_exact(4)
        .map(|c| u32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    assert_eq!(typed_out.to_vec(), decoded);
    assert_eq!(decoded, samples[2..].to_vec());
}

// =============================================================================
// BEST-EFFORT LOOPS
// =============================================================================

#[test]
fn test_producer_consumer_loop_moves_everything() {
    let payload: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();
    let mut fifo: InlineFifo<u8, 64> = InlineFifo::new().with_metrics(true);

    let mut sent = 0;
    let mut received = Vec::with_capacity(payload.len());
    let mut chunk = [0u8; 37];

    while received.len() < payload.len() {
        let end = (sent + 50).min(payload.len());
        sent += fifo.enqueue(&payload[sent..end]);

        let n = fifo.dequeue(&mut chunk);
        received.extend_from_slice(&chunk[..n]);
    }

    assert_eq!(received, payload);
    let m = fifo.metrics();
    assert_eq!(m.elements_enqueued, 10_000);
    assert_eq!(m.elements_dequeued, 10_000);
    assert!(m.truncated_enqueues > 0);
}

#[test]
fn test_io_copy_through_fifo() {
    let mut fifo: InlineFifo<u8, 32> = InlineFifo::new();
    let message = b"best-effort transfers report their count";

    let mut written = 0;
    let mut echoed = Vec::new();
    while echoed.len() < message.len() {
        written += fifo.write(&message[written..]).unwrap();
        let mut buf = [0u8; 7];
        let n = fifo.read(&mut buf).unwrap();
        echoed.extend_from_slice(&buf[..n]);
    }
    fifo.flush().unwrap();

    assert_eq!(&echoed[..], &message[..]);
}
