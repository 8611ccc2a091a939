//! Byte-stream and fixed-size-record fifos, as an interrupt-driven UART
//! driver and a sensor logger would use them.
//!
//! Run with: cargo run --example uart_frames

use anyhow::Result;
use ringfifo_rs::{InlineFifo, RawFifo, SliceFifo, SMALL_CONFIG};
use std::io::{Read, Write};

/// Fixed-size sensor record, stored by value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Reading {
    sensor: u8,
    millivolts: u16,
}

fn main() -> Result<()> {
    println!("=== ringfifo examples ===\n");

    uart_rx()?;
    sensor_log()?;
    raw_records()?;

    Ok(())
}

/// A receive fifo over a static-style byte region owned by the caller.
fn uart_rx() -> Result<()> {
    println!("1. UART receive buffer (SliceFifo<u8>)");

    let mut rx_region = [0u8; 32];
    let mut rx = SliceFifo::from_storage(&mut rx_region[..])?;

    // "interrupt handler" pushes bytes as they arrive
    let burst = b"+CSQ: 21,99\r\nOK\r\n+CREG: 0,1\r\nOK\r\n";
    let accepted = rx.enqueue(burst);
    println!(
        "   burst of {} bytes, accepted {} ({} dropped)",
        burst.len(),
        accepted,
        burst.len() - accepted
    );

    let mut line = String::new();
    rx.read_to_string(&mut line)?;
    println!("   drained: {:?}", line);

    write!(rx, "AT\r\n")?;
    println!("   {} bytes pending after write!\n", rx.len());
    Ok(())
}

/// A typed fifo of records with a compile-time capacity.
fn sensor_log() -> Result<()> {
    println!("2. Sensor log (InlineFifo<Reading, 8>)");

    let mut log: InlineFifo<Reading, 8> = InlineFifo::new();
    for i in 0..10u16 {
        let r = Reading {
            sensor: (i % 3) as u8,
            millivolts: 3300 - i * 10,
        };
        if !log.push(r) {
            println!("   full, reading {} dropped", i);
        }
    }

    let (front, wrapped) = log.as_slices();
    println!("   {} queued ({} + {})", log.len(), front.len(), wrapped.len());
    while let Some(r) = log.pop() {
        println!("   sensor {} = {} mV", r.sensor, r.millivolts);
    }
    println!();
    Ok(())
}

/// Records whose size is only known at run time.
fn raw_records() -> Result<()> {
    println!("3. Runtime element size (RawFifo, 6-byte records)");

    let mut fifo = RawFifo::with_config(SMALL_CONFIG.with_metrics(true), 6)?;
    let record = [0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x01];
    for _ in 0..70 {
        fifo.enqueue(&record);
    }

    let mut out = [0u8; 6 * 16];
    let n = fifo.dequeue(&mut out);
    println!("   dequeued {} records, {} still queued", n, fifo.len());
    println!("   metrics: {:?}", fifo.metrics());
    Ok(())
}
