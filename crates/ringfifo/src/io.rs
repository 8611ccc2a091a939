//! `std::io` adapters for byte fifos.
//!
//! Both directions keep the best-effort contract: `write` stores what fits
//! and `read` returns what is queued. A full fifo makes `write` return
//! `Ok(0)`, which `Write::write_all` reports as `ErrorKind::WriteZero`.

use crate::Fifo;
use std::io;

impl<S: AsRef<[u8]> + AsMut<[u8]>> io::Write for Fifo<u8, S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(self.enqueue(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: AsRef<[u8]> + AsMut<[u8]>> io::Read for Fifo<u8, S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.dequeue(buf))
    }
}
