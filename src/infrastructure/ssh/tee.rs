//! Output duplication
//!
//! A [`Tee`] forwards every chunk written to it to each sink in order.

use std::io::{self, Write};

#[derive(Default)]
pub struct Tee<'a> {
    sinks: Vec<&'a mut dyn Write>,
}

impl<'a> Tee<'a> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Append a sink; chunks reach sinks in the order they were added.
    pub fn with(mut self, sink: &'a mut dyn Write) -> Self {
        self.sinks.push(sink);
        self
    }
}

impl Write for Tee<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for sink in self.sinks.iter_mut() {
            sink.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        for sink in self.sinks.iter_mut() {
            sink.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sink_sees_every_chunk_in_order() {
        let mut live = Vec::new();
        let mut capture = Vec::new();
        {
            let mut tee = Tee::new().with(&mut live).with(&mut capture);
            tee.write_all(b"first\n").unwrap();
            tee.write_all(b"second").unwrap();
            tee.flush().unwrap();
        }
        assert_eq!(live, b"first\nsecond");
        assert_eq!(capture, live);
    }

    #[test]
    fn empty_tee_accepts_writes() {
        let mut tee = Tee::new();
        assert_eq!(tee.write(b"ignored").unwrap(), 7);
    }
}
