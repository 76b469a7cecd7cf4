//! Adapter from the engine's byte output to text chunks.

use std::io;

use crate::error::BoxError;

const BOM: char = '\u{FEFF}';

/// Receives emitter output and forwards it as text, one chunk at a time.
///
/// Chunk boundaries follow the engine's internal buffering, not event or
/// document boundaries. A character split across two writes is held back
/// until it is complete, and a leading byte-order mark is dropped.
///
/// When the callback fails, the write fails with an [`io::Error`] wrapping
/// the callback's error and the emitter stops.
pub struct ChunkSink<F> {
    on_chunk: F,
    pending: Vec<u8>,
    at_stream_start: bool,
    chunks: usize,
}

impl<F> ChunkSink<F>
where
    F: FnMut(&str) -> Result<(), BoxError>,
{
    pub fn new(on_chunk: F) -> Self {
        Self {
            on_chunk,
            pending: Vec::new(),
            at_stream_start: true,
            chunks: 0,
        }
    }

    /// Number of chunks delivered so far.
    pub fn chunks(&self) -> usize {
        self.chunks
    }

    /// Bytes of an incomplete character still waiting for the next write.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    fn deliver(&mut self, text: &str) -> io::Result<()> {
        let mut text = text;
        if self.at_stream_start && !text.is_empty() {
            self.at_stream_start = false;
            text = text.strip_prefix(BOM).unwrap_or(text);
        }
        if text.is_empty() {
            return Ok(());
        }

        tracing::trace!(len = text.len(), "delivering output chunk");
        (self.on_chunk)(text).map_err(io::Error::other)?;
        self.chunks += 1;
        Ok(())
    }
}

impl<F> io::Write for ChunkSink<F>
where
    F: FnMut(&str) -> Result<(), BoxError>,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);

        let complete = match std::str::from_utf8(&self.pending) {
            Ok(_) => self.pending.len(),
            Err(err) if err.error_len().is_none() => err.valid_up_to(),
            Err(err) => {
                self.pending.clear();
                return Err(io::Error::new(io::ErrorKind::InvalidData, err));
            }
        };

        let incomplete = self.pending.split_off(complete);
        let bytes = std::mem::replace(&mut self.pending, incomplete);
        let text =
            String::from_utf8(bytes).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        self.deliver(&text)?;

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
