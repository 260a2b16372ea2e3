//! Buffered output with a flush threshold

use std::io::{self, Seek, SeekFrom, Write};

use log::{error, trace, warn};

/// Buffered bytes are handed to the inner writer once they reach this size
pub const FLUSH_THRESHOLD: usize = 8192;

/// Write buffer in front of a sheet's backing storage
///
/// Writes accumulate in memory and go to the inner writer in one piece once
/// [`FLUSH_THRESHOLD`] bytes are pending, on [`tell`](Self::tell) /
/// [`seek`](Self::seek) and on [`close`](Self::close).
///
/// The first failed write to the inner writer is logged and returned; the
/// sink is then marked failed and every later write is silently dropped.
pub struct BufferedSink<W: Write> {
    inner: Option<W>,
    buffer: Vec<u8>,
    threshold: usize,
    validate_utf8: bool,
    failed: bool,
    flushes: usize,
}

impl<W: Write> BufferedSink<W> {
    /// Wrap a writer
    pub fn new(inner: W) -> Self {
        Self::with_threshold(inner, FLUSH_THRESHOLD)
    }

    /// Wrap a writer with a custom flush threshold
    pub fn with_threshold(inner: W, threshold: usize) -> Self {
        Self {
            inner: Some(inner),
            buffer: Vec::with_capacity(threshold),
            threshold: threshold.max(1),
            validate_utf8: false,
            failed: false,
            flushes: 0,
        }
    }

    /// Check buffered bytes for valid UTF-8 before each flush
    ///
    /// Only the first invalid chunk is reported; validation then switches
    /// itself off for the rest of the sink's life.
    pub fn validate_utf8(mut self, validate: bool) -> Self {
        self.validate_utf8 = validate;
        self
    }

    /// Append a string
    pub fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.write_bytes(s.as_bytes())
    }

    /// Append raw bytes, flushing once the threshold is reached
    pub fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        if self.failed || self.inner.is_none() {
            return Ok(());
        }

        self.buffer.extend_from_slice(bytes);
        if self.buffer.len() >= self.threshold {
            self.flush_buffer()?;
        }
        Ok(())
    }

    /// Whether an inner write has failed
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Bytes waiting to be flushed
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Number of times the buffer was handed to the inner writer
    pub fn flush_count(&self) -> usize {
        self.flushes
    }

    /// Borrow the inner writer
    pub fn get_ref(&self) -> Option<&W> {
        self.inner.as_ref()
    }

    /// Flush everything and return the inner writer
    pub fn close(mut self) -> io::Result<W> {
        self.flush_buffer()?;
        if self.failed {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "sink failed before it was closed",
            ));
        }

        let mut inner = self
            .inner
            .take()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "sink already closed"))?;
        inner.flush()?;
        Ok(inner)
    }

    fn flush_buffer(&mut self) -> io::Result<()> {
        if self.buffer.is_empty() || self.failed {
            return Ok(());
        }
        let Some(inner) = self.inner.as_mut() else {
            return Ok(());
        };

        if self.validate_utf8 {
            if let Err(e) = std::str::from_utf8(&self.buffer) {
                // A character split across the flush boundary is not an error
                if e.error_len().is_some() {
                    warn!(
                        "Invalid UTF-8 detected at byte {} of a {}-byte chunk",
                        e.valid_up_to(),
                        self.buffer.len()
                    );
                    self.validate_utf8 = false;
                }
            }
        }

        trace!("Flushing {} buffered bytes", self.buffer.len());
        let result = inner.write_all(&self.buffer);
        self.buffer.clear();
        self.flushes += 1;

        if let Err(e) = result {
            error!("Failed to write buffered output: {}", e);
            self.failed = true;
            return Err(e);
        }
        Ok(())
    }
}

impl<W: Write + Seek> BufferedSink<W> {
    /// Current offset in the inner writer, after flushing
    pub fn tell(&mut self) -> io::Result<u64> {
        self.flush_buffer()?;
        self.seekable()?.stream_position()
    }

    /// Flush, then move the inner writer to an absolute offset
    pub fn seek(&mut self, pos: u64) -> io::Result<u64> {
        self.flush_buffer()?;
        self.seekable()?.seek(SeekFrom::Start(pos))
    }

    fn seekable(&mut self) -> io::Result<&mut W> {
        if self.failed {
            return Err(io::Error::new(io::ErrorKind::Other, "sink has failed"));
        }
        self.inner
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "sink already closed"))
    }
}

impl<W: Write> Write for BufferedSink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buffer()?;
        match self.inner.as_mut() {
            Some(inner) if !self.failed => inner.flush(),
            _ => Ok(()),
        }
    }
}

impl<W: Write> Drop for BufferedSink<W> {
    fn drop(&mut self) {
        if self.inner.is_some() {
            let _ = self.flush_buffer();
        }
    }
}
