//! Backing storage for parts that are streamed before assembly

use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};

use crate::options::WriterOptions;

/// Anonymous temp file or in-memory buffer
///
/// Temp files are unlinked by the OS as soon as they are created, so nothing
/// is left behind if the writer is dropped or the process dies.
#[derive(Debug)]
pub enum Backing {
    /// Anonymous temporary file
    File(File),
    /// Growable in-memory buffer
    Memory(Cursor<Vec<u8>>),
    /// In-memory buffer that refuses writes past a byte limit
    #[cfg(test)]
    Limited(Cursor<Vec<u8>>, u64),
}

impl Backing {
    /// Create storage according to the writer options
    pub fn create(options: &WriterOptions) -> io::Result<Self> {
        if options.in_memory {
            return Ok(Self::memory());
        }

        let file = match &options.temp_dir {
            Some(dir) => tempfile::tempfile_in(dir)?,
            None => tempfile::tempfile()?,
        };
        Ok(Backing::File(file))
    }

    /// Create in-memory storage
    pub fn memory() -> Self {
        Backing::Memory(Cursor::new(Vec::new()))
    }

    /// In-memory storage that fails once `limit` bytes would be exceeded
    #[cfg(test)]
    pub(crate) fn limited(limit: u64) -> Self {
        Backing::Limited(Cursor::new(Vec::new()), limit)
    }

    /// Move back to the start, ready to be read
    pub fn rewind(&mut self) -> io::Result<()> {
        self.seek(SeekFrom::Start(0)).map(|_| ())
    }

    /// Read the whole content from the start
    pub fn read_all(&mut self) -> io::Result<Vec<u8>> {
        self.rewind()?;
        let mut out = Vec::new();
        self.read_to_end(&mut out)?;
        Ok(out)
    }
}

impl Read for Backing {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Backing::File(f) => f.read(buf),
            Backing::Memory(c) => c.read(buf),
            #[cfg(test)]
            Backing::Limited(c, _) => c.read(buf),
        }
    }
}

impl Write for Backing {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Backing::File(f) => f.write(buf),
            Backing::Memory(c) => c.write(buf),
            #[cfg(test)]
            Backing::Limited(c, limit) => {
                if c.position() + buf.len() as u64 > *limit {
                    return Err(io::Error::new(io::ErrorKind::Other, "storage limit reached"));
                }
                c.write(buf)
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Backing::File(f) => f.flush(),
            Backing::Memory(c) => c.flush(),
            #[cfg(test)]
            Backing::Limited(c, _) => c.flush(),
        }
    }
}

impl Seek for Backing {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match self {
            Backing::File(f) => f.seek(pos),
            Backing::Memory(c) => c.seek(pos),
            #[cfg(test)]
            Backing::Limited(c, _) => c.seek(pos),
        }
    }
}
