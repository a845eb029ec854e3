//! Byte-exact copying of the compiler input into a temp file.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// Size of the buffer data is streamed through.
pub const CHUNK_SIZE: usize = 512;

/// Copies a named file or standard input into a destination file.
///
/// Every failure is returned as an `io::Error`; handles are closed on all
/// paths when they go out of scope. After a failed copy the destination's
/// contents are unspecified.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileCopier;

impl FileCopier {
    pub fn new() -> Self {
        Self
    }

    /// Copy `source` (or stdin when `None`) to `destination`, truncating it.
    /// Returns the number of bytes copied.
    pub fn copy(&self, source: Option<&Path>, destination: &Path) -> io::Result<u64> {
        match source {
            Some(path) => {
                let mut reader = File::open(path)?;
                let mut writer = File::create(destination)?;
                copy_stream(&mut reader, &mut writer)
            }
            None => {
                let mut reader = io::stdin().lock();
                let mut writer = File::create(destination)?;
                copy_stream(&mut reader, &mut writer)
            }
        }
    }
}

/// Stream `reader` into `writer` in [`CHUNK_SIZE`] pieces until end of input.
pub fn copy_stream<R, W>(reader: &mut R, writer: &mut W) -> io::Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buffer = [0u8; CHUNK_SIZE];
    let mut total: u64 = 0;

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        writer.write_all(&buffer[..read])?;
        total += read as u64;
    }

    writer.flush()?;
    Ok(total)
}
