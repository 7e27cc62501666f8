//! Contains the logic for writing an image file to a device.
//!
//! The copy is deliberately plain: fixed 4 KiB chunks, one write call per
//! chunk, and every write must report exactly the number of bytes it was
//! given. The first failure ends the run and leaves the device partially
//! written; nothing is retried, resumed or verified afterwards.
use crate::device::DeviceRef;
use crate::error::{FlashError, Result};
use crate::platform::Platform;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Bytes moved from the image to the device per write call.
pub const CHUNK_SIZE: usize = 4096;

/// What a completed run wrote.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WriteReport {
    /// Total bytes written to the device; equals the image size.
    pub bytes_written: u64,
    /// Number of write calls issued, all but the last of [`CHUNK_SIZE`] bytes.
    pub chunks: u64,
}

/// One in-progress copy from an image into a device handle.
///
/// Owns the source reader and the reusable chunk buffer, and tracks how far
/// the copy has got so failures can say where they happened.
pub struct Session<R> {
    source: R,
    source_path: PathBuf,
    buffer: Vec<u8>,
    transferred: u64,
    chunks: u64,
}

impl<R: Read> Session<R> {
    /// `source_path` is only used to name the image in error messages.
    pub fn new(source: R, source_path: impl Into<PathBuf>) -> Self {
        Self {
            source,
            source_path: source_path.into(),
            buffer: vec![0u8; CHUNK_SIZE],
            transferred: 0,
            chunks: 0,
        }
    }

    /// Reads until the buffer is full or the source is exhausted.
    ///
    /// Returns the number of bytes in the buffer, which is only less than
    /// [`CHUNK_SIZE`] for the final chunk, and zero once nothing is left.
    fn fill_chunk(&mut self) -> Result<usize> {
        let mut filled = 0;
        while filled < CHUNK_SIZE {
            match self.source.read(&mut self.buffer[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(FlashError::SourceRead {
                        path: self.source_path.clone(),
                        offset: self.transferred + filled as u64,
                        source,
                    });
                }
            }
        }
        Ok(filled)
    }

    /// Streams the whole source into `sink`, then flushes it.
    pub fn copy_to<W: Write>(mut self, sink: &mut W) -> Result<WriteReport> {
        loop {
            let requested = self.fill_chunk()?;
            if requested == 0 {
                break;
            }

            // A single `write` per chunk: `write_all` would hide short writes
            // by looping over them.
            let written = sink
                .write(&self.buffer[..requested])
                .map_err(|source| FlashError::Write {
                    offset: self.transferred,
                    source,
                })?;
            if written != requested {
                return Err(FlashError::ShortWrite {
                    offset: self.transferred,
                    requested,
                    written,
                });
            }

            self.transferred += requested as u64;
            self.chunks += 1;
        }

        sink.flush().map_err(|source| FlashError::Write {
            offset: self.transferred,
            source,
        })?;

        Ok(WriteReport {
            bytes_written: self.transferred,
            chunks: self.chunks,
        })
    }
}

/// Unmounts `device` and writes the image at `image_path` onto it.
///
/// This is the main entry point for an imaging run. The image is opened
/// first, so a missing or unreadable image fails before the device is touched
/// at all. The device is then unmounted through `platform`, and only after
/// that succeeds is it opened for writing.
///
/// # Errors
///
/// This function will return an error if:
/// - The image cannot be opened or read.
/// - The device cannot be unmounted (including not being mounted, on
///   platforms that resolve devices through the mount table).
/// - The device cannot be opened for writing.
/// - Any chunk write fails or writes fewer bytes than requested.
pub fn run<P: Platform>(platform: &P, image_path: &Path, device: &DeviceRef) -> Result<WriteReport> {
    let image = File::open(image_path).map_err(|source| FlashError::SourceOpen {
        path: image_path.to_path_buf(),
        source,
    })?;
    debug!(image = %image_path.display(), "opened image");

    platform.unmount(device)?;

    let mut handle = platform.open_for_write(device)?;
    info!(image = %image_path.display(), %device, "writing image");

    let report = Session::new(image, image_path).copy_to(&mut handle)?;
    info!(
        bytes = report.bytes_written,
        chunks = report.chunks,
        "image written"
    );
    Ok(report)
}
