use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop an imaging run.
///
/// Every variant is terminal: nothing in this crate retries or resumes after
/// one of these is returned. Variants that wrap an OS failure keep it as the
/// error source, so callers that render the full chain get the OS text too.
#[derive(Error, Debug)]
pub enum FlashError {
    #[error("Device reference is empty")]
    EmptyDevice,

    #[error("Failed to open ISO file: {}", path.display())]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read ISO file {} at byte {offset}", path.display())]
    SourceRead {
        path: PathBuf,
        offset: u64,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open device for writing: {device}")]
    DeviceOpen {
        device: String,
        #[source]
        source: io::Error,
    },

    /// The volume handle needed for a dismount request could not be obtained.
    #[error("Failed to open volume: {device}")]
    VolumeOpen {
        device: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to dismount volume: {device}")]
    Dismount {
        device: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to list mounted filesystems")]
    MountListing(#[source] io::Error),

    #[error("Device is not mounted: {0}")]
    NotMounted(String),

    #[error("Failed to unmount {target} (device {device})")]
    Unmount {
        device: String,
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write to device at byte {offset}")]
    Write {
        offset: u64,
        #[source]
        source: io::Error,
    },

    #[error("Short write to device at byte {offset}: wrote {written} of {requested} bytes")]
    ShortWrite {
        offset: u64,
        requested: usize,
        written: usize,
    },
}

/// Result type alias for imaging operations.
pub type Result<T> = std::result::Result<T, FlashError>;
