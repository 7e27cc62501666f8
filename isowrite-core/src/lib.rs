//! The core, UI-agnostic library for the `isowrite` imaging utility.
//!
//! `isowrite-core` does one thing: release a block device from the host's
//! filesystem layer and stream an image onto it. A run always happens in this
//! order:
//!
//! 1. The image is opened for reading.
//! 2. The device is unmounted with the host's own mechanism.
//! 3. The device is opened for raw writing and the image is copied onto it in
//!    4 KiB chunks, each write checked for its full byte count.
//!
//! The library is structured into several key modules:
//! - [`device`]: The [`DeviceRef`](device::DeviceRef) naming the target.
//! - [`platform`]: The [`Platform`](platform::Platform) trait and the
//!   implementation for each supported OS.
//! - [`mount_table`]: The lookup of a device's mount point in a `mount` listing.
//! - [`unmount`]: The unmount strategies the platforms are built from.
//! - [`mod@write`]: The chunked copy and the [`write::run`] entry point.
//! - [`error`]: The [`FlashError`](error::FlashError) taxonomy.
//!
//! ## Example: Writing an Image
//!
//! ```rust,no_run
//! use isowrite_core::{device::DeviceRef, platform, write};
//! use std::path::Path;
//!
//! fn main() -> isowrite_core::error::Result<()> {
//!     let device = DeviceRef::new("/dev/sdb")?;
//!     let report = write::run(&platform::native(), Path::new("debian.iso"), &device)?;
//!
//!     println!("{} bytes written", report.bytes_written);
//!     Ok(())
//! }
//! ```

pub mod device;
pub mod error;
pub mod mount_table;
mod os_options;
pub mod platform;
pub mod unmount;
pub mod write;

pub use error::{FlashError, Result};
