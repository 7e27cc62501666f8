//! Provides platform-specific functionality.
//!
//! Releasing a device and opening it for raw writes are the two things that
//! differ between operating systems. Both sit behind the [`Platform`] trait;
//! each submodule implements it for one OS and the matching one is exported
//! as [`Native`] through conditional compilation (`#[cfg]`).
//!
//! | OS      | Unmount                                              | Device handle           |
//! |---------|------------------------------------------------------|-------------------------|
//! | Linux   | `umount(2)` on the device path                       | `O_WRONLY \| O_EXCL`    |
//! | macOS   | `mount` listing lookup, then `unmount(2)` forced     | `O_WRONLY`              |
//! | Windows | `FSCTL_DISMOUNT_VOLUME` on a shared volume handle    | exclusive handle        |

use crate::device::DeviceRef;
use crate::error::Result;
use std::io::Write;

/// The operations an imaging run needs from the host.
pub trait Platform {
    /// Handle the image is streamed into.
    type Handle: Write;

    /// Detaches any filesystem the host has mounted from `device`.
    fn unmount(&self, device: &DeviceRef) -> Result<()>;

    /// Opens `device` for raw, sequential writing from its first byte.
    fn open_for_write(&self, device: &DeviceRef) -> Result<Self::Handle>;
}

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "linux")]
pub use self::linux::Linux as Native;

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
pub use self::macos::MacOs as Native;

#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "windows")]
pub use self::windows::Windows as Native;

/// The [`Platform`] for the OS this crate was built for.
pub fn native() -> Native {
    Native::default()
}
