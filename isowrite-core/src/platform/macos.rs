use super::Platform;
use crate::device::DeviceRef;
use crate::error::{FlashError, Result};
use crate::os_options;
use crate::unmount;
use nix::mount::MntFlags;
use std::fs::File;
use std::io;
use std::process::Command;

/// macOS: `unmount(2)` takes a mount point, not a device, so the device is
/// looked up in the output of `mount` first.
#[derive(Clone, Copy, Debug, Default)]
pub struct MacOs;

/// Runs `mount` with no arguments and returns its listing.
fn list_mounts() -> io::Result<String> {
    let output = Command::new("mount").output()?;
    if !output.status.success() {
        return Err(io::Error::other(format!("mount exited with {}", output.status)));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

impl Platform for MacOs {
    type Handle = File;

    fn unmount(&self, device: &DeviceRef) -> Result<()> {
        unmount::by_mount_table(device, list_mounts, |mount_point| {
            nix::mount::unmount(mount_point, MntFlags::MNT_FORCE).map_err(io::Error::from)
        })
    }

    fn open_for_write(&self, device: &DeviceRef) -> Result<File> {
        os_options::exclusive_write()
            .open(device.as_path())
            .map_err(|source| FlashError::DeviceOpen {
                device: device.to_string(),
                source,
            })
    }
}
