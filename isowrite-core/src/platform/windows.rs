use super::Platform;
use crate::device::DeviceRef;
use crate::error::{FlashError, Result};
use crate::os_options;
use std::fs::File;
use std::io;
use std::os::windows::io::AsRawHandle;
use std::ptr;
use tracing::{debug, info};
use windows_sys::Win32::Foundation::HANDLE;
use windows_sys::Win32::System::IO::DeviceIoControl;
use windows_sys::Win32::System::Ioctl::FSCTL_DISMOUNT_VOLUME;

/// Windows: volumes are dismounted through a control request on an open
/// volume handle (e.g. `\\.\E:`).
#[derive(Clone, Copy, Debug, Default)]
pub struct Windows;

impl Platform for Windows {
    type Handle = File;

    /// Opens the volume with read/write sharing and sends
    /// `FSCTL_DISMOUNT_VOLUME`. The handle is closed when it goes out of scope,
    /// on success and on failure.
    fn unmount(&self, device: &DeviceRef) -> Result<()> {
        let volume = os_options::shared_read_write()
            .open(device.as_path())
            .map_err(|source| FlashError::VolumeOpen {
                device: device.to_string(),
                source,
            })?;
        debug!(%device, "sending FSCTL_DISMOUNT_VOLUME");

        let mut bytes_returned: u32 = 0;
        // SAFETY: `volume` is a live handle for the duration of the call and
        // the request takes no input or output buffers.
        let ok = unsafe {
            DeviceIoControl(
                volume.as_raw_handle() as HANDLE,
                FSCTL_DISMOUNT_VOLUME,
                ptr::null(),
                0,
                ptr::null_mut(),
                0,
                &mut bytes_returned,
                ptr::null_mut(),
            )
        };
        if ok == 0 {
            return Err(FlashError::Dismount {
                device: device.to_string(),
                source: io::Error::last_os_error(),
            });
        }

        info!(%device, "dismounted");
        Ok(())
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
