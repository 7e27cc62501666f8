use super::Platform;
use crate::device::DeviceRef;
use crate::error::{FlashError, Result};
use crate::os_options;
use crate::unmount;
use std::fs::File;
use std::io;
use tracing::debug;

/// Linux: the kernel unmounts by device path, so no mount table lookup is
/// needed.
#[derive(Clone, Copy, Debug, Default)]
pub struct Linux;

impl Platform for Linux {
    type Handle = File;

    /// Calls `umount(2)` on the device path itself.
    ///
    /// A device that is not mounted makes the call fail with `EINVAL`, which
    /// is reported like any other refusal.
    fn unmount(&self, device: &DeviceRef) -> Result<()> {
        unmount::direct(device, |target| {
            nix::mount::umount(target).map_err(io::Error::from)
        })
    }

    fn open_for_write(&self, device: &DeviceRef) -> Result<File> {
        debug!(%device, "opening device with O_WRONLY | O_EXCL");
        os_options::exclusive_write()
            .open(device.as_path())
            .map_err(|source| FlashError::DeviceOpen {
                device: device.to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn open_for_write_reports_missing_device() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("sdz");
        let device = DeviceRef::new(missing.to_string_lossy()).unwrap();

        let err = Linux.open_for_write(&device).unwrap_err();

        match err {
            FlashError::DeviceOpen { device: d, source } => {
                assert_eq!(d, missing.to_string_lossy());
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn open_for_write_does_not_truncate_or_create() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"0123456789").unwrap();
        let device = DeviceRef::new(file.path().to_string_lossy()).unwrap();

        let mut handle = Linux.open_for_write(&device).unwrap();
        handle.write_all(b"ab").unwrap();
        drop(handle);

        assert_eq!(std::fs::read(file.path()).unwrap(), b"ab23456789");
    }
}
