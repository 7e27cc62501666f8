//! Unmount strategies shared by the platform backends.
//!
//! The OS calls are passed in as closures so the lookup and failure handling
//! stay the same whether they run against the real host or a test double.
use crate::device::DeviceRef;
use crate::error::{FlashError, Result};
use crate::mount_table;
use std::io;
use tracing::{debug, info};

/// Looks `device` up in the mount listing and force-unmounts its mount point.
///
/// A device with no entry in the listing is an error, not a no-op: the caller
/// asked for a mounted device to be released and nothing was released.
pub fn by_mount_table<L, U>(device: &DeviceRef, list_mounts: L, unmount_at: U) -> Result<()>
where
    L: FnOnce() -> io::Result<String>,
    U: FnOnce(&str) -> io::Result<()>,
{
    let listing = list_mounts().map_err(FlashError::MountListing)?;

    let mount_point = mount_table::find_mount_point(&listing, device.as_str())
        .ok_or_else(|| FlashError::NotMounted(device.to_string()))?;
    debug!(%device, mount_point, "resolved mount point");

    unmount_at(mount_point).map_err(|source| FlashError::Unmount {
        device: device.to_string(),
        target: mount_point.to_string(),
        source,
    })?;

    info!(%device, mount_point, "unmounted");
    Ok(())
}

/// Unmounts by handing the device reference straight to the unmount call.
pub fn direct<U>(device: &DeviceRef, unmount_at: U) -> Result<()>
where
    U: FnOnce(&str) -> io::Result<()>,
{
    unmount_at(device.as_str()).map_err(|source| FlashError::Unmount {
        device: device.to_string(),
        target: device.to_string(),
        source,
    })?;

    info!(%device, "unmounted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    const LISTING: &str = "\
/dev/disk1s1 on / (apfs, local, journaled)
/dev/disk4s1 on /Volumes/ISO (msdos, local, nodev, nosuid)
";

    fn device(path: &str) -> DeviceRef {
        DeviceRef::new(path).unwrap()
    }

    #[test]
    fn unmounts_resolved_mount_point() {
        let unmounted = RefCell::new(Vec::new());

        by_mount_table(
            &device("/dev/disk4"),
            || Ok(LISTING.to_string()),
            |target| {
                unmounted.borrow_mut().push(target.to_string());
                Ok(())
            },
        )
        .unwrap();

        assert_eq!(unmounted.into_inner(), vec!["/Volumes/ISO".to_string()]);
    }

    #[test]
    fn missing_entry_fails_without_unmounting() {
        let mut called = false;

        let err = by_mount_table(
            &device("/dev/disk7"),
            || Ok(LISTING.to_string()),
            |_| {
                called = true;
                Ok(())
            },
        )
        .unwrap_err();

        assert!(matches!(err, FlashError::NotMounted(ref d) if d == "/dev/disk7"));
        assert_eq!(err.to_string(), "Device is not mounted: /dev/disk7");
        assert!(!called);
    }

    #[test]
    fn listing_failure_is_reported() {
        let err = by_mount_table(
            &device("/dev/disk4"),
            || Err(io::Error::from(io::ErrorKind::NotFound)),
            |_| Ok(()),
        )
        .unwrap_err();

        assert!(matches!(err, FlashError::MountListing(_)));
    }

    #[test]
    fn rejected_unmount_carries_target() {
        let err = by_mount_table(
            &device("/dev/disk4s1"),
            || Ok(LISTING.to_string()),
            |_| Err(io::Error::from_raw_os_error(16)),
        )
        .unwrap_err();

        match err {
            FlashError::Unmount { target, source, .. } => {
                assert_eq!(target, "/Volumes/ISO");
                assert_eq!(source.raw_os_error(), Some(16));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn direct_passes_device_through() {
        let mut seen = None;
        direct(&device("/dev/sdb1"), |target| {
            seen = Some(target.to_string());
            Ok(())
        })
        .unwrap();
        assert_eq!(seen.as_deref(), Some("/dev/sdb1"));

        let err = direct(&device("/dev/sdb1"), |_| {
            Err(io::Error::from(io::ErrorKind::InvalidInput))
        })
        .unwrap_err();
        assert!(matches!(err, FlashError::Unmount { .. }));
    }
}
