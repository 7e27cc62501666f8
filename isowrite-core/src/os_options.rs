use std::fs::OpenOptions;

#[cfg(target_os = "linux")]
use std::os::unix::fs::OpenOptionsExt;
#[cfg(windows)]
use std::os::windows::fs::OpenOptionsExt;

/// Open options for the raw, exclusive write handle on a device.
///
/// On Linux `O_EXCL` on a block device makes the kernel refuse the open while
/// anything still holds the device (a mount, another exclusive opener). On
/// Windows a zero share mode gives the same exclusivity for the handle.
pub(crate) fn exclusive_write() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.write(true);

    #[cfg(target_os = "linux")]
    options.custom_flags(libc::O_EXCL);

    #[cfg(windows)]
    options.share_mode(0);

    options
}

/// Open options for a volume handle that other handles may keep sharing.
#[cfg(windows)]
pub(crate) fn shared_read_write() -> OpenOptions {
    use windows_sys::Win32::Storage::FileSystem::{FILE_SHARE_READ, FILE_SHARE_WRITE};

    let mut options = OpenOptions::new();
    options
        .read(true)
        .write(true)
        .share_mode(FILE_SHARE_READ | FILE_SHARE_WRITE);
    options
}
