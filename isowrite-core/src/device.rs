use crate::error::{FlashError, Result};
use std::fmt;
use std::path::Path;

/// Names the block device an image is written to.
///
/// The string is handed to the operating system as-is (e.g. `/dev/sdb`,
/// `/dev/disk4` or `\\.\E:`). The only check made up front is that it is not
/// empty; whether it names a real device is discovered when it is unmounted
/// and opened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceRef(String);

impl DeviceRef {
    pub fn new(device: impl Into<String>) -> Result<Self> {
        let device = device.into();
        if device.is_empty() {
            return Err(FlashError::EmptyDevice);
        }
        Ok(Self(device))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl AsRef<Path> for DeviceRef {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl fmt::Display for DeviceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
