//! Text scan over a `mount(8)`-style listing.
//!
//! Each line of the listing looks like
//! `/dev/disk4s1 on /Volumes/UNTITLED (msdos, local, nodev, nosuid)`: the
//! mounted device comes first and the mount point is the third
//! whitespace-separated field.

/// Finds the mount point of `device` in a mount listing.
///
/// Returns the third field of the first line whose first field contains
/// `device` as a substring. Lines with fewer than three fields are skipped.
/// Later matching lines are ignored, so `/dev/disk4` resolves to whichever of
/// its partitions the listing names first.
pub fn find_mount_point<'a>(listing: &'a str, device: &str) -> Option<&'a str> {
    listing.lines().find_map(|line| {
        let mut fields = line.split_whitespace();
        let source = fields.next()?;
        if !source.contains(device) {
            return None;
        }
        fields.nth(1)
    })
}
