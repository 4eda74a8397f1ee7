//! Test fixtures: channels carrying each of the canonical access rights.
//!
//! Only compiled with the `test-utils` feature.

use crate::channel::ChannelAccess;
use crate::rights::canonical_access_rights;

/// Channels named `<prefix>:NONE`, `<prefix>:READ`, `<prefix>:WRITE` and `<prefix>:ALL`,
/// in that order, each granted the matching canonical rights.
pub fn canonical_channels(prefix: &str) -> [ChannelAccess; 4] {
    let (none, read, write, all) = canonical_access_rights();
    [
        ChannelAccess::new(format!("{prefix}:NONE"), none),
        ChannelAccess::new(format!("{prefix}:READ"), read),
        ChannelAccess::new(format!("{prefix}:WRITE"), write),
        ChannelAccess::new(format!("{prefix}:ALL"), all),
    ]
}
