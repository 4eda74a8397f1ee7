//!
//! Access-rights algebra for channel permissions.
//! Defines the `AccessRights` value type, its conversions to and from the native
//! access-rights word, and the four canonical permission values.

use crate::error::AccessError;
use crate::types::{AccessLevel, RawAccessRights, CA_ACCESS_MASK, CA_READ_ACCESS, CA_WRITE_ACCESS};
use std::ops::{BitAnd, BitOr};

/// Read and write permissions for a single channel.
///
/// Both flags are independent: unlike many permission schemes, write access does
/// not imply read access, and all four combinations are meaningful.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct AccessRights {
    pub read_access: bool,
    pub write_access: bool,
}

impl AccessRights {
    /// No access.
    pub const NONE: AccessRights = AccessRights::new(false, false);
    /// Read-only access.
    pub const READ: AccessRights = AccessRights::new(true, false);
    /// Write-only access.
    pub const WRITE: AccessRights = AccessRights::new(false, true);
    /// Full access.
    pub const ALL: AccessRights = AccessRights::new(true, true);

    /// The canonical values in the order none, read, write, all.
    pub const CANONICAL: [AccessRights; 4] = [Self::NONE, Self::READ, Self::WRITE, Self::ALL];

    pub const fn new(read_access: bool, write_access: bool) -> Self {
        AccessRights { read_access, write_access }
    }

    #[inline]
    pub const fn can_read(self) -> bool {
        self.read_access
    }

    #[inline]
    pub const fn can_write(self) -> bool {
        self.write_access
    }

    /// Packs these rights into the native access-rights word.
    pub const fn raw(self) -> RawAccessRights {
        let mut raw = 0;
        if self.read_access {
            raw |= CA_READ_ACCESS;
        }
        if self.write_access {
            raw |= CA_WRITE_ACCESS;
        }
        raw
    }

    /// Unpacks a native word, discarding any bits outside the read/write mask.
    ///
    /// Stray bits are logged at `warn` since they usually mean the word was
    /// produced by a library with a different bitfield layout.
    pub fn from_raw_lossy(raw: RawAccessRights) -> Self {
        let unknown = raw & !CA_ACCESS_MASK;
        if unknown != 0 {
            tracing::warn!(raw, unknown, "Ignoring unknown bits in raw access rights");
        }
        AccessRights::new(raw & CA_READ_ACCESS != 0, raw & CA_WRITE_ACCESS != 0)
    }

    /// Classifies these rights.
    pub const fn level(self) -> AccessLevel {
        match (self.read_access, self.write_access) {
            (false, false) => AccessLevel::NoAccess,
            (true, false) => AccessLevel::ReadOnly,
            (false, true) => AccessLevel::WriteOnly,
            (true, true) => AccessLevel::ReadWrite,
        }
    }

    /// Checks if these rights (`self`) satisfy the required rights (`need`).
    ///
    /// Every permission set in `need` must also be set in `self`. No implication
    /// rules apply, so write-only rights are not sufficient for a read.
    ///
    /// # Arguments
    /// * `need` - The rights an operation requires.
    ///
    /// # Returns
    /// `true` if nothing in `need` is missing from `self`.
    #[inline]
    pub const fn sufficient(self, need: AccessRights) -> bool {
        (self.read_access || !need.read_access) && (self.write_access || !need.write_access)
    }

    /// Returns the permissions present in `need` but absent from `self`.
    pub const fn missing(self, need: AccessRights) -> AccessRights {
        AccessRights::new(need.read_access && !self.read_access, need.write_access && !self.write_access)
    }
}

/// Produces the four canonical access-rights values: none, read-only, write-only, full.
///
/// Intended as fixture input for code that interprets channel permissions.
pub fn canonical_access_rights() -> (AccessRights, AccessRights, AccessRights, AccessRights) {
    (AccessRights::NONE, AccessRights::READ, AccessRights::WRITE, AccessRights::ALL)
}

impl TryFrom<RawAccessRights> for AccessRights {
    type Error = AccessError;

    fn try_from(raw: RawAccessRights) -> Result<Self, Self::Error> {
        if raw & !CA_ACCESS_MASK != 0 {
            return Err(AccessError::UnknownBits(raw));
        }
        Ok(AccessRights::from_raw_lossy(raw))
    }
}

impl From<AccessRights> for RawAccessRights {
    fn from(rights: AccessRights) -> Self {
        rights.raw()
    }
}

impl From<AccessLevel> for AccessRights {
    fn from(level: AccessLevel) -> Self {
        let tag = level as u8;
        AccessRights::new(tag & 0b01 != 0, tag & 0b10 != 0)
    }
}

impl From<AccessRights> for AccessLevel {
    fn from(rights: AccessRights) -> Self {
        rights.level()
    }
}

impl BitOr for AccessRights {
    type Output = AccessRights;

    fn bitor(self, rhs: AccessRights) -> AccessRights {
        AccessRights::new(self.read_access || rhs.read_access, self.write_access || rhs.write_access)
    }
}

impl BitAnd for AccessRights {
    type Output = AccessRights;

    fn bitand(self, rhs: AccessRights) -> AccessRights {
        AccessRights::new(self.read_access && rhs.read_access, self.write_access && rhs.write_access)
    }
}

impl std::fmt::Display for AccessRights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.level(), f)
    }
}
