//! Shared types for the access-rights model.
//!
//! The client library hands access rights to callers as a packed word: a C
//! bitfield of `{ read_access: 1, write_access: 1 }`. Where the compiler packs
//! those bits depends on the target's byte order, so the constants below are
//! selected per endianness.

/// The native access-rights word delivered by the client library.
pub type RawAccessRights = u32;

/// Bit carrying read permission in a [`RawAccessRights`] word.
#[cfg(target_endian = "little")]
pub const CA_READ_ACCESS: RawAccessRights = 1 << 0;
/// Bit carrying write permission in a [`RawAccessRights`] word.
#[cfg(target_endian = "little")]
pub const CA_WRITE_ACCESS: RawAccessRights = 1 << 1;

/// Bit carrying read permission in a [`RawAccessRights`] word.
#[cfg(target_endian = "big")]
pub const CA_READ_ACCESS: RawAccessRights = 1 << 31;
/// Bit carrying write permission in a [`RawAccessRights`] word.
#[cfg(target_endian = "big")]
pub const CA_WRITE_ACCESS: RawAccessRights = 1 << 30;

/// Every bit that has a meaning in a [`RawAccessRights`] word.
pub const CA_ACCESS_MASK: RawAccessRights = CA_READ_ACCESS | CA_WRITE_ACCESS;

/// Classification of a channel's permissions.
///
/// The discriminant packs read into bit 0 and write into bit 1, so the four
/// variants cover the whole two-bit permission space.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessLevel {
    /// Neither reads nor writes are permitted.
    NoAccess = 0,
    /// Reads (get, subscribe) only.
    ReadOnly = 1,
    /// Writes (put) only.
    WriteOnly = 2,
    /// Full access.
    ReadWrite = 3,
}

impl AccessLevel {
    /// All levels, ordered by discriminant.
    pub const ALL: [AccessLevel; 4] = [
        AccessLevel::NoAccess,
        AccessLevel::ReadOnly,
        AccessLevel::WriteOnly,
        AccessLevel::ReadWrite,
    ];

    /// The stable name used in `Display` and in serialized access tables.
    pub const fn as_str(self) -> &'static str {
        match self {
            AccessLevel::NoAccess => "no-access",
            AccessLevel::ReadOnly => "read-only",
            AccessLevel::WriteOnly => "write-only",
            AccessLevel::ReadWrite => "read-write",
        }
    }
}

impl TryFrom<u8> for AccessLevel {
    type Error = crate::error::AccessError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AccessLevel::NoAccess),
            1 => Ok(AccessLevel::ReadOnly),
            2 => Ok(AccessLevel::WriteOnly),
            3 => Ok(AccessLevel::ReadWrite),
            _ => Err(crate::error::AccessError::InvalidLevel(value)),
        }
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AccessError;

    #[test]
    fn read_and_write_bits_are_distinct() {
        assert_ne!(CA_READ_ACCESS, CA_WRITE_ACCESS);
        assert_eq!(CA_READ_ACCESS & CA_WRITE_ACCESS, 0);
        assert_eq!(CA_ACCESS_MASK.count_ones(), 2);
    }

    #[test]
    #[cfg(target_endian = "little")]
    fn little_endian_bit_positions() {
        assert_eq!(CA_READ_ACCESS, 1);
        assert_eq!(CA_WRITE_ACCESS, 2);
    }

    #[test]
    fn level_tags_round_trip() {
        for level in AccessLevel::ALL {
            assert_eq!(AccessLevel::try_from(level as u8), Ok(level));
        }
        assert_eq!(AccessLevel::try_from(4), Err(AccessError::InvalidLevel(4)));
        assert_eq!(AccessLevel::try_from(u8::MAX), Err(AccessError::InvalidLevel(u8::MAX)));
    }

    #[test]
    fn level_serializes_as_kebab_case() {
        let json = serde_json::to_string(&AccessLevel::WriteOnly).unwrap();
        assert_eq!(json, "\"write-only\"");
        let level: AccessLevel = serde_json::from_str("\"read-write\"").unwrap();
        assert_eq!(level, AccessLevel::ReadWrite);
        assert_eq!(AccessLevel::NoAccess.to_string(), "no-access");
    }
}
