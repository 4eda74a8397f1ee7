//!
//! Defines error types for access-rights handling.

use crate::types::RawAccessRights;

/// Client status codes carry a message number in bits 3..=15 and a severity in bits 0..=2.
const STATUS_MSG_NO_SHIFT: u32 = 3;
const STATUS_MSG_NO_MASK: u32 = 0xFFF8;
const STATUS_SEVERITY_MASK: u32 = 0x0007;

/// Severity tag for warnings, which is what access denials are reported as.
const SEVERITY_WARNING: u32 = 0;

const fn encode_status(msg_no: u32, severity: u32) -> u32 {
    ((msg_no << STATUS_MSG_NO_SHIFT) & STATUS_MSG_NO_MASK) | (severity & STATUS_SEVERITY_MASK)
}

/// Status code reported when a read is refused (message number 46).
pub const ECA_NORDACCESS: u32 = encode_status(46, SEVERITY_WARNING);
/// Status code reported when a write is refused (message number 47).
pub const ECA_NOWTACCESS: u32 = encode_status(47, SEVERITY_WARNING);

/// Errors raised while interpreting or enforcing channel access rights.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// The channel does not grant read access.
    #[error("Read access denied for channel {channel}")]
    NoReadAccess { channel: String },
    /// The channel does not grant write access.
    #[error("Write access denied for channel {channel}")]
    NoWriteAccess { channel: String },
    /// A raw access-rights word had bits set outside the read/write mask.
    #[error("Unknown bits in raw access rights: {0:#010x}")]
    UnknownBits(RawAccessRights),
    /// An access level tag outside `0..=3`.
    #[error("Invalid access level tag: {0}")]
    InvalidLevel(u8),
    /// The access table could not be read or parsed.
    #[error("Access table error: {0}")]
    Config(String),
}

impl AccessError {
    /// The client status code matching this error, if the client library defines one.
    pub fn status_code(&self) -> Option<u32> {
        match self {
            AccessError::NoReadAccess { .. } => Some(ECA_NORDACCESS),
            AccessError::NoWriteAccess { .. } => Some(ECA_NOWTACCESS),
            _ => None,
        }
    }

    /// True for the two permission-denied variants.
    pub fn is_denial(&self) -> bool {
        matches!(self, AccessError::NoReadAccess { .. } | AccessError::NoWriteAccess { .. })
    }
}

impl From<serde_json::Error> for AccessError {
    fn from(err: serde_json::Error) -> Self {
        AccessError::Config(err.to_string())
    }
}

impl From<std::io::Error> for AccessError {
    fn from(err: std::io::Error) -> Self {
        AccessError::Config(err.to_string())
    }
}
