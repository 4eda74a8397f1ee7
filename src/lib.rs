#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(deprecated)]

//!
//! ca-access models the per-channel read/write permissions a Channel Access
//! client receives from a server.
//!
//! It covers the representation and checking of access rights only: the
//! `AccessRights` value type, its native packed form, the permission checks run
//! before get/put/subscribe requests, and a JSON access table for assumed rights.

// Raw access-rights word, bit constants and `AccessLevel`.
pub mod types;

// `AccessRights` and the canonical factory.
pub mod rights;

pub mod error;

// Channel permission state and request checks.
pub mod channel;

// Per-channel access table (configuration).
pub mod policy;

#[cfg(feature = "test-utils")]
pub mod fixtures;

#[cfg(feature = "tracing-subscriber")]
pub mod logging;

pub use channel::{ChannelAccess, Operation};
pub use error::AccessError;
pub use policy::AccessTable;
pub use rights::{canonical_access_rights, AccessRights};
pub use types::{AccessLevel, RawAccessRights};
