//! Permission state of a single channel and the checks a client runs before
//! issuing a request against it.

use crate::error::AccessError;
use crate::rights::AccessRights;

/// Requests a client can issue against a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// One-shot read of the current value.
    Get,
    /// Write without completion notification.
    Put,
    /// Write with completion notification.
    PutCallback,
    /// Monitor subscription.
    Subscribe,
}

impl Operation {
    /// Returns the rights needed to perform this operation.
    pub const fn required_rights(self) -> AccessRights {
        match self {
            Operation::Get | Operation::Subscribe => AccessRights::READ,
            Operation::Put | Operation::PutCallback => AccessRights::WRITE,
        }
    }
}

/// A channel name together with the access rights the server currently grants on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelAccess {
    name: String,
    rights: AccessRights,
}

impl ChannelAccess {
    pub fn new(name: impl Into<String>, rights: AccessRights) -> Self {
        ChannelAccess { name: name.into(), rights }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rights(&self) -> AccessRights {
        self.rights
    }

    /// Stores rights pushed by the server.
    ///
    /// Returns the previous rights when they differ from `rights`, `None` when
    /// the update was a no-op.
    pub fn replace_rights(&mut self, rights: AccessRights) -> Option<AccessRights> {
        if self.rights == rights {
            return None;
        }
        let previous = std::mem::replace(&mut self.rights, rights);
        tracing::debug!(channel = %self.name, from = %previous, to = %rights, "Access rights changed");
        Some(previous)
    }

    /// Fails unless the channel grants everything `op` requires.
    ///
    /// Read denial is reported before write denial; an operation never needs both.
    pub fn check(&self, op: Operation) -> Result<(), AccessError> {
        let missing = self.rights.missing(op.required_rights());
        if missing.read_access {
            tracing::debug!(channel = %self.name, ?op, "Read access denied");
            return Err(AccessError::NoReadAccess { channel: self.name.clone() });
        }
        if missing.write_access {
            tracing::debug!(channel = %self.name, ?op, "Write access denied");
            return Err(AccessError::NoWriteAccess { channel: self.name.clone() });
        }
        Ok(())
    }

    pub fn check_read(&self) -> Result<(), AccessError> {
        self.check(Operation::Get)
    }

    pub fn check_write(&self) -> Result<(), AccessError> {
        self.check(Operation::Put)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rights::canonical_access_rights;

    #[test]
    fn required_rights_per_operation() {
        assert_eq!(Operation::Get.required_rights(), AccessRights::READ);
        assert_eq!(Operation::Subscribe.required_rights(), AccessRights::READ);
        assert_eq!(Operation::Put.required_rights(), AccessRights::WRITE);
        assert_eq!(Operation::PutCallback.required_rights(), AccessRights::WRITE);
    }

    #[test]
    fn checks_follow_canonical_rights() {
        let (none, read, write, all) = canonical_access_rights();

        let chan = ChannelAccess::new("PV:NONE", none);
        assert_eq!(chan.check_read(), Err(AccessError::NoReadAccess { channel: "PV:NONE".into() }));
        assert_eq!(chan.check_write(), Err(AccessError::NoWriteAccess { channel: "PV:NONE".into() }));

        let chan = ChannelAccess::new("PV:READ", read);
        assert!(chan.check_read().is_ok());
        assert!(chan.check(Operation::Subscribe).is_ok());
        assert!(chan.check(Operation::PutCallback).is_err());

        let chan = ChannelAccess::new("PV:WRITE", write);
        assert!(chan.check_read().is_err());
        assert!(chan.check_write().is_ok());

        let chan = ChannelAccess::new("PV:ALL", all);
        assert!(chan.check_read().is_ok() && chan.check_write().is_ok());
    }

    #[test]
    fn replace_rights_reports_only_changes() {
        let mut chan = ChannelAccess::new("PV:A", AccessRights::READ);
        assert_eq!(chan.replace_rights(AccessRights::READ), None);
        assert_eq!(chan.replace_rights(AccessRights::ALL), Some(AccessRights::READ));
        assert_eq!(chan.rights(), AccessRights::ALL);
        assert_eq!(chan.name(), "PV:A");
        assert!(chan.check_write().is_ok());
    }
}
