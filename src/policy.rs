//! Per-channel access table.
//!
//! A table maps channel names to the rights a client should assume for them,
//! with a fallback for unlisted channels. Tables are plain serde documents, e.g.
//!
//! ```json
//! {
//!   "default": { "read_access": true, "write_access": false },
//!   "channels": {
//!     "MTR:SETPOINT": { "read_access": true, "write_access": true }
//!   }
//! }
//! ```

use crate::channel::ChannelAccess;
use crate::error::AccessError;
use crate::rights::AccessRights;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AccessTable {
    /// Rights for channels without an entry. Defaults to no access.
    #[serde(default)]
    pub default: AccessRights,
    #[serde(default)]
    pub channels: BTreeMap<String, AccessRights>,
}

impl AccessTable {
    pub fn new(default: AccessRights) -> Self {
        AccessTable { default, channels: BTreeMap::new() }
    }

    /// Sets the rights for `name`, returning the entry it replaced.
    pub fn insert(&mut self, name: impl Into<String>, rights: AccessRights) -> Option<AccessRights> {
        self.channels.insert(name.into(), rights)
    }

    pub fn rights_for(&self, name: &str) -> AccessRights {
        self.channels.get(name).copied().unwrap_or(self.default)
    }

    /// Builds the permission state for `name` from this table.
    pub fn channel(&self, name: &str) -> ChannelAccess {
        ChannelAccess::new(name, self.rights_for(name))
    }

    pub fn from_json_str(json: &str) -> Result<Self, AccessError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String, AccessError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads a JSON table from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AccessError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let table = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), channels = table.channels.len(), "Loaded access table");
        Ok(table)
    }
}
