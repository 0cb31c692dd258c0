use serde::{Deserialize, Serialize};

/// pwclockctl application settings tree
///
/// These settings describe how the daemon is reached.  The values a
/// user may select are compiled in and not part of this file.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Keep track of the version of this file
    version: u8,
    /// Program used to query and force clock settings
    pub metadata_tool: String,
    /// Name of the metadata object holding the clock settings
    pub metadata_name: String,
    /// Metadata subject the clock properties are attached to
    pub subject: u32,
    /// Upper bound for a single daemon command, in milliseconds
    pub command_timeout_ms: u64,
    /// Re-read the daemon state this often, 0 disables polling
    pub poll_interval_ms: u64,
    /// Process name looked for at startup
    pub daemon_process: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            version: 1,
            metadata_tool: "pw-metadata".into(),
            metadata_name: "settings".into(),
            subject: 0,
            command_timeout_ms: 2000,
            poll_interval_ms: 0,
            daemon_process: "pipewire".into(),
        }
    }
}
