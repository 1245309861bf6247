//! Run configuration parsed from the command line.

use crate::error::{Result, TrackioError};

/// Connection settings for one forwarding run.
#[derive(Debug, Clone)]
pub struct Config {
    /// API credential, sent as the `X-Api-Key` header.
    pub api_key: String,
    /// Destination URL for the heartbeat POST.
    pub api_url: String,
    /// Plugin identifier, sent as `User-Agent` when non-empty.
    pub plugin: String,
}

impl Config {
    /// Validate raw flag values into a usable configuration.
    ///
    /// The key is checked before the URL so a run missing both still exits
    /// with the invalid-key code the host extension watches for. An empty
    /// flag value counts as missing. Validation happens before any I/O.
    pub fn from_flags(
        key: Option<String>,
        api_url: Option<String>,
        plugin: Option<String>,
    ) -> Result<Self> {
        let api_key = key
            .filter(|k| !k.is_empty())
            .ok_or(TrackioError::MissingCredential)?;
        let api_url = api_url
            .filter(|u| !u.is_empty())
            .ok_or(TrackioError::MissingEndpoint)?;

        Ok(Self {
            api_key,
            api_url,
            plugin: plugin.unwrap_or_default(),
        })
    }
}
