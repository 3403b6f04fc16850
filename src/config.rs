//! Chat view configuration.
//!
//! Browser builds read an optional JSON object from
//! `<meta name="chatroom-config" content="...">`; any missing field takes its
//! default. Native builds and pages without the tag use [`ChatConfig::default`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_COLLECTION: &str = "Message";
pub const DEFAULT_UNKNOWN_USER: &str = "Unknown User";
pub const CONFIG_META_NAME: &str = "chatroom-config";

/// Avatar background colors. The first entry is the room accent color.
pub const DEFAULT_PALETTE: [&str; 6] = ["#8e44ad", "#3498db", "#2ecc71", "#e67e22", "#e74c3c", "#16a085"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid chat config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("chat config `collection` must not be empty")]
    EmptyCollection,
    #[error("chat config `palette` must contain at least one color")]
    EmptyPalette,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatConfig {
    /// Record collection observed and written by the chat view.
    pub collection: String,
    /// Avatar colors indexed by the email hash.
    pub palette: Vec<String>,
    /// Display name sent when the session has no username.
    pub unknown_user_name: String,
    /// Show sent messages as pending until their create request resolves.
    pub optimistic_send: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            collection: DEFAULT_COLLECTION.to_owned(),
            palette: DEFAULT_PALETTE.iter().map(|c| (*c).to_owned()).collect(),
            unknown_user_name: DEFAULT_UNKNOWN_USER.to_owned(),
            optimistic_send: false,
        }
    }
}

impl ChatConfig {
    /// Parse and validate a JSON config object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and a validation
    /// variant for an empty collection or palette.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.collection.trim().is_empty() {
            return Err(ConfigError::EmptyCollection);
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }

    /// Load the config embedded in the host page, falling back to defaults.
    pub fn from_document() -> Self {
        #[cfg(feature = "csr")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.query_selector(&format!("meta[name=\"{CONFIG_META_NAME}\"]")).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            match raw.as_deref().map(Self::from_json) {
                Some(Ok(config)) => config,
                Some(Err(e)) => {
                    leptos::logging::warn!("ignoring page chat config: {e}");
                    Self::default()
                }
                None => Self::default(),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}
