//! Chaincode configuration from environment variables.

use crate::domain::entities::RecordKind;
use std::borrow::Cow;
use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable selecting the [`KeyLayout`].
pub const KEY_LAYOUT_ENV: &str = "IDM_KEY_LAYOUT";

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `IDM_KEY_LAYOUT` held an unrecognized value.
    #[error("invalid key layout {0:?}: expected \"flat\" or \"kind-prefixed\"")]
    InvalidKeyLayout(String),
}

/// How record keys map onto ledger keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeyLayout {
    /// Ledger key is the record key. Both kinds share one namespace.
    #[default]
    Flat,
    /// Ledger key is `<kind>:<key>`, so the kinds cannot collide.
    KindPrefixed,
}

impl KeyLayout {
    /// Ledger key under which a record of `kind` with `key` is stored.
    #[must_use]
    pub fn ledger_key(self, kind: RecordKind, key: &str) -> Cow<'_, str> {
        match self {
            Self::Flat => Cow::Borrowed(key),
            Self::KindPrefixed => Cow::Owned(format!("{kind}:{key}")),
        }
    }
}

impl fmt::Display for KeyLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Flat => "flat",
            Self::KindPrefixed => "kind-prefixed",
        })
    }
}

impl FromStr for KeyLayout {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "kind-prefixed" => Ok(Self::KindPrefixed),
            _ => Err(ConfigError::InvalidKeyLayout(s.to_string())),
        }
    }
}

/// Chaincode configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChaincodeConfig {
    /// Ledger key layout (default: flat).
    pub key_layout: KeyLayout,
}

impl ChaincodeConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `IDM_KEY_LAYOUT`: `flat` or `kind-prefixed`, case-insensitive
    ///   (default: flat)
    ///
    /// An unrecognized value is logged and the default is kept.
    #[must_use]
    pub fn from_env() -> Self {
        let key_layout = match env::var(KEY_LAYOUT_ENV) {
            Ok(raw) => raw.parse().unwrap_or_else(|err: ConfigError| {
                tracing::warn!(error = %err, "falling back to flat key layout");
                KeyLayout::default()
            }),
            Err(_) => KeyLayout::default(),
        };

        Self { key_layout }
    }

    /// Replace the key layout.
    #[must_use]
    pub fn with_key_layout(mut self, key_layout: KeyLayout) -> Self {
        self.key_layout = key_layout;
        self
    }
}
