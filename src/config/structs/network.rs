//! Network and HTTP configuration structures.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WizardError};

/// Network configuration.
///
/// Both timeouts are optional. When unset the HTTP client keeps its own
/// defaults, which means a request blocks until the server answers or the
/// connection drops.
///
/// # Fields
/// - `request_timeout`: whole-request timeout in seconds
/// - `connect_timeout`: connect timeout in seconds
///
/// # Example
/// ```toml
/// [network]
/// request_timeout = 120
/// connect_timeout = 10
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NetworkConfig {
    /// HTTP request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,

    /// HTTP connect timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout: Option<u64>,
}

impl NetworkConfig {
    /// Validates network configuration.
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout == Some(0) {
            return Err(WizardError::Config(
                "network.request_timeout cannot be 0".into(),
            ));
        }
        if self.connect_timeout == Some(0) {
            return Err(WizardError::Config(
                "network.connect_timeout cannot be 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_timeouts() {
        let config = NetworkConfig::default();
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.connect_timeout, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_timeouts_rejected() {
        let config = NetworkConfig {
            request_timeout: Some(0),
            connect_timeout: None,
        };
        assert!(config.validate().is_err());

        let config = NetworkConfig {
            request_timeout: None,
            connect_timeout: Some(0),
        };
        assert!(config.validate().is_err());
    }
}
