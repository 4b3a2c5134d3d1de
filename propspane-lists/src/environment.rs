//! Execution mode of the hosting page.

use crate::error::ListsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the web part is running. Decided once by the host, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentType {
    /// Offline workbench: no site, no network; lists are mocked.
    Local,
    /// Hosted on a real site with an authenticated HTTP client.
    Connected,
}

impl EnvironmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvironmentType::Local => "local",
            EnvironmentType::Connected => "connected",
        }
    }
}

impl fmt::Display for EnvironmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnvironmentType {
    type Err = ListsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(EnvironmentType::Local),
            "connected" => Ok(EnvironmentType::Connected),
            other => Err(ListsError::Config(format!(
                "unknown environment type '{other}' (expected 'local' or 'connected')"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Local".parse::<EnvironmentType>().unwrap(), EnvironmentType::Local);
        assert_eq!(
            " CONNECTED ".parse::<EnvironmentType>().unwrap(),
            EnvironmentType::Connected
        );
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "sandbox".parse::<EnvironmentType>().unwrap_err();
        assert!(matches!(err, ListsError::Config(_)));
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&EnvironmentType::Connected).unwrap();
        assert_eq!(json, "\"connected\"");
        let back: EnvironmentType = serde_json::from_str("\"local\"").unwrap();
        assert_eq!(back, EnvironmentType::Local);
    }
}
