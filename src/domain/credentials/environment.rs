//! Provider credential namespaces.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mercado Pago credential namespace.
///
/// Test and live credentials are told apart only by their prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderEnvironment {
    Sandbox,
    Production,
}

impl ProviderEnvironment {
    /// Prefix every token and public key of this namespace starts with.
    pub fn credential_prefix(&self) -> &'static str {
        match self {
            ProviderEnvironment::Sandbox => "TEST-",
            ProviderEnvironment::Production => "APP_USR-",
        }
    }

    /// Namespace a token belongs to, judged by its prefix.
    pub fn for_token(token: &str) -> Self {
        if token.starts_with(ProviderEnvironment::Production.credential_prefix()) {
            ProviderEnvironment::Production
        } else {
            ProviderEnvironment::Sandbox
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderEnvironment::Sandbox => "sandbox",
            ProviderEnvironment::Production => "production",
        }
    }
}

impl fmt::Display for ProviderEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderEnvironment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sandbox" => Ok(ProviderEnvironment::Sandbox),
            "production" => Ok(ProviderEnvironment::Production),
            other => Err(other.to_string()),
        }
    }
}
