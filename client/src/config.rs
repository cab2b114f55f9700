//! Client configuration provided through Leptos context.
//!
//! DESIGN
//! ======
//! Values are baked in at compile time from `LAPTRACK_CREDENTIAL_POLICY` and
//! `LAPTRACK_API_BASE`, so the server-rendered shell and the hydrated WASM
//! bundle agree as long as both are built from the same environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::util::validation::CredentialPolicy;

/// Settings that shape request construction and form checks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub credential_policy: CredentialPolicy,
    /// Prefix for every API path; empty means same origin.
    pub api_base: String,
}

impl ClientConfig {
    /// Config captured from the build environment.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("LAPTRACK_CREDENTIAL_POLICY"), option_env!("LAPTRACK_API_BASE"))
    }

    /// Unset or unrecognised values fall back to the defaults.
    pub fn from_values(policy: Option<&str>, api_base: Option<&str>) -> Self {
        Self {
            credential_policy: CredentialPolicy::from_name(policy),
            api_base: api_base.unwrap_or_default().trim().trim_end_matches('/').to_owned(),
        }
    }
}
