//! Validator configuration.
//!
//! Both switches default to off, which reproduces the permissive contract of
//! Bruno's own exporter. Override via environment variables or explicit
//! construction.

/// Optional strictness on top of the base rule set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Flag Auth/Body variant payloads that do not match the selected `mode`.
    pub strict_variants: bool,
    /// Check every entity `uid` for the 21-character alphanumeric format, not
    /// only `activeEnvironmentUid`.
    pub check_uids: bool,
}

/// Environment variable enabling [`ValidatorConfig::strict_variants`].
pub const STRICT_VARIANTS_ENV: &str = "BRUNOC_STRICT_VARIANTS";
/// Environment variable enabling [`ValidatorConfig::check_uids`].
pub const CHECK_UIDS_ENV: &str = "BRUNOC_CHECK_UIDS";

impl ValidatorConfig {
    /// Every optional check enabled.
    pub fn strict() -> Self {
        Self {
            strict_variants: true,
            check_uids: true,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Variables (unset means `false`):
    /// - `BRUNOC_STRICT_VARIANTS`
    /// - `BRUNOC_CHECK_UIDS`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidFlag` if a variable is set to something
    /// other than a recognised boolean spelling.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let flag = |name: &'static str| -> Result<bool, ConfigError> {
            match lookup(name) {
                Some(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidFlag(name, raw)),
                None => Ok(false),
            }
        };
        Ok(Self {
            strict_variants: flag(STRICT_VARIANTS_ENV)?,
            check_uids: flag(CHECK_UIDS_ENV)?,
        })
    }
}

/// Parse a boolean flag: `1/true/yes/on` or `0/false/no/off`, any case.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1:?} (expected true/false)")]
    InvalidFlag(&'static str, String),
}
