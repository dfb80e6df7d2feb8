use serde::{Deserialize, Serialize};

use crate::groups::GroupId;
use crate::Result;

/// How a freshly sampled private exponent is screened.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExponentPolicy {
    /// Accept whatever the random source produced, including zero.
    #[default]
    Unrestricted,
    /// Resample until the exponent lies in `[1, p - 2]`.
    Strict,
}

/// Key exchange configuration.
///
/// Replaces an optional group argument with an explicit value. The default
/// selects group 14 (2048-bit modulus) and unrestricted exponent sampling.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeConfig {
    /// MODP group for newly generated key pairs.
    pub group: GroupId,
    /// Screening applied to sampled private exponents.
    pub exponent_policy: ExponentPolicy,
}

impl ExchangeConfig {
    /// Creates a configuration for the given group.
    pub fn new(group: GroupId) -> Self {
        Self {
            group,
            ..Self::default()
        }
    }

    /// Creates a configuration from a raw RFC 3526 group number.
    ///
    /// # Errors
    /// Returns [`crate::Error::UnsupportedGroup`] for any number outside
    /// {5, 14, 15, 16, 17, 18}. The default group is never substituted.
    pub fn with_group_id(id: u32) -> Result<Self> {
        GroupId::try_from(id).map(Self::new)
    }

    /// Returns a copy with the given exponent policy.
    pub fn with_exponent_policy(self, exponent_policy: ExponentPolicy) -> Self {
        Self {
            exponent_policy,
            ..self
        }
    }

    /// Loads configuration from `.env` file, TOML file, and environment variables.
    ///
    /// Configuration priority (highest to lowest):
    /// 1. Environment variables with `DH_` prefix (e.g., `DH_GROUP=15`)
    /// 2. TOML configuration file (if exists)
    /// 3. Built-in defaults
    ///
    /// A `.env` file in the current directory or any parent is loaded into the
    /// process environment first; a missing file is not an error.
    ///
    /// The TOML file path can be set via `DH_CONFIG_PATH`. If not set, defaults
    /// to `./config/dh.toml`. A missing file is silently skipped.
    ///
    /// # Environment Variable Examples
    /// ```bash
    /// DH_GROUP=16
    /// DH_EXPONENT_POLICY=strict
    /// ```
    ///
    /// # Errors
    /// Returns an error if a source is malformed or names an unsupported group.
    #[allow(clippy::result_large_err)]
    pub fn from_env() -> figment::error::Result<Self> {
        use figment::providers::{Env, Format, Serialized, Toml};
        use figment::Figment;

        let _ = dotenvy::dotenv();

        let config_path =
            std::env::var("DH_CONFIG_PATH").unwrap_or_else(|_| "config/dh.toml".to_string());

        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(&config_path))
            .merge(Env::prefixed("DH_").ignore(&["CONFIG_PATH"]))
            .extract()
    }
}
