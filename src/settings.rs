use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::utils::logging::LoggingHelper;
use crate::webauthn::{WebAuthnError, WebAuthnSettings};

/// Environment variable naming a directory whose `Settings.toml` overrides `./Settings.toml`
pub const CONFIG_DIR_ENV: &str = "FIDO2_OPTIONS_CONFIG_DIR";

const SETTINGS_FILE: &str = "Settings.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub webauthn: WebAuthnSettings,
}

impl Settings {
    /// Load settings from configuration files and environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A settings file cannot be read or parsed
    /// - The resulting relying party settings are unusable
    pub fn load() -> Result<Self, WebAuthnError> {
        Self::initialize_logging();

        let mut settings = Self::load_base_settings()?;
        Self::apply_env_overrides(&mut settings);
        settings.webauthn.validate()?;

        LoggingHelper::log_relying_party(
            &settings.webauthn.rp_id,
            &settings.webauthn.rp_name,
            settings.webauthn.timeout_millis,
        );
        Ok(settings)
    }

    /// Initialize the logger; `RUST_LOG` controls the filter, `info` by default
    fn initialize_logging() {
        // A second initialization (e.g. in tests) keeps the existing logger
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .try_init();
    }

    /// Load base settings from TOML file(s) or use defaults
    /// Settings are loaded with the following priority (highest to lowest):
    /// 1. Environment variables (applied separately after loading base settings)
    /// 2. Settings.toml in `FIDO2_OPTIONS_CONFIG_DIR` (if specified and exists)
    /// 3. Settings.toml in current directory (if exists)
    /// 4. Default settings
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file exists but cannot be read or parsed
    fn load_base_settings() -> Result<Self, WebAuthnError> {
        let mut settings = Self::default();

        let default_config_path = PathBuf::from(SETTINGS_FILE);
        if default_config_path.exists() {
            settings = Self::from_toml_file(&default_config_path)?;
        }

        if let Ok(config_dir) = std::env::var(CONFIG_DIR_ENV) {
            let config_path = Path::new(&config_dir).join(SETTINGS_FILE);
            if config_path.exists() {
                settings = Self::from_toml_file(&config_path)?;
            } else {
                LoggingHelper::log_settings_missing(&config_path);
            }
        }

        Ok(settings)
    }

    /// Parse settings from a TOML file; missing keys take their defaults
    ///
    /// # Errors
    ///
    /// Returns `WebAuthnError::ConfigurationError` if the file cannot be read or parsed
    pub fn from_toml_file(path: &Path) -> Result<Self, WebAuthnError> {
        let content = fs::read_to_string(path).map_err(|e| {
            WebAuthnError::ConfigurationError(format!("cannot read {}: {e}", path.display()))
        })?;
        let settings = basic_toml::from_str(&content).map_err(|e| {
            WebAuthnError::ConfigurationError(format!("cannot parse {}: {e}", path.display()))
        })?;
        LoggingHelper::log_settings_loaded(path);
        Ok(settings)
    }

    /// Apply environment variable overrides to settings
    pub fn apply_env_overrides(settings: &mut Self) {
        Self::apply_webauthn_env_overrides(&mut settings.webauthn);
    }

    /// Apply environment overrides for relying party settings
    pub fn apply_webauthn_env_overrides(webauthn: &mut WebAuthnSettings) {
        if let Ok(rp_id) = std::env::var("RP_ID") {
            webauthn.rp_id = rp_id;
        }
        if let Ok(rp_name) = std::env::var("RP_NAME") {
            webauthn.rp_name = rp_name;
        }
        Self::apply_parsed_env_override("WEBAUTHN_TIMEOUT_MS", &mut webauthn.timeout_millis);
        Self::apply_parsed_env_override("WEBAUTHN_ATTESTATION", &mut webauthn.attestation);
        Self::apply_parsed_env_override(
            "WEBAUTHN_REQUIRE_RESIDENT_KEY",
            &mut webauthn.require_resident_key,
        );
        Self::apply_optional_env_override(
            "WEBAUTHN_USER_VERIFICATION",
            &mut webauthn.user_verification,
        );
        Self::apply_optional_env_override(
            "WEBAUTHN_AUTHENTICATOR_ATTACHMENT",
            &mut webauthn.authenticator_attachment,
        );
    }

    /// Helper function to apply a parsed environment variable override
    fn apply_parsed_env_override<T>(env_var: &str, target: &mut T)
    where
        T: FromStr,
        T::Err: Display,
    {
        if let Ok(value_str) = std::env::var(env_var) {
            match value_str.parse::<T>() {
                Ok(value) => *target = value,
                Err(e) => {
                    LoggingHelper::log_env_override_ignored(env_var, &value_str, &e.to_string());
                }
            }
        }
    }

    /// Like `apply_parsed_env_override`, but an empty value clears the setting
    fn apply_optional_env_override<T>(env_var: &str, target: &mut Option<T>)
    where
        T: FromStr,
        T::Err: Display,
    {
        if let Ok(value_str) = std::env::var(env_var) {
            if value_str.is_empty() {
                *target = None;
                return;
            }
            match value_str.parse::<T>() {
                Ok(value) => *target = Some(value),
                Err(e) => {
                    LoggingHelper::log_env_override_ignored(env_var, &value_str, &e.to_string());
                }
            }
        }
    }
}
