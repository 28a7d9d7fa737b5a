//! Centralized logging utilities for registration and settings events

use log::{debug, info, warn};
use std::path::Path;

use crate::webauthn::{CredentialCreateOptions, WebAuthnError};

pub struct LoggingHelper;

impl LoggingHelper {
    /// Log a successfully built set of registration options
    ///
    /// Only lengths and counts are logged, never challenge or handle bytes.
    pub fn log_registration_options(options: &CredentialCreateOptions) {
        info!(
            "🔑 Registration options ready for rp {} ({} excluded credentials, attestation={})",
            options.rp().id(),
            options.exclude_credentials().len(),
            options.attestation()
        );
        debug!(
            "Registration options: challenge_len={}, user={}, timeout_ms={}, algorithms={:?}",
            options.challenge().len(),
            options.user().map_or("absent", |_| "present"),
            options.timeout(),
            options
                .pub_key_cred_params()
                .iter()
                .map(|p| p.alg.identifier())
                .collect::<Vec<_>>()
        );
    }

    /// Log a registration request that failed validation
    pub fn log_registration_rejected(rp_id: &str, error: &WebAuthnError) {
        warn!("❌ Registration options not built for rp {rp_id:?}: {error}");
    }

    /// Log that a settings file was applied
    pub fn log_settings_loaded(path: &Path) {
        info!("✓ Loaded settings from {}", path.display());
    }

    /// Log that a settings directory was configured without a settings file
    pub fn log_settings_missing(path: &Path) {
        info!(
            "ℹ Config directory set but no Settings.toml found at: {}",
            path.display()
        );
    }

    /// Log an environment override that could not be parsed
    pub fn log_env_override_ignored(var: &str, value: &str, reason: &str) {
        warn!("⏭️  Ignoring {var}={value:?}: {reason}");
    }

    /// Log the effective relying party configuration
    pub fn log_relying_party(rp_id: &str, rp_name: &str, timeout_millis: u64) {
        info!("🎯 Relying party {rp_name} ({rp_id}), timeout {timeout_millis} ms");
    }
}
