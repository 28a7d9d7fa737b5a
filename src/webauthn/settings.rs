//! `WebAuthn` settings implementation
//!
//! This module defines the relying party configuration snapshot the options
//! assembler reads from. It is loaded by [`crate::settings::Settings`] and
//! treated as read-only once handed to the assembler.

use serde::{Deserialize, Serialize};

use super::errors::WebAuthnError;
use super::types::{
    AttestationConveyancePreference, AuthenticatorAttachment, AuthenticatorSelectionCriteria,
    UserVerificationRequirement,
};

/// `WebAuthn` settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebAuthnSettings {
    /// Relying Party ID (the effective registrable domain)
    pub rp_id: String,
    /// Relying Party name (displayed to user)
    pub rp_name: String,
    /// Ceremony timeout hint passed through to the client, in milliseconds
    pub timeout_millis: u64,
    /// Default attestation conveyance preference
    pub attestation: AttestationConveyancePreference,
    /// Default user verification requirement
    pub user_verification: Option<UserVerificationRequirement>,
    /// Optional authenticator attachment
    pub authenticator_attachment: Option<AuthenticatorAttachment>,
    pub require_resident_key: bool,
}

impl Default for WebAuthnSettings {
    fn default() -> Self {
        Self {
            rp_id: "localhost".to_string(),
            rp_name: "fido2-options".to_string(),
            timeout_millis: 60_000,
            attestation: AttestationConveyancePreference::None,
            user_verification: Some(UserVerificationRequirement::Preferred),
            authenticator_attachment: None,
            require_resident_key: false,
        }
    }
}

impl WebAuthnSettings {
    /// Settings for a relying party with every other value defaulted
    #[must_use]
    pub fn for_relying_party(
        rp_id: impl Into<String>,
        rp_name: impl Into<String>,
        timeout_millis: u64,
    ) -> Self {
        Self {
            rp_id: rp_id.into(),
            rp_name: rp_name.into(),
            timeout_millis,
            ..Self::default()
        }
    }

    /// Default authenticator selection derived from these settings
    #[must_use]
    pub fn authenticator_selection(&self) -> AuthenticatorSelectionCriteria {
        AuthenticatorSelectionCriteria {
            authenticator_attachment: self.authenticator_attachment,
            require_resident_key: self.require_resident_key,
            user_verification: self.user_verification,
        }
    }

    /// Check that the settings can produce registration options
    ///
    /// # Errors
    ///
    /// Returns `WebAuthnError::ConfigurationError` if the relying party id or
    /// name is empty, or the timeout is zero.
    pub fn validate(&self) -> Result<(), WebAuthnError> {
        if self.rp_id.is_empty() {
            return Err(WebAuthnError::ConfigurationError(
                "rp_id must not be empty".to_string(),
            ));
        }
        if self.rp_name.is_empty() {
            return Err(WebAuthnError::ConfigurationError(
                "rp_name must not be empty".to_string(),
            ));
        }
        if self.timeout_millis == 0 {
            return Err(WebAuthnError::ConfigurationError(
                "timeout_millis must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
