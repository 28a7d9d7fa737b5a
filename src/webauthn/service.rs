//! `WebAuthn` service implementation
//!
//! This module provides the registration entry points. Both are pure: they
//! perform no I/O and generate no randomness, so any number of ceremonies can
//! be assembled concurrently from a shared settings snapshot.

use super::errors::WebAuthnError;
use super::options::CredentialCreateOptions;
use super::settings::WebAuthnSettings;
use super::types::{AuthenticatorSelectionCriteria, PublicKeyCredentialDescriptor, UserEntity};
use crate::utils::logging::LoggingHelper;

/// Create registration options for a new credential
///
/// # Arguments
/// * `challenge` - Fresh random bytes from the caller's secure source
/// * `settings` - Relying party id, name and timeout
/// * `authenticator_selection` - Caller policy, copied verbatim
/// * `exclude_credentials` - Existing credentials to exclude; `None` means none
///
/// # Errors
/// Returns `WebAuthnError::Validation` if the challenge, domain or name is empty
pub fn create_options(
    challenge: Vec<u8>,
    settings: &WebAuthnSettings,
    authenticator_selection: AuthenticatorSelectionCriteria,
    exclude_credentials: Option<Vec<PublicKeyCredentialDescriptor>>,
) -> Result<CredentialCreateOptions, WebAuthnError> {
    CredentialCreateOptions::builder(challenge, settings)
        .authenticator_selection(authenticator_selection)
        .exclude_credentials(exclude_credentials)
        .build()
}

/// Core `WebAuthn` registration service
#[derive(Debug, Clone)]
pub struct WebAuthnService {
    settings: WebAuthnSettings,
}

impl WebAuthnService {
    /// Create a new `WebAuthnService` with the given settings
    #[must_use]
    pub fn new(settings: WebAuthnSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &WebAuthnSettings {
        &self.settings
    }

    /// Create registration options using the configured selection and attestation defaults
    ///
    /// # Arguments
    /// * `challenge` - Fresh random bytes; persist `options.challenge()` for verification
    /// * `user` - The account being registered, if already known
    /// * `exclude_credentials` - Credentials already registered for this account
    ///
    /// # Errors
    /// Returns `WebAuthnError::Validation` if the challenge or relying party settings are empty
    pub fn registration_options(
        &self,
        challenge: Vec<u8>,
        user: Option<UserEntity>,
        exclude_credentials: Option<Vec<PublicKeyCredentialDescriptor>>,
    ) -> Result<CredentialCreateOptions, WebAuthnError> {
        let mut builder = CredentialCreateOptions::builder(challenge, &self.settings)
            .attestation(self.settings.attestation)
            .authenticator_selection(self.settings.authenticator_selection())
            .exclude_credentials(exclude_credentials);
        if let Some(user) = user {
            builder = builder.user(user);
        }

        match builder.build() {
            Ok(options) => {
                LoggingHelper::log_registration_options(&options);
                Ok(options)
            }
            Err(err) => {
                LoggingHelper::log_registration_rejected(&self.settings.rp_id, &err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::webauthn::types::{AttestationConveyancePreference, UserVerificationRequirement};

    fn create_test_settings() -> WebAuthnSettings {
        WebAuthnSettings {
            attestation: AttestationConveyancePreference::Indirect,
            user_verification: Some(UserVerificationRequirement::Required),
            ..WebAuthnSettings::for_relying_party("example.com", "Example Corp", 30_000)
        }
    }

    #[test]
    fn test_create_options_copies_inputs() {
        let selection = AuthenticatorSelectionCriteria {
            require_resident_key: true,
            ..AuthenticatorSelectionCriteria::default()
        };
        let excluded = vec![PublicKeyCredentialDescriptor::new(vec![9u8, 9]).unwrap()];

        let options = create_options(
            vec![1; 16],
            &create_test_settings(),
            selection.clone(),
            Some(excluded.clone()),
        )
        .unwrap();

        assert_eq!(options.authenticator_selection(), Some(&selection));
        assert_eq!(options.exclude_credentials(), excluded.as_slice());
        assert_eq!(options.timeout(), 30_000);
        // Settings defaults only apply through the service
        assert_eq!(options.attestation(), AttestationConveyancePreference::None);
    }

    #[test]
    fn test_service_applies_settings_defaults() {
        let service = WebAuthnService::new(create_test_settings());
        let user = UserEntity::new(vec![42u8; 16], "alice@example.com", "Alice").unwrap();

        let options = service
            .registration_options(vec![3; 32], Some(user.clone()), None)
            .unwrap();

        assert_eq!(options.attestation(), AttestationConveyancePreference::Indirect);
        assert_eq!(
            options
                .authenticator_selection()
                .and_then(|s| s.user_verification),
            Some(UserVerificationRequirement::Required)
        );
        assert_eq!(options.user(), Some(&user));
        assert_eq!(options.rp().id(), "example.com");
    }

    #[test]
    fn test_service_rejects_empty_challenge() {
        let service = WebAuthnService::new(create_test_settings());
        let err = service
            .registration_options(Vec::new(), None, None)
            .unwrap_err();
        assert_eq!(err.field(), Some("challenge"));
    }
}
