//! Test fixtures providing pre-built test objects
//!
//! Commonly used settings and entities, so tests don't recreate them inline.

use crate::webauthn::{
    AuthenticatorSelectionCriteria, AuthenticatorTransport, CredentialCreateOptions,
    PublicKeyCredentialDescriptor, UserEntity, WebAuthnSettings,
};

use super::constants::{
    TEST_CHALLENGE, TEST_DISPLAY_NAME, TEST_RP_ID, TEST_RP_NAME, TEST_TIMEOUT_MS,
    TEST_USER_HANDLE, TEST_USER_NAME,
};

/// Central fixture provider for all test data
pub struct TestFixtures;

impl TestFixtures {
    /// Relying party settings for `example.com`
    #[must_use]
    pub fn settings() -> WebAuthnSettings {
        WebAuthnSettings::for_relying_party(TEST_RP_ID, TEST_RP_NAME, TEST_TIMEOUT_MS)
    }

    /// The fixed test challenge as an owned buffer
    #[must_use]
    pub fn challenge() -> Vec<u8> {
        TEST_CHALLENGE.to_vec()
    }

    /// A user with the fixed test handle
    ///
    /// # Panics
    ///
    /// Never; the fixture values are non-empty.
    #[must_use]
    pub fn user() -> UserEntity {
        UserEntity::new(TEST_USER_HANDLE.to_vec(), TEST_USER_NAME, TEST_DISPLAY_NAME)
            .expect("fixture user is valid")
    }

    /// Selection criteria with only `requireResidentKey: false`
    #[must_use]
    pub fn minimal_selection() -> AuthenticatorSelectionCriteria {
        AuthenticatorSelectionCriteria::default()
    }

    /// A security key credential reachable over USB and NFC
    ///
    /// # Panics
    ///
    /// Never; the fixture id is non-empty.
    #[must_use]
    pub fn security_key_descriptor() -> PublicKeyCredentialDescriptor {
        PublicKeyCredentialDescriptor::new(b"security-key-credential".to_vec())
            .expect("fixture descriptor is valid")
            .with_transports([AuthenticatorTransport::Usb, AuthenticatorTransport::Nfc])
    }

    /// Options built from the fixed challenge, settings and user
    ///
    /// # Panics
    ///
    /// Never; all fixture inputs are valid.
    #[must_use]
    pub fn options() -> CredentialCreateOptions {
        CredentialCreateOptions::builder(Self::challenge(), &Self::settings())
            .user(Self::user())
            .authenticator_selection(Self::minimal_selection())
            .build()
            .expect("fixture options are valid")
    }
}
