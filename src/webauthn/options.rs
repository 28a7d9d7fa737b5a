//! Credential creation options
//!
//! [`CredentialCreateOptions`] is the payload sent to the client to start a
//! registration ceremony. It is built once per attempt through
//! [`CredentialCreateOptionsBuilder`], never mutated afterwards, and carries
//! the challenge the caller must persist for verification.

use log::debug;
use serde::{Deserialize, Serialize};

use super::algorithms::{preferred_algorithms, PublicKeyCredentialParameters};
use super::encoding::base64url;
use super::errors::WebAuthnError;
use super::settings::WebAuthnSettings;
use super::types::{
    null_as_empty, AttestationConveyancePreference, AuthenticatorSelectionCriteria,
    PublicKeyCredentialDescriptor, RelyingParty, Status, UserEntity,
};

/// `WebAuthn` registration options sent to the client
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "RawCredentialCreateOptions")]
pub struct CredentialCreateOptions {
    status: Status,
    #[serde(rename = "errorMessage")]
    error_message: String,
    rp: RelyingParty,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<UserEntity>,
    #[serde(with = "base64url")]
    challenge: Vec<u8>,
    #[serde(rename = "pubKeyCredParams")]
    pub_key_cred_params: Vec<PublicKeyCredentialParameters>,
    timeout: u64, // Milliseconds, a hint for the client
    attestation: AttestationConveyancePreference,
    #[serde(rename = "authenticatorSelection", skip_serializing_if = "Option::is_none")]
    authenticator_selection: Option<AuthenticatorSelectionCriteria>,
    #[serde(rename = "excludeCredentials")]
    exclude_credentials: Vec<PublicKeyCredentialDescriptor>,
}

/// Wire shape of a received payload, checked before it becomes options
#[derive(Deserialize)]
struct RawCredentialCreateOptions {
    #[serde(default)]
    status: Status,
    #[serde(rename = "errorMessage", default)]
    error_message: String,
    rp: RelyingParty,
    #[serde(default)]
    user: Option<UserEntity>,
    #[serde(deserialize_with = "base64url::deserialize")]
    challenge: Vec<u8>,
    #[serde(rename = "pubKeyCredParams")]
    pub_key_cred_params: Vec<PublicKeyCredentialParameters>,
    timeout: u64,
    #[serde(default)]
    attestation: AttestationConveyancePreference,
    #[serde(rename = "authenticatorSelection", default)]
    authenticator_selection: Option<AuthenticatorSelectionCriteria>,
    #[serde(
        rename = "excludeCredentials",
        default,
        deserialize_with = "null_as_empty"
    )]
    exclude_credentials: Vec<PublicKeyCredentialDescriptor>,
}

impl TryFrom<RawCredentialCreateOptions> for CredentialCreateOptions {
    type Error = WebAuthnError;

    fn try_from(raw: RawCredentialCreateOptions) -> Result<Self, Self::Error> {
        if raw.challenge.is_empty() {
            return Err(WebAuthnError::Validation { field: "challenge" });
        }
        if raw.pub_key_cred_params.is_empty() {
            return Err(WebAuthnError::Validation {
                field: "pubKeyCredParams",
            });
        }
        Ok(Self {
            status: raw.status,
            error_message: raw.error_message,
            rp: raw.rp,
            user: raw.user,
            challenge: raw.challenge,
            pub_key_cred_params: raw.pub_key_cred_params,
            timeout: raw.timeout,
            attestation: raw.attestation,
            authenticator_selection: raw.authenticator_selection,
            exclude_credentials: raw.exclude_credentials,
        })
    }
}

impl CredentialCreateOptions {
    /// Start building options for one registration attempt
    ///
    /// The challenge is moved in; it must be fresh for every ceremony.
    #[must_use]
    pub fn builder(
        challenge: Vec<u8>,
        settings: &WebAuthnSettings,
    ) -> CredentialCreateOptionsBuilder {
        CredentialCreateOptionsBuilder {
            challenge,
            rp_id: settings.rp_id.clone(),
            rp_name: settings.rp_name.clone(),
            timeout_millis: settings.timeout_millis,
            user: None,
            attestation: AttestationConveyancePreference::default(),
            authenticator_selection: None,
            exclude_credentials: Vec::new(),
        }
    }

    /// Mark a built request as rejected by a later ceremony step
    #[must_use]
    pub fn rejected(self, message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            error_message: message.into(),
            ..self
        }
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    #[must_use]
    pub fn rp(&self) -> &RelyingParty {
        &self.rp
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserEntity> {
        self.user.as_ref()
    }

    /// Raw challenge bytes, to be stored against the ceremony
    #[must_use]
    pub fn challenge(&self) -> &[u8] {
        &self.challenge
    }

    #[must_use]
    pub fn pub_key_cred_params(&self) -> &[PublicKeyCredentialParameters] {
        &self.pub_key_cred_params
    }

    #[must_use]
    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    #[must_use]
    pub fn attestation(&self) -> AttestationConveyancePreference {
        self.attestation
    }

    #[must_use]
    pub fn authenticator_selection(&self) -> Option<&AuthenticatorSelectionCriteria> {
        self.authenticator_selection.as_ref()
    }

    #[must_use]
    pub fn exclude_credentials(&self) -> &[PublicKeyCredentialDescriptor] {
        &self.exclude_credentials
    }
}

/// Builder for [`CredentialCreateOptions`]
#[derive(Debug, Clone)]
pub struct CredentialCreateOptionsBuilder {
    challenge: Vec<u8>,
    rp_id: String,
    rp_name: String,
    timeout_millis: u64,
    user: Option<UserEntity>,
    attestation: AttestationConveyancePreference,
    authenticator_selection: Option<AuthenticatorSelectionCriteria>,
    exclude_credentials: Vec<PublicKeyCredentialDescriptor>,
}

impl CredentialCreateOptionsBuilder {
    /// Set the user account being registered
    #[must_use]
    pub fn user(mut self, user: UserEntity) -> Self {
        self.user = Some(user);
        self
    }

    /// Override the attestation preference (defaults to `none`)
    #[must_use]
    pub fn attestation(mut self, attestation: AttestationConveyancePreference) -> Self {
        self.attestation = attestation;
        self
    }

    #[must_use]
    pub fn authenticator_selection(mut self, selection: AuthenticatorSelectionCriteria) -> Self {
        self.authenticator_selection = Some(selection);
        self
    }

    /// Credentials the client must refuse to re-register; `None` means none
    #[must_use]
    pub fn exclude_credentials(
        mut self,
        credentials: Option<Vec<PublicKeyCredentialDescriptor>>,
    ) -> Self {
        self.exclude_credentials = credentials.unwrap_or_default();
        self
    }

    /// Validate inputs and produce the options
    ///
    /// # Errors
    ///
    /// Returns `WebAuthnError::Validation` naming `challenge`, `domain` or
    /// `name` when that input is empty.
    pub fn build(self) -> Result<CredentialCreateOptions, WebAuthnError> {
        if self.challenge.is_empty() {
            return Err(WebAuthnError::Validation { field: "challenge" });
        }
        if self.rp_id.is_empty() {
            return Err(WebAuthnError::Validation { field: "domain" });
        }
        if self.rp_name.is_empty() {
            return Err(WebAuthnError::Validation { field: "name" });
        }

        let rp = RelyingParty::new(self.rp_id, self.rp_name)?;

        debug!(
            "Built options for rp {} (challenge {} bytes, user {}, {} excluded)",
            rp.id(),
            self.challenge.len(),
            if self.user.is_some() { "present" } else { "absent" },
            self.exclude_credentials.len()
        );

        Ok(CredentialCreateOptions {
            status: Status::Ok,
            error_message: String::new(),
            rp,
            user: self.user,
            challenge: self.challenge,
            pub_key_cred_params: preferred_algorithms().to_vec(),
            timeout: self.timeout_millis,
            attestation: self.attestation,
            authenticator_selection: self.authenticator_selection,
            exclude_credentials: self.exclude_credentials,
        })
    }
}
