//! Fluent builders for creating test objects

use crate::webauthn::{AuthenticatorTransport, PublicKeyCredentialDescriptor};

/// Builder for exclusion lists in a known order
#[derive(Debug, Default)]
pub struct ExclusionListBuilder {
    descriptors: Vec<PublicKeyCredentialDescriptor>,
}

impl ExclusionListBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a credential without transport hints
    ///
    /// # Panics
    ///
    /// Panics if `id` is empty.
    #[must_use]
    pub fn credential(mut self, id: &[u8]) -> Self {
        self.descriptors
            .push(PublicKeyCredentialDescriptor::new(id.to_vec()).expect("credential id is empty"));
        self
    }

    /// Append a credential with transport hints
    ///
    /// # Panics
    ///
    /// Panics if `id` is empty.
    #[must_use]
    pub fn credential_with_transports(
        mut self,
        id: &[u8],
        transports: &[AuthenticatorTransport],
    ) -> Self {
        let descriptor = PublicKeyCredentialDescriptor::new(id.to_vec())
            .expect("credential id is empty")
            .with_transports(transports.iter().copied());
        self.descriptors.push(descriptor);
        self
    }

    /// Append `count` credentials with ids `[0, i]`
    #[must_use]
    pub fn numbered(mut self, count: u8) -> Self {
        for i in 0..count {
            self = self.credential(&[0, i]);
        }
        self
    }

    #[must_use]
    pub fn build(self) -> Vec<PublicKeyCredentialDescriptor> {
        self.descriptors
    }
}
