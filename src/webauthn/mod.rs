//! `WebAuthn` registration options
//!
//! This module builds `PublicKeyCredentialCreationOptions` for the W3C `WebAuthn`
//! registration ceremony: entity descriptors, the signature algorithm policy,
//! the canonical base64url codec for binary fields, and the options assembler.

mod algorithms;
pub mod crypto;
pub mod encoding;
mod errors;
mod options;
mod service;
mod settings;
mod types;

// Re-exports for public use
pub use algorithms::{
    preferred_algorithms, COSEAlgorithm, PublicKeyCredentialParameters, ES256, RS256,
};
pub use errors::WebAuthnError;
pub use options::{CredentialCreateOptions, CredentialCreateOptionsBuilder};
pub use service::{create_options, WebAuthnService};
pub use settings::WebAuthnSettings;
pub use types::*;
