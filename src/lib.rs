#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

/// Version of the fido2-options crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod settings;
pub mod utils;
pub mod webauthn;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

/// Re-export commonly used items
pub use settings::Settings;
pub use webauthn::{
    create_options, preferred_algorithms, CredentialCreateOptions, WebAuthnError,
    WebAuthnService, WebAuthnSettings,
};
