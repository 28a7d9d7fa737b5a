#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Context;
use fido2_options::{
    settings::Settings,
    webauthn::{crypto, UserEntity, WebAuthnService},
};

/// Print registration options for one user as JSON
///
/// Usage: `fido2-options [name] [display-name]`
fn main() -> anyhow::Result<()> {
    // Load configuration from Settings.toml and environment variables
    // This also initializes the logger
    let settings = Settings::load().context("Failed to load settings")?;

    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "user@example.com".to_string());
    let display_name = args.next().unwrap_or_else(|| name.clone());

    // The challenge must be persisted by whoever verifies the attestation
    let challenge = crypto::generate_challenge()?;
    let user = UserEntity::new(crypto::generate_user_handle()?, name, display_name)?;

    let service = WebAuthnService::new(settings.webauthn);
    let options = service.registration_options(challenge, Some(user), None)?;

    println!("{}", serde_json::to_string_pretty(&options)?);
    Ok(())
}
