//! `WebAuthn` randomness helpers
//!
//! Caller-side sources for challenge bytes and user handles. The options
//! assembler never calls these; callers generate values here and pass them in.

use ring::rand::{SecureRandom, SystemRandom};

use super::errors::WebAuthnError;

/// Challenge length in bytes (256 bits)
pub const CHALLENGE_LEN: usize = 32;

/// User handle length in bytes
pub const USER_HANDLE_LEN: usize = 16;

fn random_bytes(len: usize) -> Result<Vec<u8>, WebAuthnError> {
    let mut bytes = vec![0u8; len];
    SystemRandom::new()
        .fill(&mut bytes)
        .map_err(|_| WebAuthnError::InternalError("system randomness unavailable".to_string()))?;
    Ok(bytes)
}

/// Generate a secure random challenge
///
/// # Errors
/// Returns `WebAuthnError::InternalError` if the system random source fails
pub fn generate_challenge() -> Result<Vec<u8>, WebAuthnError> {
    random_bytes(CHALLENGE_LEN)
}

/// Generate a random user handle, unrelated to any user-visible name
///
/// # Errors
/// Returns `WebAuthnError::InternalError` if the system random source fails
pub fn generate_user_handle() -> Result<Vec<u8>, WebAuthnError> {
    random_bytes(USER_HANDLE_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths() {
        assert_eq!(generate_challenge().unwrap().len(), CHALLENGE_LEN);
        assert_eq!(generate_user_handle().unwrap().len(), USER_HANDLE_LEN);
    }

    #[test]
    fn test_challenges_differ() {
        assert_ne!(generate_challenge().unwrap(), generate_challenge().unwrap());
    }
}
