//! Testing utilities for fido2-options
//!
//! Available to unit tests and, with the `testing` feature, to integration tests.
//!
//! - [`fixtures`] - Pre-built settings, challenges, users and descriptors
//! - [`builders`] - Fluent builder for exclusion lists
//!
//! ## Usage
//!
//! ```rust
//! use fido2_options::testing::{fixtures::TestFixtures, builders::ExclusionListBuilder};
//!
//! let settings = TestFixtures::settings();
//! let excluded = ExclusionListBuilder::new()
//!     .credential(b"first")
//!     .credential(b"second")
//!     .build();
//! assert_eq!(excluded.len(), 2);
//! assert_eq!(settings.rp_id, "example.com");
//! ```

pub mod builders;
pub mod fixtures;

// Re-export commonly used items for convenience
pub use builders::ExclusionListBuilder;
pub use fixtures::TestFixtures;

/// Common test constants
pub mod constants {
    /// Relying party domain used throughout the tests
    pub const TEST_RP_ID: &str = "example.com";

    /// Relying party display name
    pub const TEST_RP_NAME: &str = "Example Corp";

    /// Ceremony timeout in milliseconds
    pub const TEST_TIMEOUT_MS: u64 = 60_000;

    /// Default test user name
    pub const TEST_USER_NAME: &str = "alice@example.com";

    /// Default test display name
    pub const TEST_DISPLAY_NAME: &str = "Alice Example";

    /// Fixed 16-byte challenge; real ceremonies must use fresh random bytes
    pub const TEST_CHALLENGE: [u8; 16] = [
        0x9f, 0x3a, 0xfb, 0xff, 0x00, 0x11, 0x7e, 0x3e, 0x3f, 0xc0, 0x01, 0x80, 0xfe, 0xed, 0xbe,
        0xef,
    ];

    /// Fixed user handle
    pub const TEST_USER_HANDLE: [u8; 16] = [
        0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc, 0xba, 0x98, 0x76, 0x54, 0x32,
        0x10,
    ];
}
