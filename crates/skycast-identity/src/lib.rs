//! Identity provider integration for Skycast.
//!
//! Brokers account creation and password sign-in through a REST identity
//! provider, and mirrors a minimal profile record into the provider's JSON
//! database. The provider owns the account lifecycle; this crate only
//! forwards credentials and translates provider error codes.

pub mod client;
pub mod error;
pub mod profile;
pub mod types;

pub use client::IdentityClient;
pub use error::IdentityError;
pub use profile::ProfileStore;
pub use types::{AuthSession, AuthenticatedUser};
