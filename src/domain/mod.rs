// Domain layer: login rules and the ports they depend on.

pub mod errors;
pub mod ports;

pub use errors::{CredentialError, LoginError};
pub use ports::CredentialChecker;
