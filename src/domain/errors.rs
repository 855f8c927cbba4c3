use thiserror::Error;

// Failures reported by a credential backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialError {
    // The backend has no record of the username. Treated as a backend fault,
    // not as a credential mismatch.
    #[error("no such user")]
    UnknownUser,
}

// Domain-level errors for the login workflow.
#[derive(Debug, Error)]
pub enum LoginError {
    #[error("wrong password")]
    WrongPassword,
    #[error("login user backend error: {0}")]
    Backend(#[from] CredentialError),
}
