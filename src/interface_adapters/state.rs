use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::errors::CredentialError;
use crate::domain::ports::CredentialChecker;

// Username accepted by the placeholder credential backend.
const STUB_USERNAME: &str = "kamal";

// Application state shared by the login routes.
#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<dyn CredentialChecker>,
    // Largest request body the login handler will buffer.
    pub max_body_bytes: usize,
}

// Placeholder credential backend. It only recognises a single username and
// never looks at the password; every other username is reported as a
// backend failure rather than a mismatch.
#[derive(Clone, Copy, Debug, Default)]
pub struct StubCredentialChecker;

#[async_trait]
impl CredentialChecker for StubCredentialChecker {
    async fn login_user(&self, username: &str, _password: &str) -> Result<bool, CredentialError> {
        if username != STUB_USERNAME {
            return Err(CredentialError::UnknownUser);
        }
        Ok(true)
    }
}
