use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::errors::CredentialError;

// Port for checking a username/password pair against a credential backend.
#[async_trait]
pub trait CredentialChecker: Send + Sync {
    // Ok(false) means the credentials did not match.
    async fn login_user(&self, username: &str, password: &str) -> Result<bool, CredentialError>;
}

#[async_trait]
impl<T> CredentialChecker for Arc<T>
where
    T: CredentialChecker + ?Sized,
{
    async fn login_user(&self, username: &str, password: &str) -> Result<bool, CredentialError> {
        (**self).login_user(username, password).await
    }
}
