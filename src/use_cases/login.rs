use crate::domain::errors::LoginError;
use crate::domain::ports::CredentialChecker;
use crate::interface_adapters::protocol::LoginRequest;

// Login use case with an injected credential backend.
pub struct LoginUseCase<C> {
    pub checker: C,
}

impl<C> LoginUseCase<C>
where
    C: CredentialChecker,
{
    pub async fn execute(&self, payload: LoginRequest) -> Result<(), LoginError> {
        let ok = self
            .checker
            .login_user(&payload.username, &payload.password)
            .await?;

        if !ok {
            return Err(LoginError::WrongPassword);
        }

        Ok(())
    }
}
