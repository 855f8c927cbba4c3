use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::errors::CredentialError;
use crate::domain::ports::CredentialChecker;

// Outcome a fake checker reports for every call.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Verdict {
    Accept,
    Reject,
    Fail,
}

// Fake credential backend that records the credentials it was asked about.
#[derive(Clone)]
pub(crate) struct RecordingChecker {
    verdict: Verdict,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingChecker {
    pub(crate) fn new(verdict: Verdict) -> Self {
        Self {
            verdict,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }
}

#[async_trait]
impl CredentialChecker for RecordingChecker {
    async fn login_user(&self, username: &str, password: &str) -> Result<bool, CredentialError> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push((username.to_string(), password.to_string()));

        match self.verdict {
            Verdict::Accept => Ok(true),
            Verdict::Reject => Ok(false),
            Verdict::Fail => Err(CredentialError::UnknownUser),
        }
    }
}
