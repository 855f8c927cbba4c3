use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Delegate to the server framework entry point; failures are logged there.
    match login_server::run_with_config().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
