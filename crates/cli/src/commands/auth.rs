//! Token commands.

use possystem_core::LoginRequest;
use possystem_site::backend::{BackendClient, BackendError};
use secrecy::ExposeSecret;

/// Log in and print the issued bearer token.
///
/// # Errors
///
/// Returns an error if the backend rejects the credentials or is unreachable.
#[allow(clippy::print_stdout)]
pub async fn login(
    client: &BackendClient,
    email: String,
    password: String,
) -> Result<(), BackendError> {
    tracing::info!(email = %email, backend = %client.base_url(), "Logging in");
    let token = client.login(&LoginRequest { email, password }).await?;

    println!("{}", token.expose_secret());
    Ok(())
}
