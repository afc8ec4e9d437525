use crate::data::MOCK_USERS;
use gloo_timers::future::TimeoutFuture;
use log::debug;
use shared::User;

/// Signs in by handle against the mock user collection.
pub async fn login(handle: &str) -> Result<User, String> {
    debug!("Logging in as: {}", handle);

    // Short stand-in for the auth round trip
    TimeoutFuture::new(300).await;

    MOCK_USERS
        .iter()
        .find(|u| u.handle == handle)
        .cloned()
        .ok_or_else(|| format!("No account with handle '{}'", handle))
}

/// Ends the session. The mock backend holds no session state, but sign-out
/// crosses the same boundary as sign-in so a real backend can slot in.
pub async fn logout() -> Result<(), String> {
    debug!("Logging out");

    TimeoutFuture::new(300).await;

    Ok(())
}
