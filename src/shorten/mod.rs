//! Shortening attempt lifecycle: the client that talks to the create-short-link
//! endpoint and the observable status store a view layer can subscribe to.

pub mod client;
pub mod status;

pub use client::{ShortenClient, ShortenError};
pub use status::{ShorteningState, ShorteningStatus, ShorteningStore, SubscriberId};

use crate::models::ShortenResponse;

/// Drive one shortening attempt through a store.
///
/// The caller protocol in one place: `start_shortening`, await the client,
/// then exactly one of `set_success`/`set_error`. Input is expected to have
/// passed [`crate::validate::validation_error`] already; validation failures
/// stay local to the input layer and never reach the store.
pub async fn run_attempt(
    store: &ShorteningStore,
    client: &ShortenClient,
    long_url: &str,
    public_base_url: &str,
) -> Result<ShortenResponse, ShortenError> {
    store.start_shortening(long_url);

    match client.shorten_url(long_url).await {
        Ok(response) => {
            let short_url = format!(
                "{}/{}",
                public_base_url.trim_end_matches('/'),
                response.short_code
            );
            store.set_success(&response.short_code, &short_url);
            Ok(response)
        }
        Err(err) => {
            store.set_error(&err.to_string(), None);
            Err(err)
        }
    }
}
