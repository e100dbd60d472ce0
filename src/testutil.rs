use url::Url;
use wiremock::MockServer;

use crate::Client;

pub(crate) const TEST_TOKEN: &str = "test-token";

pub(crate) fn client_for(endpoint: &Url) -> Client {
    let _ = env_logger::builder().is_test(true).try_init();
    Client::builder()
        .endpoint(endpoint)
        .oauth_token(TEST_TOKEN)
        .build()
        .unwrap()
}

/// Runs `f` with a client pointed at the mock server.
///
/// The client is blocking, so it has to run outside of the async test body.
pub(crate) async fn with_client<F, T>(server: &MockServer, f: F) -> T
where
    F: FnOnce(&Client) -> T + Send + 'static,
    T: Send + 'static,
{
    let endpoint: Url = server.uri().parse().unwrap();
    tokio::task::spawn_blocking(move || f(&client_for(&endpoint)))
        .await
        .unwrap()
}
