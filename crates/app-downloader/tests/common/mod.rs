#![allow(dead_code)]

use app_downloader::downloaders::instagram::InstagramFetcher;
use url::Url;

/// A blocking client that never routes loopback traffic through a proxy.
pub fn client() -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder()
        .no_proxy()
        .build()
        .expect("test client")
}

/// A fetcher pointed at `{server_uri}/graphql/query`.
pub fn fetcher_for(server_uri: &str) -> InstagramFetcher {
    let endpoint = Url::parse(&format!("{server_uri}/graphql/query")).expect("endpoint");
    InstagramFetcher::with_endpoint(client(), endpoint)
}

/// Runs blocking HTTP code off the async test runtime.
///
/// Blocking clients must be built and dropped inside `f` as well.
pub async fn blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking task panicked")
}
