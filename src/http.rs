//! HTTP client handle
//!
//! Wraps a [`reqwest::Client`] so configuration records can share one transport
//! and compare handles by identity. Nothing in this crate sends requests.

use reqwest::Client;
use std::fmt;
use std::sync::{Arc, OnceLock};

#[derive(Clone)]
pub struct HttpClient {
    inner: Arc<Client>,
}

impl HttpClient {
    pub fn new(client: Client) -> Self {
        Self {
            inner: Arc::new(client),
        }
    }

    /// The process-wide default client, built on first use.
    pub fn shared_default() -> &'static HttpClient {
        static DEFAULT_CLIENT: OnceLock<HttpClient> = OnceLock::new();
        DEFAULT_CLIENT.get_or_init(|| HttpClient::new(Client::new()))
    }

    pub fn client(&self) -> &Client {
        &self.inner
    }

    pub fn same_client(&self, other: &HttpClient) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for HttpClient {
    fn eq(&self, other: &Self) -> bool {
        self.same_client(other)
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("shared", &Arc::strong_count(&self.inner))
            .finish()
    }
}
