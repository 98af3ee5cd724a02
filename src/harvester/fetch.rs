use crate::error::{HarvestError, Result};
use reqwest::Client;
use reqwest::header::USER_AGENT;
use std::time::Duration;

/// Thin wrapper over a reqwest client for plain GET requests.
///
/// The client has no default User-Agent, so requests made without one go out
/// with no identification header at all.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a fetcher; `timeout` of `None` lets requests wait forever
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(HarvestError::Client)?;
        Ok(Self { client })
    }

    /// GET `url`, optionally identifying as `user_agent`, and return the body.
    ///
    /// Non-2xx responses are errors.
    pub async fn get_bytes(&self, url: &str, user_agent: Option<&str>) -> Result<Vec<u8>> {
        let mut request = self.client.get(url);
        if let Some(agent) = user_agent {
            request = request.header(USER_AGENT, agent);
        }

        let to_error = |source: reqwest::Error| HarvestError::Fetch {
            url: url.to_string(),
            source,
        };

        let response = request
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(to_error)?;
        let body = response.bytes().await.map_err(to_error)?;

        ::log::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}
