use anyhow::Context as _;
use bytes::Bytes;
use url::Url;

use crate::error::LoadError;

#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new(user_agent: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .context("build reqwest client")?;
        Ok(Self { client })
    }

    /// One GET, no retries. Any non-success status is an error.
    pub async fn get_bytes(&self, url: Url) -> Result<Bytes, LoadError> {
        let resp = match self.client.get(url.clone()).send().await {
            Ok(resp) => resp,
            Err(source) => return Err(LoadError::Transport { url, source }),
        };

        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::Status { url, status });
        }

        resp.bytes()
            .await
            .map_err(|source| LoadError::Transport { url, source })
    }
}
