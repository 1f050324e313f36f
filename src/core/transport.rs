use crate::domain::model::{Credential, TransportResponse};
use crate::domain::ports::Transport;
use crate::utils::error::{PytheusError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, COOKIE};
use reqwest::Client;

/// reqwest-backed transport. No timeout and no retry: the call blocks until the
/// connection resolves.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

fn cookie_header(credential: &Credential) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(credential.expose()).map_err(|e| {
        PytheusError::InvalidCredential {
            reason: e.to_string(),
        }
    })?;
    value.set_sensitive(true);
    Ok(value)
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, credential: &Credential) -> Result<TransportResponse> {
        let cookie = cookie_header(credential)?;

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).header(COOKIE, cookie).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let body = response.bytes().await?;
        Ok(TransportResponse {
            status: status.as_u16(),
            body: body.to_vec(),
        })
    }
}
