use crate::config::{ClientConfig, StatusPolicy};
use crate::error::{ClientError, Result};
use crate::models::{DataLimit, DataLimitRequest, Key, KeyCollection};
use reqwest::blocking::multipart::Form;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::StatusCode;
use std::time::Duration;

/// HTTP client for the access-key management API
///
/// Every operation is a single request against `{base_url}{path}`. The base
/// URL is used verbatim, so it must carry the server's secret path prefix
/// (e.g. "https://203.0.113.7:41234/Xk3f9Qz") without a trailing slash.
///
/// Clones share the connection pool and are safe to use from several threads.
#[derive(Debug, Clone)]
pub struct AccessKeyClient {
    base_url: String,
    client: Client,
    config: ClientConfig,
}

impl AccessKeyClient {
    /// Create a client with the default configuration
    ///
    /// # Example
    /// ```no_run
    /// use outline_client::AccessKeyClient;
    ///
    /// let client = AccessKeyClient::new("https://203.0.113.7:41234/Xk3f9Qz").unwrap();
    /// ```
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(base_url, ClientConfig::default())
    }

    /// Create a client with explicit TLS, timeout and status options
    ///
    /// # Example
    /// ```no_run
    /// use outline_client::{AccessKeyClient, ClientConfig};
    ///
    /// let config = ClientConfig::default().with_accept_invalid_certs(false);
    /// let client = AccessKeyClient::with_config("https://vpn.example.com/Xk3f9Qz", config).unwrap();
    /// ```
    pub fn with_config(base_url: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
            config,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Copy of this client whose requests use a different deadline
    ///
    /// # Example
    /// ```no_run
    /// # use outline_client::AccessKeyClient;
    /// # use std::time::Duration;
    /// # let client = AccessKeyClient::new("https://203.0.113.7:41234/Xk3f9Qz").unwrap();
    /// let keys = client.with_timeout(Duration::from_secs(2)).list_keys().unwrap();
    /// ```
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        let mut scoped = self.clone();
        scoped.config.timeout = timeout;
        scoped
    }

    /// List every access key on the server
    ///
    /// Calls GET /access-keys/. Only HTTP 200 counts as success.
    pub fn list_keys(&self) -> Result<KeyCollection> {
        let url = self.url("/access-keys/");

        tracing::debug!("Listing access keys at: {}", url);

        let response = self.send(self.client.get(&url))?;

        match response.status() {
            StatusCode::OK => {
                let keys: KeyCollection = serde_json::from_str(&response.text()?)?;
                tracing::debug!("Listed {} access keys", keys.len());
                Ok(keys)
            }
            status => {
                tracing::error!("Unexpected status listing access keys: {}", status);
                Err(unexpected_status(response))
            }
        }
    }

    /// Create a new access key
    ///
    /// Calls POST /access-keys. Under `StatusPolicy::Lenient` a non-2xx
    /// response, or a 2xx with an empty body, yields `Key::default()`
    /// instead of an error.
    pub fn create_key(&self) -> Result<Key> {
        let url = self.url("/access-keys");

        tracing::debug!("Creating access key at: {}", url);

        let response = self.send(self.client.post(&url))?;
        let status = response.status();

        if status.is_success() {
            let text = response.text()?;
            if !self.config.is_strict() && text.trim().is_empty() {
                tracing::warn!("Create returned {} with no body, using empty key", status);
                return Ok(Key::default());
            }

            let key: Key = serde_json::from_str(&text)?;
            tracing::info!("Created access key: {}", key.id);
            return Ok(key);
        }

        match self.config.status_policy {
            StatusPolicy::Strict => {
                tracing::error!("Unexpected status creating access key: {}", status);
                Err(unexpected_status(response))
            }
            StatusPolicy::Lenient => {
                tracing::warn!("Create returned {}, using empty key", status);
                Ok(Key::default())
            }
        }
    }

    /// Rename an access key
    ///
    /// Calls PUT /access-keys/{id}/name with a multipart `name` field.
    pub fn rename_key(&self, key_id: &str, name: &str) -> Result<()> {
        let url = self.url(&format!("/access-keys/{}/name", key_id));

        tracing::debug!("Renaming access key {} to {:?}", key_id, name);

        let form = Form::new().text("name", name.to_owned());
        let response = self.send(self.client.put(&url).multipart(form))?;
        self.finish(response, Some(key_id))?;

        tracing::info!("Renamed access key: {}", key_id);
        Ok(())
    }

    /// Delete an access key
    ///
    /// Calls DELETE /access-keys/{id}.
    pub fn delete_key(&self, key_id: &str) -> Result<()> {
        let url = self.url(&format!("/access-keys/{}", key_id));

        tracing::debug!("Deleting access key: {}", key_id);

        let response = self.send(self.client.delete(&url))?;
        self.finish(response, Some(key_id))?;

        tracing::info!("Deleted access key: {}", key_id);
        Ok(())
    }

    /// Set the default transfer limit for every key on the server
    ///
    /// Calls PUT /experimental/access-key-data-limit.
    pub fn set_server_data_limit(&self, limit_bytes: u64) -> Result<()> {
        let url = self.url("/experimental/access-key-data-limit");
        let body = DataLimitRequest::from(DataLimit::new(limit_bytes));

        tracing::debug!("Setting server data limit to {} bytes", limit_bytes);

        let response = self.send(self.client.put(&url).json(&body))?;
        let text = self.finish(response, None)?;

        tracing::debug!("Server data limit response: {}", text);
        tracing::info!("Set server data limit: {} bytes", limit_bytes);
        Ok(())
    }

    /// Set the transfer limit for one key
    ///
    /// Calls PUT /access-keys/{id}/data-limit.
    pub fn set_key_data_limit(&self, key_id: &str, limit_bytes: u64) -> Result<()> {
        let url = self.url(&format!("/access-keys/{}/data-limit", key_id));
        let body = DataLimitRequest::from(DataLimit::new(limit_bytes));

        tracing::debug!("Setting data limit for {} to {} bytes", key_id, limit_bytes);

        let response = self.send(self.client.put(&url).json(&body))?;
        let text = self.finish(response, Some(key_id))?;

        tracing::debug!("Key data limit response: {}", text);
        tracing::info!("Set data limit for {}: {} bytes", key_id, limit_bytes);
        Ok(())
    }

    /// Remove the server-wide transfer limit
    ///
    /// Calls DELETE /experimental/access-key-data-limit.
    pub fn remove_server_data_limit(&self) -> Result<()> {
        let url = self.url("/experimental/access-key-data-limit");

        tracing::debug!("Removing server data limit");

        let response = self.send(self.client.delete(&url))?;
        let text = self.finish(response, None)?;

        tracing::debug!("Remove server data limit response: {}", text);
        tracing::info!("Removed server data limit");
        Ok(())
    }

    /// Remove the transfer limit from one key
    ///
    /// Calls DELETE /access-keys/{id}/data-limit.
    pub fn remove_key_data_limit(&self, key_id: &str) -> Result<()> {
        let url = self.url(&format!("/access-keys/{}/data-limit", key_id));

        tracing::debug!("Removing data limit for {}", key_id);

        let response = self.send(self.client.delete(&url))?;
        let text = self.finish(response, Some(key_id))?;

        tracing::debug!("Remove key data limit response: {}", text);
        tracing::info!("Removed data limit for {}", key_id);
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send(&self, request: RequestBuilder) -> Result<Response> {
        Ok(request.timeout(self.config.timeout).send()?)
    }

    /// Apply the status policy and drain the body
    fn finish(&self, response: Response, key_id: Option<&str>) -> Result<String> {
        let status = response.status();

        if self.config.is_strict() && !status.is_success() {
            return Err(match key_id {
                Some(id) if status == StatusCode::NOT_FOUND => {
                    tracing::warn!("Access key not found: {}", id);
                    ClientError::KeyNotFound(id.to_string())
                }
                _ => {
                    tracing::error!("Unexpected status from {}: {}", response.url(), status);
                    unexpected_status(response)
                }
            });
        }

        Ok(response.text()?)
    }
}

fn unexpected_status(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let body = response.text().unwrap_or_default();
    ClientError::UnexpectedStatus { status, body }
}
