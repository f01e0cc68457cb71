use std::time::Duration;

use crate::fetch::{map_reqwest_error, read_body_capped};
use crate::{FailureKind, FetchError};

/// Public logo-by-domain API, queried as a last resort.
pub const DEFAULT_LOGO_API_BASE: &str = "https://logo.clearbit.com";

#[derive(Debug, Clone)]
pub struct FallbackSettings {
    pub base_url: String,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FallbackSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_LOGO_API_BASE.to_string(),
            request_timeout: Duration::from_secs(5),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait LogoApi: Send + Sync {
    async fn download(&self, domain: &str) -> Result<Vec<u8>, FetchError>;
}

/// Client for the logo-by-domain API: `GET {base}/{domain}`, expecting raw
/// image bytes on a 2xx response.
#[derive(Debug, Clone)]
pub struct LogoApiClient {
    settings: FallbackSettings,
}

impl LogoApiClient {
    pub fn new(settings: FallbackSettings) -> Self {
        Self { settings }
    }

    fn request_url(&self, domain: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), domain)
    }
}

#[async_trait::async_trait]
impl LogoApi for LogoApiClient {
    async fn download(&self, domain: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.request_url(domain);
        let parsed = reqwest::Url::parse(&url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;

        let response = client.get(parsed).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        read_body_capped(response, self.settings.max_bytes).await
    }
}
