use std::path::PathBuf;

use crate::decode::decode_page;
use crate::fallback::{FallbackSettings, LogoApi, LogoApiClient};
use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::heuristics::{HeuristicLogoExtractor, LogoExtractor};
use crate::persist::ImageStore;
use crate::LogoLocation;

/// Default directory for images stored from the fallback API.
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Prefix `http://` when the input carries no scheme of its own.
pub fn prepend_scheme(domain: &str) -> String {
    if domain.starts_with("http://") || domain.starts_with("https://") {
        domain.to_string()
    } else {
        format!("http://{domain}")
    }
}

#[derive(Debug, Clone, Default)]
pub struct PipelineSettings {
    pub fetch: FetchSettings,
    pub fallback: FallbackSettings,
    pub output_dir: Option<PathBuf>,
}

/// Per-domain resolution: fetch the page and run the heuristic chain over
/// it; on an unreachable page or an empty chain, download from the fallback
/// API and store the bytes locally. Every failure is local to the one
/// domain being resolved.
pub struct LogoPipeline {
    fetcher: Box<dyn Fetcher>,
    logo_api: Box<dyn LogoApi>,
    extractor: Box<dyn LogoExtractor>,
    store: ImageStore,
}

impl LogoPipeline {
    pub fn new(settings: PipelineSettings) -> Self {
        let output_dir = settings
            .output_dir
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
        Self {
            fetcher: Box::new(ReqwestFetcher::new(settings.fetch)),
            logo_api: Box::new(LogoApiClient::new(settings.fallback)),
            extractor: Box::new(HeuristicLogoExtractor),
            store: ImageStore::new(output_dir),
        }
    }

    /// Swap any collaborator; used by tests to stub the network seams.
    pub fn with_parts(
        fetcher: Box<dyn Fetcher>,
        logo_api: Box<dyn LogoApi>,
        extractor: Box<dyn LogoExtractor>,
        store: ImageStore,
    ) -> Self {
        Self {
            fetcher,
            logo_api,
            extractor,
            store,
        }
    }

    pub async fn resolve(&self, domain: &str) -> Option<LogoLocation> {
        let url = prepend_scheme(domain);

        let output = match self.fetcher.fetch(&url).await {
            Ok(output) => output,
            Err(err) => {
                log::warn!("{domain}: unreachable ({err}), using fallback API");
                return self.fallback(domain).await;
            }
        };

        let page = decode_page(&output.bytes, output.metadata.content_type.as_deref());
        log::debug!(
            "{domain}: fetched {} bytes, decoded as {}",
            output.metadata.byte_len,
            page.encoding_label
        );

        match self.extractor.extract(&page.html) {
            Some(candidate) => Some(LogoLocation::Remote(candidate)),
            None => {
                log::info!("{domain}: no logo found on page, using fallback API");
                self.fallback(domain).await
            }
        }
    }

    async fn fallback(&self, domain: &str) -> Option<LogoLocation> {
        let bytes = match self.logo_api.download(domain).await {
            Ok(bytes) => bytes,
            Err(err) => {
                log::warn!("{domain}: fallback API failed ({err})");
                return None;
            }
        };

        match self.store.persist(&bytes, domain) {
            Ok(path) => Some(LogoLocation::Stored(path)),
            Err(err) => {
                log::error!("{domain}: failed to store fallback image: {err}");
                None
            }
        }
    }
}
