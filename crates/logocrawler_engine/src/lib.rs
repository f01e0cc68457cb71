//! Logocrawler engine: page fetching, the logo heuristic chain, the
//! fallback logo API, and local image persistence.
mod decode;
mod fallback;
mod fetch;
mod filename;
mod heuristics;
mod persist;
mod pipeline;
mod types;

pub use decode::{decode_page, DecodedPage};
pub use fallback::{FallbackSettings, LogoApi, LogoApiClient, DEFAULT_LOGO_API_BASE};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use filename::{logo_filename, sanitize_identifier};
pub use heuristics::{HeuristicLogoExtractor, LogoExtractor, IMAGE_TAGS, LOGO_MARKER};
pub use persist::{ensure_output_dir, ImageStore, PersistError};
pub use pipeline::{prepend_scheme, LogoPipeline, PipelineSettings, DEFAULT_OUTPUT_DIR};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput, LogoLocation};
