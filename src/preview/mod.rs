//! Open Graph preview resolution: fetch a page, pull its `og:` tags, and
//! cache the result.

pub mod extract;
pub mod fetch;
pub mod service;

pub use extract::extract;
pub use fetch::{Document, FetchError, HttpFetcher, PageFetcher};
pub use service::{PreviewService, ResolveError, CACHE_TTL};
