use serde::{Deserialize, Serialize};

/// Open Graph metadata returned by `GET /preview` and stored in the cache.
///
/// Every field is always present: a page without a given OG tag yields an
/// empty string rather than `null`. The canonical URL is serialized as `url`
/// and comes from the page's own `og:url`, not from the requested URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(rename = "url")]
    pub canonical_url: String,
}
