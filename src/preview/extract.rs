use scraper::{Html, Selector};

use super::fetch::Document;
use crate::models::MetadataRecord;

/// Read the four Open Graph properties from `doc`.
///
/// Strict `og:` lookup only: a page without `og:title` gets an empty title
/// even if it has a `<title>` element. When a property appears more than
/// once the first tag in document order wins.
pub fn extract(doc: &Document) -> MetadataRecord {
    let html = Html::parse_document(doc.html());

    MetadataRecord {
        title: meta_property(&html, "og:title"),
        description: meta_property(&html, "og:description"),
        image: meta_property(&html, "og:image"),
        canonical_url: meta_property(&html, "og:url"),
    }
}

fn meta_property(html: &Html, property: &str) -> String {
    let Ok(selector) = Selector::parse(&format!(r#"meta[property="{property}"]"#)) else {
        return String::new();
    };
    html.select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .unwrap_or_default()
        .to_string()
}
