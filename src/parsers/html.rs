use crate::results::ImageReference;
use scraper::{Html, Selector};

/// Finds the first anchor wrapping an image whose `href` is a picture.
///
/// The link is appended to `base_url` as-is. Anchors are visited in document
/// order and the scan stops at the first match.
pub fn extract_image_url(html: &str, base_url: &str) -> Option<ImageReference> {
    let doc = Html::parse_document(html);

    let anchor_selector = Selector::parse("a").unwrap();
    let image_selector = Selector::parse("img").unwrap();

    for anchor in doc.select(&anchor_selector) {
        if anchor.select(&image_selector).next().is_none() {
            continue;
        }

        let Some(href) = anchor.value().attr("href") else {
            ::log::debug!("Skipping image anchor without href");
            continue;
        };

        match ImageReference::from_link(base_url, href) {
            Ok(image) => {
                ::log::info!("Image url : {}", image);
                return Some(image);
            }
            Err(_) => {
                ::log::debug!("Skipping image anchor with non-image link: {}", href);
            }
        }
    }

    ::log::debug!("HTML parser found no linked image");
    None
}
