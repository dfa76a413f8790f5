use crate::document::{PageDocument, PageNode};
use crate::models::{ExtractedFacts, Heading, NO_META_DESCRIPTION, NO_TITLE};

// CSS selector strings, known-valid literals
const TITLE_SELECTOR: &str = "title";
const META_DESCRIPTION_SELECTOR: &str = "meta[name='description']";
const IMG_SELECTOR: &str = "img";
const HEADING_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";

/// Projects a parsed document into `ExtractedFacts`.
///
/// Pure and total: every missing element degrades to a sentinel or an empty
/// collection, so this never fails and has no side effects.
pub fn extract<D: PageDocument>(doc: &D) -> ExtractedFacts {
    let title = doc
        .query(TITLE_SELECTOR)
        .map(|el| el.text_content().trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| NO_TITLE.to_string());

    let meta_description = doc
        .query(META_DESCRIPTION_SELECTOR)
        .and_then(|el| el.attr("content").map(|content| content.trim().to_string()))
        .filter(|desc| !desc.is_empty())
        .unwrap_or_else(|| NO_META_DESCRIPTION.to_string());

    // A whitespace-only body yields no tokens and therefore a count of 0.
    let word_count = doc.body_text().split_whitespace().count();

    let images = doc.query_all(IMG_SELECTOR);
    let image_count = images.len();
    let images_without_alt = images.iter().filter(|img| img.attr("alt").is_none()).count();

    let headings: Vec<Heading> = doc
        .query_all(HEADING_SELECTOR)
        .iter()
        .filter_map(|el| {
            heading_level(el.tag_name()).map(|level| Heading {
                level,
                text: el.text_content().trim().to_string(),
            })
        })
        .collect();

    let heading_levels: Vec<u8> = (1..=6)
        .filter(|level| headings.iter().any(|h| h.level == *level))
        .collect();
    let missing_levels: Vec<u8> = (1..=6)
        .filter(|level| !heading_levels.contains(level))
        .collect();

    tracing::debug!(
        word_count,
        image_count,
        heading_count = headings.len(),
        "extracted page facts"
    );

    ExtractedFacts {
        title,
        meta_description,
        word_count,
        image_count,
        images_without_alt,
        headings,
        heading_levels,
        missing_levels,
    }
}

/// Numeric level of a heading tag name ("h3" -> 3), `None` for anything else.
fn heading_level(tag: &str) -> Option<u8> {
    tag.to_ascii_lowercase()
        .strip_prefix('h')
        .and_then(|digit| digit.parse::<u8>().ok())
        .filter(|level| (1..=6).contains(level))
}
