use crate::document::PageDocument;
use crate::extractor;
use crate::models::{Report, RetrievalFacts};
use crate::scorer;

/// Runs the full analysis over a parsed document plus retrieval facts.
///
/// Extraction, scoring, and report assembly are all pure, so identical inputs
/// always produce an identical `Report`.
pub fn analyze<D: PageDocument>(doc: &D, retrieval: RetrievalFacts) -> Report {
    let page = extractor::extract(doc);
    let (score, tips) = scorer::evaluate(&page, &retrieval);

    Report {
        page,
        retrieval,
        score,
        tips,
    }
}
