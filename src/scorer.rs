use crate::models::{
    ExtractedFacts, NO_META_DESCRIPTION, NO_TITLE, RetrievalFacts, RobotsStatus,
};

/// Score every analysis starts from.
pub const MAX_SCORE: i32 = 100;

const MIN_WORDS: usize = 300;
const MAX_HEADINGS: usize = 100;

/// One scoring rule: a guard that either stays silent or yields a tip, and
/// the penalty applied when it fires.
///
/// The rule set is plain data so the table can be inspected and tested
/// independently of the evaluation loop.
pub struct Rule {
    pub penalty: i32,
    pub check: fn(&ExtractedFacts, &RetrievalFacts) -> Option<String>,
}

/// The ordered rule table. Evaluation order is part of the contract: the tips
/// sequence in the report follows it, and the display layer preserves it.
///
/// The three robots rules are mutually exclusive on `robots_status`;
/// `Present` triggers none of them. Every other rule is an independent guard.
pub static RULES: &[Rule] = &[
    Rule { penalty: 10, check: missing_title },
    Rule { penalty: 10, check: missing_meta_description },
    Rule { penalty: 15, check: thin_content },
    Rule { penalty: 10, check: images_missing_alt },
    Rule { penalty: 20, check: insecure_transport },
    Rule { penalty: 5, check: robots_missing },
    Rule { penalty: 0, check: robots_restricted },
    Rule { penalty: 0, check: robots_unavailable },
    Rule { penalty: 10, check: too_many_headings },
    Rule { penalty: 10, check: empty_headings },
    Rule { penalty: 10, check: missing_heading_levels },
];

/// Applies the rule table in order. Returns the final score and the tips in
/// evaluation order. The score is not clamped and can go negative.
pub fn evaluate(page: &ExtractedFacts, retrieval: &RetrievalFacts) -> (i32, Vec<String>) {
    let mut score = MAX_SCORE;
    let mut tips = Vec::new();

    for rule in RULES {
        if let Some(tip) = (rule.check)(page, retrieval) {
            score -= rule.penalty;
            tips.push(tip);
        }
    }

    (score, tips)
}

fn missing_title(page: &ExtractedFacts, _: &RetrievalFacts) -> Option<String> {
    (page.title == NO_TITLE).then(|| "Page has no title.".to_string())
}

fn missing_meta_description(page: &ExtractedFacts, _: &RetrievalFacts) -> Option<String> {
    (page.meta_description == NO_META_DESCRIPTION)
        .then(|| "Page has no meta description.".to_string())
}

fn thin_content(page: &ExtractedFacts, _: &RetrievalFacts) -> Option<String> {
    (page.word_count < MIN_WORDS)
        .then(|| format!("Page content is too thin (under {} words).", MIN_WORDS))
}

fn images_missing_alt(page: &ExtractedFacts, _: &RetrievalFacts) -> Option<String> {
    (page.images_without_alt > 0).then(|| {
        format!(
            "{} image(s) missing the ALT attribute.",
            page.images_without_alt
        )
    })
}

fn insecure_transport(_: &ExtractedFacts, retrieval: &RetrievalFacts) -> Option<String> {
    (!retrieval.is_secure_transport).then(|| "Page does not use HTTPS.".to_string())
}

fn robots_missing(_: &ExtractedFacts, retrieval: &RetrievalFacts) -> Option<String> {
    (retrieval.robots_status == RobotsStatus::Absent)
        .then(|| "robots.txt file is missing.".to_string())
}

fn robots_restricted(_: &ExtractedFacts, retrieval: &RetrievalFacts) -> Option<String> {
    (retrieval.robots_status == RobotsStatus::Restricted)
        .then(|| "robots.txt file is restricted and cannot be accessed publicly.".to_string())
}

fn robots_unavailable(_: &ExtractedFacts, retrieval: &RetrievalFacts) -> Option<String> {
    (retrieval.robots_status == RobotsStatus::Unavailable)
        .then(|| "robots.txt file could not be accessed.".to_string())
}

fn too_many_headings(page: &ExtractedFacts, _: &RetrievalFacts) -> Option<String> {
    (page.headings.len() > MAX_HEADINGS).then(|| {
        format!(
            "Page has too many headings; keep it under {}.",
            MAX_HEADINGS
        )
    })
}

fn empty_headings(page: &ExtractedFacts, _: &RetrievalFacts) -> Option<String> {
    let count = page.empty_heading_count();
    (count > 0).then(|| format!("{} heading(s) are empty.", count))
}

fn missing_heading_levels(page: &ExtractedFacts, _: &RetrievalFacts) -> Option<String> {
    if page.missing_levels.is_empty() {
        return None;
    }
    let levels: Vec<String> = page
        .missing_levels
        .iter()
        .map(|level| format!("H{}", level))
        .collect();
    Some(format!("Missing heading levels: {}.", levels.join(", ")))
}
