use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel used when a page has no usable `<title>` element.
pub const NO_TITLE: &str = "No title found";

/// Sentinel used when a page has no usable meta description.
pub const NO_META_DESCRIPTION: &str = "No meta description found";

/// Outcome of the robots.txt reachability probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RobotsStatus {
    /// The probe succeeded; the file is publicly reachable.
    Present,
    /// The server answered 404; no robots.txt exists.
    Absent,
    /// The server answered 403; the file exists but is not public.
    Restricted,
    /// Any other status or a transport failure.
    Unavailable,
}

impl fmt::Display for RobotsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RobotsStatus::Present => "Present",
            RobotsStatus::Absent => "Absent",
            RobotsStatus::Restricted => "Restricted",
            RobotsStatus::Unavailable => "Unavailable",
        };
        write!(f, "{}", label)
    }
}

/// Facts derived during retrieval, before any parsing happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievalFacts {
    /// Whether the target URL uses the https scheme.
    pub is_secure_transport: bool,
    pub robots_status: RobotsStatus,
}

/// A single H1-H6 element, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level, 1 through 6.
    pub level: u8,
    /// Trimmed text content; empty string for headings with no visible text.
    pub text: String,
}

/// Everything the extraction stage projects out of a parsed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFacts {
    pub title: String,
    pub meta_description: String,
    pub word_count: usize,
    pub image_count: usize,
    /// Images whose `alt` attribute is absent. An empty `alt=""` is an
    /// intentional accessibility signal and does not count.
    pub images_without_alt: usize,
    pub headings: Vec<Heading>,
    /// Distinct heading levels present, ascending.
    pub heading_levels: Vec<u8>,
    /// Levels 1..=6 with no heading on the page, ascending.
    pub missing_levels: Vec<u8>,
}

impl ExtractedFacts {
    /// Headings whose trimmed text is empty.
    pub fn empty_heading_count(&self) -> usize {
        self.headings.iter().filter(|h| h.text.is_empty()).count()
    }
}

/// The immutable result of one analysis run.
///
/// The score starts at 100 and each triggered rule subtracts a fixed penalty
/// exactly once. No lower bound is enforced, so it can go negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub page: ExtractedFacts,
    pub retrieval: RetrievalFacts,
    pub score: i32,
    /// Remediation tips in rule-evaluation order.
    pub tips: Vec<String>,
}
