use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static BODY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("body").expect("body selector should be valid"));

/// A single element yielded by a document query.
pub trait PageNode {
    /// Attribute value, `None` when the attribute is absent. An empty
    /// attribute value is `Some("")`, which is distinct from absence.
    fn attr(&self, name: &str) -> Option<&str>;

    /// Lowercased tag name, e.g. `"h2"`.
    fn tag_name(&self) -> &str;

    /// Concatenated text of all descendant text nodes, untrimmed.
    fn text_content(&self) -> String;
}

/// Read-only view over a parsed HTML document.
///
/// The analysis engine only talks to this interface, so it is independent of
/// the HTML parser backing it. Implementations must treat an invalid selector
/// as matching nothing rather than failing.
pub trait PageDocument {
    type Node<'a>: PageNode
    where
        Self: 'a;

    /// First element matching a CSS selector, in document order.
    fn query(&self, selector: &str) -> Option<Self::Node<'_>>;

    /// All elements matching a CSS selector, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node<'_>>;

    /// Full text content of the document body, untrimmed.
    fn body_text(&self) -> String;
}

/// `scraper`-backed document.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parses an HTML string. scraper is error-recovering, so this never
    /// fails; malformed input just yields a sparse tree.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }
}

impl PageDocument for HtmlDocument {
    type Node<'a>
        = ElementRef<'a>
    where
        Self: 'a;

    fn query(&self, selector: &str) -> Option<ElementRef<'_>> {
        let selector = Selector::parse(selector).ok()?;
        self.html.select(&selector).next()
    }

    fn query_all(&self, selector: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(selector) {
            Ok(selector) => self.html.select(&selector).collect(),
            Err(_) => Vec::new(),
        }
    }

    fn body_text(&self) -> String {
        self.html
            .select(&BODY_SELECTOR)
            .next()
            .map(|body| body.text().collect::<String>())
            .unwrap_or_default()
    }
}

impl PageNode for ElementRef<'_> {
    fn attr(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn text_content(&self) -> String {
        self.text().collect::<String>()
    }
}
