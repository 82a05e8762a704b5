//! Headline extraction from RSS 2.0 feeds.

use scraper::{Html, Selector};

use crate::ParseError;

// Direct children only: markup inside a CDATA description is parsed as real
// elements and may contain its own <title>.
const ITEM_TITLE: &str = "item > title";

/// Returns the `<title>` of every `<item>`, in document order.
///
/// Channel-level titles are skipped. CDATA wrappers are removed.
pub fn extract_titles(xml: &str) -> Result<Vec<String>, ParseError> {
    let selector = Selector::parse(ITEM_TITLE).map_err(|_| ParseError::Selector(ITEM_TITLE.into()))?;
    let document = Html::parse_document(xml);

    let titles = document
        .select(&selector)
        .map(|title| strip_cdata(&title.text().collect::<String>()))
        .filter(|title| !title.is_empty())
        .collect();

    Ok(titles)
}

fn strip_cdata(text: &str) -> String {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("<![CDATA[")
        .and_then(|inner| inner.strip_suffix("]]>"))
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
