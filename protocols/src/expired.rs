//! Expired-domain listing pages (expireddomains.net layout).
//!
//! Domains are the titled links inside the `table.base1` results table.

use scraper::{Html, Selector};

use crate::ParseError;

const TABLE: &str = "table.base1";
const DOMAIN_LINK: &str = "a[title]";

pub fn extract_domains(html: &str) -> Result<Vec<String>, ParseError> {
    let table_selector = selector(TABLE)?;
    let link_selector = selector(DOMAIN_LINK)?;
    let document = Html::parse_document(html);

    let table = document
        .select(&table_selector)
        .next()
        .ok_or(ParseError::MissingElement(TABLE))?;

    let domains = table
        .select(&link_selector)
        .map(|link| link.text().collect::<String>().trim().to_string())
        .filter(|text| text.contains('.'))
        .collect();

    Ok(domains)
}

fn selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|_| ParseError::Selector(css.to_string()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
