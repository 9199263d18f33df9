use serde::Deserialize;

use crate::product::Product;

/// Page number used when the parameter is absent or unusable.
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when the parameter is absent or unusable.
pub const DEFAULT_LIMIT: usize = 10;

/// Filter, search, and pagination parameters for a product listing.
///
/// Every parameter is optional and independent. `page` and `limit` are kept
/// as raw strings on purpose: a malformed number degrades to the default
/// instead of failing the request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ProductQuery {
    /// Derive the filtered, searched, paginated view of a snapshot.
    ///
    /// Stages run in a fixed order: exact category match, then
    /// case-insensitive name substring search, then pagination over whatever
    /// remains. Relative (insertion) order is preserved throughout, and a
    /// page reaching past the end is clipped rather than rejected.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut matches: Vec<&Product> = products.iter().collect();

        if let Some(category) = self.category.as_deref() {
            matches.retain(|p| p.category == category);
        }

        if let Some(search) = self.search.as_deref() {
            let needle = search.to_lowercase();
            matches.retain(|p| p.name.to_lowercase().contains(&needle));
        }

        let page = parse_positive(self.page.as_deref()).unwrap_or(DEFAULT_PAGE);
        let limit = parse_positive(self.limit.as_deref()).unwrap_or(DEFAULT_LIMIT);

        let start = (page - 1).saturating_mul(limit).min(matches.len());
        let end = start.saturating_add(limit).min(matches.len());

        matches[start..end].iter().map(|p| (*p).clone()).collect()
    }
}

/// Parse a strictly positive integer; anything else yields `None`.
fn parse_positive(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|s| s.parse::<usize>().ok()).filter(|n| *n > 0)
}
