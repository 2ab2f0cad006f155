use std::cmp::Ordering;

use crate::catalog::model::{Catalog, Category, Garment};
use crate::foundation::error::DrapeError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Closet sort order (always ascending).
pub enum SortKey {
    /// By display name.
    #[default]
    Name,
    /// By price, numerically.
    Price,
    /// By brand.
    Brand,
}

impl std::str::FromStr for SortKey {
    type Err = DrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "price" => Ok(SortKey::Price),
            "brand" => Ok(SortKey::Brand),
            _ => Err(DrapeError::validation(format!("unknown sort key \"{s}\""))),
        }
    }
}

/// Closet filters. An empty search and `None` filters match everything.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ClosetQuery {
    /// Case-insensitive substring matched against name or brand.
    pub search: String,
    /// Exact category.
    pub category: Option<Category>,
    /// Exact brand.
    pub brand: Option<String>,
    /// Sort order.
    pub sort: SortKey,
}

impl ClosetQuery {
    /// `true` when `garment` satisfies every active predicate.
    pub fn matches(&self, garment: &Garment) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || garment.name.to_lowercase().contains(&needle)
            || garment.brand.to_lowercase().contains(&needle);
        let matches_category = self.category.is_none_or(|c| garment.category == c);
        let matches_brand = self.brand.as_deref().is_none_or(|b| garment.brand == b);
        matches_search && matches_category && matches_brand
    }

    /// Filter then stable-sort the catalog.
    pub fn apply<'c>(&self, catalog: &'c Catalog) -> ClosetView<'c> {
        let mut items: Vec<&Garment> = catalog
            .garments()
            .iter()
            .filter(|g| self.matches(g))
            .collect();
        sort_garments(&mut items, self.sort);
        ClosetView {
            items,
            total: catalog.len(),
        }
    }
}

/// Stable ascending sort by `key`.
pub fn sort_garments(items: &mut [&Garment], key: SortKey) {
    items.sort_by(|a, b| match key {
        SortKey::Name => locale_cmp(&a.name, &b.name),
        SortKey::Price => a.price.total_cmp(&b.price),
        SortKey::Brand => locale_cmp(&a.brand, &b.brand),
    });
}

/// Case-insensitive ordering with a byte-order tie break, so the order stays total.
fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Result of a closet query.
#[derive(Clone, Debug)]
pub struct ClosetView<'c> {
    /// Matching garments in sort order.
    pub items: Vec<&'c Garment>,
    /// Catalog size before filtering.
    pub total: usize,
}

impl ClosetView<'_> {
    /// "Showing N of M garments".
    pub fn summary(&self) -> String {
        format!("Showing {} of {} garments", self.items.len(), self.total)
    }

    /// `true` when nothing matched; a normal display state.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/closet.rs"]
mod tests;
