use crate::catalog::model::{Catalog, Garment};

/// Deduplicated garment ids in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Wishlist {
    ids: Vec<String>,
}

impl Wishlist {
    /// Empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id`; returns `false` if it was already present.
    pub fn add(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id.to_owned());
        true
    }

    /// Remove `id`; returns `false` if it was absent.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|x| x != id);
        self.ids.len() != before
    }

    /// Add when absent, remove when present. Returns membership after the call.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.remove(id) {
            false
        } else {
            self.add(id)
        }
    }

    /// Membership test.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|x| x == id)
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Number of ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// `true` when empty; the empty wishlist is a normal display state.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Wishlisted garments in catalog order; unknown ids are skipped.
    pub fn garments<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Garment> {
        catalog
            .garments()
            .iter()
            .filter(|g| self.contains(&g.id))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/wishlist.rs"]
mod tests;
