use std::collections::BTreeSet;

use crate::catalog::model::{Catalog, Category, Colorway, Garment};

impl Catalog {
    /// Garments whose category equals `category`, in catalog order.
    pub fn by_category(&self, category: Category) -> Vec<&Garment> {
        self.garments()
            .iter()
            .filter(|g| g.category == category)
            .collect()
    }

    /// First garment with the given id.
    pub fn by_id(&self, id: &str) -> Option<&Garment> {
        self.garments().iter().find(|g| g.id == id)
    }

    /// Unique brand names, sorted.
    pub fn brands(&self) -> Vec<&str> {
        self.garments()
            .iter()
            .map(|g| g.brand.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Resolve a colorway id to its owning garment.
    pub fn find_colorway(&self, colorway_id: &str) -> Option<(&Garment, &Colorway)> {
        self.garments()
            .iter()
            .find_map(|g| g.colorway(colorway_id).map(|c| (g, c)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/query.rs"]
mod tests;
