use crate::catalog::model::{Catalog, Garment};

/// Append-only record of tried-on garment ids, oldest first. Repeats are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TryOnHistory {
    ids: Vec<String>,
}

/// One history row as displayed: most recent first with a descending ordinal badge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistoryEntry<'a> {
    /// `len` for the newest entry, `1` for the oldest.
    pub ordinal: usize,
    /// Garment id.
    pub garment_id: &'a str,
    /// Resolved garment, `None` if the id is not in the catalog.
    pub garment: Option<&'a Garment>,
}

impl TryOnHistory {
    /// Empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a garment id.
    pub fn record(&mut self, garment_id: &str) {
        self.ids.push(garment_id.to_owned());
    }

    /// Ids oldest first.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// `true` when nothing has been tried on yet.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Display rows, newest first.
    pub fn recent_first<'a>(&'a self, catalog: &'a Catalog) -> Vec<HistoryEntry<'a>> {
        let len = self.ids.len();
        self.ids
            .iter()
            .rev()
            .enumerate()
            .map(|(pos, id)| HistoryEntry {
                ordinal: len - pos,
                garment_id: id,
                garment: catalog.by_id(id),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/history.rs"]
mod tests;
