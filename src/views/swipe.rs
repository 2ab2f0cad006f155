use std::sync::Arc;

use crate::catalog::model::{Catalog, Garment};

/// Verdict recorded for one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeAction {
    /// Swiped right.
    Like,
    /// Swiped left.
    Pass,
}

/// Card-by-card pass over the catalog in catalog order.
///
/// The cursor never moves past the last card. An action on the last card records the
/// verdict and marks the deck exhausted; after that, further actions are ignored until
/// [`SwipeDeck::reset`].
#[derive(Clone, Debug)]
pub struct SwipeDeck {
    catalog: Arc<Catalog>,
    cursor: usize,
    liked: Vec<String>,
    passed: Vec<String>,
    exhausted: bool,
}

impl SwipeDeck {
    /// Fresh deck positioned on the first card.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let exhausted = catalog.is_empty();
        Self {
            catalog,
            cursor: 0,
            liked: Vec::new(),
            passed: Vec::new(),
            exhausted,
        }
    }

    /// Card under the cursor, `None` once exhausted.
    pub fn current(&self) -> Option<&Garment> {
        if self.exhausted {
            return None;
        }
        self.catalog.garments().get(self.cursor)
    }

    /// Zero-based cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// `(position, total)` with a one-based position, for "N / M" badges.
    pub fn progress(&self) -> (usize, usize) {
        let total = self.catalog.len();
        ((self.cursor + 1).min(total), total)
    }

    /// Every card has received a verdict.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Liked ids in the order they were liked.
    pub fn liked(&self) -> &[String] {
        &self.liked
    }

    /// Passed ids in the order they were passed.
    pub fn passed(&self) -> &[String] {
        &self.passed
    }

    /// Like the current card. Returns its id, or `None` if the deck is exhausted.
    pub fn like(&mut self) -> Option<String> {
        self.act(SwipeAction::Like)
    }

    /// Pass on the current card. Returns its id, or `None` if the deck is exhausted.
    pub fn pass(&mut self) -> Option<String> {
        self.act(SwipeAction::Pass)
    }

    /// Record `action` against the current card and advance.
    pub fn act(&mut self, action: SwipeAction) -> Option<String> {
        let id = self.current()?.id.clone();
        match action {
            SwipeAction::Like => self.liked.push(id.clone()),
            SwipeAction::Pass => self.passed.push(id.clone()),
        }
        if self.cursor + 1 >= self.catalog.len() {
            self.exhausted = true;
        } else {
            self.cursor += 1;
        }
        tracing::trace!(%id, ?action, cursor = self.cursor, exhausted = self.exhausted, "swipe");
        Some(id)
    }

    /// Back to the first card with empty liked/passed lists.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.liked.clear();
        self.passed.clear();
        self.exhausted = self.catalog.is_empty();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/swipe.rs"]
mod tests;
