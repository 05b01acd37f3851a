//! Round-robin routing of dealt cards across the live piles.
//!
//! [`DealOrder`] tracks pile ids only; the engine owns the piles themselves.
//! Removing a pile keeps the rotation fair: no pile is skipped and none is
//! served out of turn.

use serde::{Deserialize, Serialize};

use crate::pile::PileId;

/// Circular cursor over an ordered list of pile ids.
///
/// # Examples
///
/// ```
/// use nines_engine::deal_order::DealOrder;
/// use nines_engine::pile::PileId;
///
/// let mut order = DealOrder::new();
/// order.reset([PileId(1), PileId(2), PileId(3)]);
/// assert_eq!(order.next(), Some(PileId(1)));
/// assert_eq!(order.next(), Some(PileId(2)));
///
/// // The pile about to be served goes away: the next one takes its turn.
/// order.remove(PileId(3));
/// assert_eq!(order.next(), Some(PileId(1)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealOrder {
    ids: Vec<PileId>,
    cursor: usize,
}

impl DealOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the tracked ids and rewinds the cursor.
    pub fn reset<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = PileId>,
    {
        self.ids = ids.into_iter().collect();
        self.cursor = 0;
    }

    /// Returns the pile at the cursor and advances the cursor, wrapping at the end.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<PileId> {
        let id = *self.ids.get(self.cursor)?;
        self.cursor += 1;
        if self.cursor >= self.ids.len() {
            self.cursor = 0;
        }
        Some(id)
    }

    /// The pile the next call to [`DealOrder::next`] will return.
    pub fn peek(&self) -> Option<PileId> {
        self.ids.get(self.cursor).copied()
    }

    /// Stops tracking `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: PileId) {
        let Some(pos) = self.ids.iter().position(|&p| p == id) else {
            return;
        };
        self.ids.remove(pos);
        if pos < self.cursor {
            // later ids shifted down by one; keep pointing at the same pile
            self.cursor -= 1;
        } else if self.cursor >= self.ids.len() {
            self.cursor = 0;
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        if self.ids.is_empty() {
            None
        } else {
            Some(self.cursor)
        }
    }

    pub fn ids(&self) -> &[PileId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
