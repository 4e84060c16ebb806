//! Gallery state for a catalog mount: one card per product record, with
//! hidden flags the search filter flips and a cursor over the visible
//! cards.

use crate::catalog::{record_matches, Store};

/// A rendered card, bound to its record by id. Hidden cards stay in the
/// gallery but leave the layout, so filtering stays cheap and reversible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub record_id: u32,
    pub hidden: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Gallery {
    cards: Vec<Card>,
    /// Cursor position among the visible cards.
    selected: usize,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from the store: drop every card and lay one down per
    /// record, in store order. Calling it twice gives the same result.
    pub fn rebuild(&mut self, store: &Store) {
        self.cards = store
            .products()
            .iter()
            .map(|record| Card {
                record_id: record.id,
                hidden: false,
            })
            .collect();
        self.selected = 0;
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Ids of the cards still in the layout, in store order.
    pub fn visible_ids(&self) -> Vec<u32> {
        self.cards
            .iter()
            .filter(|card| !card.hidden)
            .map(|card| card.record_id)
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.cards.iter().filter(|card| !card.hidden).count()
    }

    pub fn selected_pos(&self) -> usize {
        self.selected
    }

    /// Record id under the cursor, if any card is visible.
    pub fn selected_id(&self) -> Option<u32> {
        self.visible_ids().get(self.selected).copied()
    }

    /// Put the cursor on a visible position, e.g. after a mouse click.
    pub fn select_pos(&mut self, pos: usize) {
        if pos < self.visible_count() {
            self.selected = pos;
        }
    }

    pub fn select_next(&mut self) {
        let count = self.visible_count();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_previous(&mut self) {
        let count = self.visible_count();
        if count > 0 {
            if self.selected > 0 {
                self.selected -= 1;
            } else {
                self.selected = count - 1;
            }
        }
    }

    /// Move the cursor one grid row down; clamps at the last card.
    pub fn select_row_down(&mut self, columns: usize) {
        let count = self.visible_count();
        if count > 0 && columns > 0 {
            self.selected = (self.selected + columns).min(count - 1);
        }
    }

    /// Move the cursor one grid row up; clamps at the first card.
    pub fn select_row_up(&mut self, columns: usize) {
        self.selected = self.selected.saturating_sub(columns);
    }

    /// Re-run the filter over every card. Hidden flags are flipped in
    /// place; the store and the card order never change. Cards whose
    /// record is gone keep their current state. The cursor is pulled back
    /// onto a visible card when its own card disappears.
    pub fn apply_filter(&mut self, store: &Store, normalized_query: &str) {
        for card in &mut self.cards {
            if let Some(record) = store.product_by_id(card.record_id) {
                card.hidden = !record_matches(record, normalized_query);
            }
        }
        let count = self.visible_count();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }
}
