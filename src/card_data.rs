use std::{ops::Index, sync::LazyLock};

use rustc_hash::FxHashMap;

use crate::{
    card::{Card, Id},
    card_list,
};

/// Lookup table for card data, keyed by [`Id`].
#[derive(Debug, Clone, Default)]
pub struct CardData {
    entries: FxHashMap<Id, Card>,
}

impl CardData {
    /// Build a lookup table from a list of cards.
    ///
    /// Panics if two cards share an id.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        let mut entries = FxHashMap::default();

        for card in cards {
            let id = card.id;
            assert!(
                entries.insert(id, card).is_none(),
                "duplicate card id {}",
                id.get()
            );
        }

        Self { entries }
    }

    #[must_use]
    pub fn get(&self, id: Id) -> Option<&Card> {
        self.entries.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: Id) -> bool {
        self.entries.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &FxHashMap<Id, Card> {
        &self.entries
    }
}

impl Index<Id> for CardData {
    type Output = Card;

    fn index(&self, index: Id) -> &Self::Output {
        &self.entries[&index]
    }
}

/// The process-wide card registry.
///
/// Built once on first use and read-only afterwards, so lookups can be
/// shared freely across threads.
pub fn catalog() -> &'static CardData {
    static CATALOG: LazyLock<CardData> = LazyLock::new(|| CardData::new(card_list::all()));

    &CATALOG
}
