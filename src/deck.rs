use serde::Serialize;
use thiserror::Error;

use crate::{
    card::{Card, Component, Id},
    card_data,
};

const COLONIES_AND_PLATINUMS_MASK: u8 = 1 << 0;
const SHELTERS_MASK: u8 = 1 << 1;

/// Minimum byte length of a deck identifier: the flag byte plus ten card
/// records. Shorter inputs are not legal deck identifiers.
pub const MIN_ID_LEN: usize = 21;

/// Possible errors when decoding a deck identifier.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("id has invalid length {0} (expected an odd length of at least 21)")]
    InvalidLength(usize),
    #[error("unrecognized card id {0}")]
    UnknownCard(u16),
}

/// A Dominion deck composition.
///
/// `cards` holds the kingdom piles and `events` the event cards, each in
/// a significant order; the two flags select the Colony/Platinum and
/// Shelter supply variants.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Deck {
    pub cards: Vec<Card>,
    pub events: Vec<Card>,
    pub colonies_and_platinums: bool,
    pub shelters: bool,
}

impl Deck {
    /// Reconstruct a deck from an identifier produced by [`Deck::to_id`].
    ///
    /// Every card record is resolved against the registry; a card's group
    /// comes from its registry metadata, not from its position in the
    /// input. Decoding is all-or-nothing.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLength`] if the input is shorter than
    /// [`MIN_ID_LEN`] bytes or has an even byte count.
    /// [`Error::UnknownCard`] if a record does not resolve.
    pub fn from_id(id: &[u8]) -> Result<Self, Error> {
        if id.len() < MIN_ID_LEN || id.len() % 2 == 0 {
            return Err(Error::InvalidLength(id.len()));
        }

        let mut deck = Self {
            colonies_and_platinums: id[0] & COLONIES_AND_PLATINUMS_MASK != 0,
            shelters: id[0] & SHELTERS_MASK != 0,
            ..Self::default()
        };

        for record in id[1..].chunks_exact(2) {
            let number = u16::from_le_bytes([record[0], record[1]]);
            let card = card_data::catalog()
                .get(Id::new(number))
                .ok_or(Error::UnknownCard(number))?;

            if card.event {
                deck.events.push(card.clone());
            } else {
                deck.cards.push(card.clone());
            }
        }

        Ok(deck)
    }

    /// Serialize the deck into its identifier bytes.
    ///
    /// One flag byte, then one little-endian record per card in `cards`,
    /// then one per card in `events`, preserving order within each group.
    #[must_use]
    pub fn to_id(&self) -> Vec<u8> {
        let mut id = Vec::with_capacity(1 + 2 * (self.cards.len() + self.events.len()));

        let mut flags = 0;
        if self.colonies_and_platinums {
            flags |= COLONIES_AND_PLATINUMS_MASK;
        }
        if self.shelters {
            flags |= SHELTERS_MASK;
        }
        id.push(flags);

        for card in self.cards.iter().chain(&self.events) {
            id.extend_from_slice(&card.id.get().to_le_bytes());
        }

        id
    }

    /// Whether the deck needs potions.
    #[must_use]
    pub fn potions(&self) -> bool {
        self.cards.iter().any(|card| card.cost_potions > 0)
    }

    /// Whether the deck needs coin tokens.
    #[must_use]
    pub fn coin_tokens(&self) -> bool {
        self.requires(Component::CoinTokens)
    }

    /// Whether the deck needs victory tokens.
    #[must_use]
    pub fn victory_tokens(&self) -> bool {
        self.requires(Component::VictoryTokens)
    }

    /// Whether the deck needs tavern mats.
    #[must_use]
    pub fn tavern_mats(&self) -> bool {
        self.requires(Component::TavernMat)
    }

    /// Whether the deck needs the trade route mat.
    #[must_use]
    pub fn trade_route_mats(&self) -> bool {
        self.requires(Component::TradeRouteMat)
    }

    /// Whether the deck needs native village mats.
    #[must_use]
    pub fn native_village_mats(&self) -> bool {
        self.requires(Component::NativeVillageMat)
    }

    /// Whether the deck needs the spoils pile.
    #[must_use]
    pub fn spoils(&self) -> bool {
        self.requires(Component::Spoils)
    }

    /// Whether the deck needs the ruins pile.
    #[must_use]
    pub fn ruins(&self) -> bool {
        self.requires(Component::Ruins)
    }

    /// Whether the deck needs −1 card tokens.
    #[must_use]
    pub fn minus_one_card_tokens(&self) -> bool {
        self.requires(Component::MinusOneCardToken)
    }

    /// Whether the deck needs −1 coin tokens.
    #[must_use]
    pub fn minus_one_coin_tokens(&self) -> bool {
        self.requires(Component::MinusOneCoinToken)
    }

    /// Whether the deck needs journey tokens.
    #[must_use]
    pub fn journey_tokens(&self) -> bool {
        self.requires(Component::JourneyToken)
    }

    /// Event cards never contribute component requirements.
    fn requires(&self, component: Component) -> bool {
        self.cards.iter().any(|card| card.components.has(component))
    }
}

#[cfg(test)]
mod test {
    use itertools::iproduct;

    use crate::{
        card::test_util::{make_card, make_event},
        card_data::catalog,
    };

    use super::*;

    // Catalog ids used by the decoding cases. Id 7 is Workshop.
    const KINGDOM_IDS: [u16; 6] = [1, 7, 24, 42, 47, 74];
    const EVENT_IDS: [u16; 3] = [77, 78, 88];

    type Predicate = fn(&Deck) -> bool;

    const COMPONENT_PREDICATES: [(Component, Predicate); 10] = [
        (Component::CoinTokens, Deck::coin_tokens),
        (Component::VictoryTokens, Deck::victory_tokens),
        (Component::TavernMat, Deck::tavern_mats),
        (Component::TradeRouteMat, Deck::trade_route_mats),
        (Component::NativeVillageMat, Deck::native_village_mats),
        (Component::Spoils, Deck::spoils),
        (Component::Ruins, Deck::ruins),
        (Component::MinusOneCardToken, Deck::minus_one_card_tokens),
        (Component::MinusOneCoinToken, Deck::minus_one_coin_tokens),
        (Component::JourneyToken, Deck::journey_tokens),
    ];

    fn resolve(id: u16) -> Card {
        catalog()[Id::new(id)].clone()
    }

    fn raw_id(flags: u8, numbers: &[u16]) -> Vec<u8> {
        let mut id = vec![flags];
        for number in numbers {
            id.extend_from_slice(&number.to_le_bytes());
        }
        id
    }

    fn sample_deck(
        kingdom: usize,
        events: usize,
        colonies_and_platinums: bool,
        shelters: bool,
    ) -> Deck {
        let mut deck = Deck {
            colonies_and_platinums,
            shelters,
            ..Deck::default()
        };

        let mut numbers = KINGDOM_IDS.iter().copied().cycle();
        for _ in 0..kingdom {
            deck.cards.push(resolve(numbers.next().unwrap()));
        }

        let mut numbers = EVENT_IDS.iter().copied().cycle();
        for _ in 0..events {
            deck.events.push(resolve(numbers.next().unwrap()));
        }

        deck
    }

    #[test]
    fn round_trip() {
        for (kingdom, events, colonies_and_platinums, shelters) in
            iproduct!([10, 11, 13], 0..=3, [false, true], [false, true])
        {
            let deck = sample_deck(kingdom, events, colonies_and_platinums, shelters);
            let id = deck.to_id();

            assert_eq!(id.len(), 1 + 2 * (kingdom + events));
            assert_eq!(Deck::from_id(&id).unwrap(), deck);
        }
    }

    #[test]
    fn ten_identical_records() {
        let id = raw_id(0x00, &[7; 10]);
        let deck = Deck::from_id(&id).unwrap();

        assert_eq!(deck.cards.len(), 10);
        assert!(deck.cards.iter().all(|card| card.name == "Workshop"));
        assert_eq!(deck.events, Vec::new());
        assert!(!deck.colonies_and_platinums);
        assert!(!deck.shelters);

        assert_eq!(deck.to_id(), id);
    }

    #[test]
    fn rejects_short_input() {
        for len in [0, 1, 5, 19, 20] {
            assert_eq!(Deck::from_id(&vec![0; len]), Err(Error::InvalidLength(len)));
        }
    }

    #[test]
    fn rejects_even_length() {
        for len in [22, 24, 100] {
            assert_eq!(Deck::from_id(&vec![0; len]), Err(Error::InvalidLength(len)));
        }
    }

    #[test]
    fn rejects_unknown_card() {
        let mut numbers = [7; 10];
        numbers[4] = 0xFFFF;

        assert_eq!(
            Deck::from_id(&raw_id(0, &numbers)),
            Err(Error::UnknownCard(0xFFFF))
        );
    }

    #[test]
    fn flag_bits() {
        for (flags, colonies_and_platinums, shelters) in [
            (0b0000_0000, false, false),
            (0b0000_0001, true, false),
            (0b0000_0010, false, true),
            (0b0000_0011, true, true),
            (0b1000_0000, false, false),
            (0b1111_1100, false, false),
        ] {
            let deck = Deck::from_id(&raw_id(flags, &[7; 10])).unwrap();

            assert_eq!(
                deck.colonies_and_platinums, colonies_and_platinums,
                "flags = {flags:#010b}"
            );
            assert_eq!(deck.shelters, shelters, "flags = {flags:#010b}");
        }
    }

    #[test]
    fn reserved_flag_bits_are_not_round_tripped() {
        let deck = Deck::from_id(&raw_id(0b1000_0001, &[7; 10])).unwrap();

        assert_eq!(deck.to_id()[0], 0b0000_0001);
    }

    #[test]
    fn groups_follow_registry_metadata() {
        // Event records first; grouping comes from card data, not position.
        let numbers = [78, 77, 7, 7, 1, 24, 7, 1, 1, 7];
        let deck = Deck::from_id(&raw_id(0, &numbers)).unwrap();

        assert_eq!(deck.cards.len(), 8);
        assert_eq!(deck.events.len(), 2);
        assert_eq!(deck.events[0].name, "Borrow");
        assert_eq!(deck.events[1].name, "Alms");

        // Re-encoding is canonical: cards first, then events.
        let canonical: Vec<u16> = deck
            .cards
            .iter()
            .chain(&deck.events)
            .map(|card| card.id.get())
            .collect();
        assert_eq!(deck.to_id(), raw_id(0, &canonical));
    }

    #[test]
    fn zero_event_decks_compare_equal() {
        let lhs = Deck::from_id(&raw_id(0, &[7; 10])).unwrap();
        let rhs = Deck::from_id(&raw_id(0, &[1; 10])).unwrap();

        assert!(lhs.events.is_empty());
        assert_eq!(lhs.events, rhs.events);
    }

    #[test]
    fn potion_predicate() {
        let deck = Deck {
            cards: vec![make_card(1000).with_potion_cost(2)],
            ..Deck::default()
        };

        assert!(deck.potions());
        for (component, predicate) in COMPONENT_PREDICATES {
            assert!(!predicate(&deck), "{component:?}");
        }
    }

    #[test]
    fn component_predicates() {
        for (component, _) in COMPONENT_PREDICATES {
            let deck = Deck {
                cards: vec![make_card(1000).with_component(component)],
                ..Deck::default()
            };

            assert!(!deck.potions(), "{component:?}");
            for (other, predicate) in COMPONENT_PREDICATES {
                assert_eq!(
                    predicate(&deck),
                    other == component,
                    "{component:?} vs {other:?}"
                );
            }
        }
    }

    #[test]
    fn predicates_ignore_events() {
        let deck = Deck {
            events: vec![
                make_event(1000).with_potion_cost(2),
                make_event(1001).with_component(Component::MinusOneCardToken),
                make_event(1002).with_component(Component::JourneyToken),
            ],
            ..Deck::default()
        };

        assert!(!deck.potions());
        for (component, predicate) in COMPONENT_PREDICATES {
            assert!(!predicate(&deck), "{component:?}");
        }
    }

    #[test]
    fn serialize_to_json() {
        let deck = Deck {
            cards: vec![resolve(47)],
            events: vec![resolve(78)],
            colonies_and_platinums: true,
            shelters: false,
        };

        assert_eq!(
            serde_json::to_value(&deck).unwrap(),
            serde_json::json!({
                "cards": [{
                    "id": 47,
                    "name": "Bishop",
                    "cost": 4,
                    "cost_potions": 0,
                    "event": false,
                    "components": ["VictoryTokens"],
                }],
                "events": [{
                    "id": 78,
                    "name": "Borrow",
                    "cost": 0,
                    "cost_potions": 0,
                    "event": true,
                    "components": ["MinusOneCardToken"],
                }],
                "colonies_and_platinums": true,
                "shelters": false,
            })
        );
    }
}
