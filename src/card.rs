use serde::{Serialize, Serializer};

/// Numeric card identifier.
///
/// Uses [`u16`] as deck identifiers store every card as a two-byte
/// record; wider values are unrepresentable, which keeps encoding total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Id(u16);

impl Id {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }
}

/// Physical game components a card needs beyond its own pile.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Component {
    CoinTokens,
    VictoryTokens,
    TavernMat,
    TradeRouteMat,
    NativeVillageMat,
    Spoils,
    Ruins,
    MinusOneCardToken,
    MinusOneCoinToken,
    JourneyToken,
}

impl Component {
    pub fn iter() -> impl Iterator<Item = Self> {
        [
            Self::CoinTokens,
            Self::VictoryTokens,
            Self::TavernMat,
            Self::TradeRouteMat,
            Self::NativeVillageMat,
            Self::Spoils,
            Self::Ruins,
            Self::MinusOneCardToken,
            Self::MinusOneCoinToken,
            Self::JourneyToken,
        ]
        .into_iter()
    }
}

/// Set of [`Component`] requirements, stored as a bitmask.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Components(u16);

impl Components {
    pub const NONE: Self = Self(0);

    #[must_use]
    pub const fn with(self, component: Component) -> Self {
        Self(self.0 | 1 << component as u16)
    }

    #[must_use]
    pub const fn has(self, component: Component) -> bool {
        (self.0 >> component as u16) & 1 == 1
    }
}

impl Serialize for Components {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(Component::iter().filter(|component| self.has(*component)))
    }
}

/// Card data as held by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: Id,
    pub name: &'static str,
    /// Cost in coins.
    pub cost: u8,
    /// Cost in potions.
    pub cost_potions: u8,
    /// Whether this card belongs to the event group rather than the
    /// kingdom supply.
    pub event: bool,
    pub components: Components,
}

impl Card {
    #[must_use]
    pub fn with_component(mut self, component: Component) -> Self {
        self.components = self.components.with(component);
        self
    }

    #[must_use]
    pub fn with_potion_cost(mut self, potions: u8) -> Self {
        self.cost_potions = potions;
        self
    }
}

pub mod test_util {
    use super::{Card, Components, Id};

    #[must_use]
    pub fn make_card(id: u16) -> Card {
        Card {
            id: Id::new(id),
            name: "",
            cost: 0,
            cost_potions: 0,
            event: false,
            components: Components::NONE,
        }
    }

    #[must_use]
    pub fn make_event(id: u16) -> Card {
        Card {
            event: true,
            ..make_card(id)
        }
    }
}
