//! The embedded card registry data.
//!
//! Deck identifiers store these ids verbatim, so entries must never be
//! renumbered.

use crate::card::{Card, Component, Components, Id};

fn card(id: u16, name: &'static str, cost: u8) -> Card {
    Card {
        id: Id::new(id),
        name,
        cost,
        cost_potions: 0,
        event: false,
        components: Components::NONE,
    }
}

fn event(id: u16, name: &'static str, cost: u8) -> Card {
    Card {
        event: true,
        ..card(id, name, cost)
    }
}

pub(crate) fn all() -> Vec<Card> {
    vec![
        // Base
        card(1, "Cellar", 2),
        card(2, "Chapel", 2),
        card(3, "Moat", 2),
        card(4, "Chancellor", 3),
        card(5, "Village", 3),
        card(6, "Woodcutter", 3),
        card(7, "Workshop", 3),
        card(8, "Bureaucrat", 4),
        card(9, "Feast", 4),
        card(10, "Gardens", 4),
        card(11, "Militia", 4),
        card(12, "Moneylender", 4),
        card(13, "Remodel", 4),
        card(14, "Smithy", 4),
        card(15, "Spy", 4),
        card(16, "Thief", 4),
        card(17, "Throne Room", 4),
        card(18, "Council Room", 5),
        card(19, "Festival", 5),
        card(20, "Laboratory", 5),
        card(21, "Library", 5),
        card(22, "Market", 5),
        card(23, "Mine", 5),
        card(24, "Witch", 5),
        card(25, "Adventurer", 6),
        // Seaside
        card(26, "Embargo", 2).with_component(Component::CoinTokens),
        card(27, "Native Village", 3).with_component(Component::NativeVillageMat),
        card(28, "Fishing Village", 3),
        card(29, "Lighthouse", 2),
        card(30, "Warehouse", 3),
        card(31, "Salvager", 4),
        card(32, "Pirate Ship", 4).with_component(Component::CoinTokens),
        card(33, "Treasure Map", 4),
        card(34, "Wharf", 5),
        card(35, "Tactician", 5),
        // Alchemy
        card(36, "Transmute", 0).with_potion_cost(1),
        card(37, "Vineyard", 0).with_potion_cost(1),
        card(38, "Apothecary", 2).with_potion_cost(1),
        card(39, "Scrying Pool", 2).with_potion_cost(1),
        card(40, "University", 2).with_potion_cost(1),
        card(41, "Alchemist", 3).with_potion_cost(1),
        card(42, "Familiar", 3).with_potion_cost(1),
        card(43, "Golem", 4).with_potion_cost(1),
        card(44, "Apprentice", 5),
        card(45, "Possession", 6).with_potion_cost(1),
        // Prosperity
        card(46, "Trade Route", 3)
            .with_component(Component::TradeRouteMat)
            .with_component(Component::CoinTokens),
        card(47, "Bishop", 4).with_component(Component::VictoryTokens),
        card(48, "Monument", 4).with_component(Component::VictoryTokens),
        card(49, "Worker's Village", 4),
        card(50, "City", 5),
        card(51, "Goons", 6).with_component(Component::VictoryTokens),
        card(52, "Bank", 7),
        card(53, "King's Court", 7),
        // Dark Ages
        card(54, "Death Cart", 4).with_component(Component::Ruins),
        card(55, "Marauder", 4)
            .with_component(Component::Ruins)
            .with_component(Component::Spoils),
        card(56, "Cultist", 5).with_component(Component::Ruins),
        card(57, "Bandit Camp", 5).with_component(Component::Spoils),
        card(58, "Pillage", 5).with_component(Component::Spoils),
        card(59, "Counterfeit", 5),
        // Guilds
        card(60, "Candlestick Maker", 2).with_component(Component::CoinTokens),
        card(61, "Plaza", 4).with_component(Component::CoinTokens),
        card(62, "Baker", 5).with_component(Component::CoinTokens),
        card(63, "Butcher", 5).with_component(Component::CoinTokens),
        card(64, "Merchant Guild", 5).with_component(Component::CoinTokens),
        // Adventures
        card(65, "Ratcatcher", 2).with_component(Component::TavernMat),
        card(66, "Raze", 2),
        card(67, "Guide", 3).with_component(Component::TavernMat),
        card(68, "Duplicate", 4).with_component(Component::TavernMat),
        card(69, "Miser", 4).with_component(Component::TavernMat),
        card(70, "Ranger", 4).with_component(Component::JourneyToken),
        card(71, "Bridge Troll", 5).with_component(Component::MinusOneCoinToken),
        card(72, "Distant Lands", 5).with_component(Component::TavernMat),
        card(73, "Giant", 5).with_component(Component::JourneyToken),
        card(74, "Relic", 5).with_component(Component::MinusOneCardToken),
        card(75, "Royal Carriage", 5).with_component(Component::TavernMat),
        card(76, "Wine Merchant", 5).with_component(Component::TavernMat),
        // Adventures events
        event(77, "Alms", 0),
        event(78, "Borrow", 0).with_component(Component::MinusOneCardToken),
        event(79, "Quest", 0),
        event(80, "Save", 1),
        event(81, "Scouting Party", 2),
        event(82, "Travelling Fair", 2),
        event(83, "Bonfire", 3),
        event(84, "Expedition", 3),
        event(85, "Ferry", 3),
        event(86, "Plan", 3),
        event(87, "Mission", 4),
        event(88, "Pilgrimage", 4).with_component(Component::JourneyToken),
        event(89, "Ball", 5),
        event(90, "Raid", 5),
        event(91, "Seaway", 5),
        event(92, "Trade", 5),
        event(93, "Lost Arts", 6),
        event(94, "Training", 6),
        event(95, "Inheritance", 7),
        event(96, "Pathfinding", 8),
    ]
}
