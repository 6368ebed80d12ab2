pub mod card;
pub mod card_data;
mod card_list;
pub mod deck;
