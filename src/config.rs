use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://deckofcardsapi.com/api/deck";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable read by [`DeckOfCardsBuilder::from_env`](crate::DeckOfCardsBuilder::from_env).
pub const BASE_URL_ENV: &str = "DECK_API_BASE_URL";

pub const MIN_DECK_COUNT: i64 = 1;
pub const MAX_DECK_COUNT: i64 = 20;

pub const MIN_DRAW: i64 = 1;
pub const MAX_DRAW: i64 = 52;

pub const MAX_PILE_NAME_LEN: usize = 32;

/// Rank characters; `0` is ten.
pub const CARD_VALUES: &[char] = &[
    'A', '2', '3', '4', '5', '6', '7', '8', '9', '0', 'J', 'Q', 'K',
];
pub const CARD_SUITS: &[char] = &['S', 'D', 'C', 'H'];

pub fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
