use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Card — A single card as reported by the deck service
// ---------------------------------------------------------------------------

/// A card drawn from or listed in a deck or pile.
///
/// Only the four stable fields are kept; anything else the service attaches
/// (alternate image formats, etc.) is dropped during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Canonical two-character code, rank then suit (`"0H"` is the ten of hearts).
    pub code: String,
    pub value: String,
    pub suit: String,
    pub image: String,
}

/// Codes of `cards`, in order.
pub fn card_codes(cards: &[Card]) -> Vec<String> {
    cards.iter().map(|c| c.code.clone()).collect()
}
