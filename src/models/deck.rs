use serde::{Deserialize, Serialize};

use super::card::Card;
use super::pile::PileMap;

// ---------------------------------------------------------------------------
// DeckSummary — Deck-level fields shared by every result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSummary {
    /// Opaque id; pass it back verbatim on later calls.
    pub deck_id: String,
    /// Cards still available to draw from the main deck.
    pub remaining: u64,
    /// `None` when the endpoint does not report it (pile endpoints).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shuffled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_count: Option<u64>,
}

// ---------------------------------------------------------------------------
// Operation results
// ---------------------------------------------------------------------------

/// Result of `draw_cards`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    #[serde(flatten)]
    pub deck: DeckSummary,
    pub cards: Vec<Card>,
}

/// Result of `add_to_pile`, `list_pile_cards`, `shuffle_pile` and `return_cards`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileResult {
    #[serde(flatten)]
    pub deck: DeckSummary,
    pub piles: PileMap,
}

/// Result of `draw_from_pile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileDrawResult {
    #[serde(flatten)]
    pub deck: DeckSummary,
    pub piles: PileMap,
    pub cards: Vec<Card>,
}
