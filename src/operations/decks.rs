//! Deck-level operations: creating, shuffling, drawing, inspecting, and
//! returning cards to a deck.

use crate::client::RemoteDeckClient;
use crate::config;
use crate::error::Result;
use crate::models::{DeckSummary, DrawResult, PileResult};
use crate::normalize::{deck_summary, format_cards, pile_counts};
use crate::request::DeckRequest;
use crate::validate::{
    check_range, normalize_cards, require_cards, require_deck_id, validate_pile_name,
};

// ---------------------------------------------------------------------------
// DeckOps
// ---------------------------------------------------------------------------

/// Operations on a whole deck.
pub struct DeckOps<'a> {
    client: &'a RemoteDeckClient,
}

impl<'a> DeckOps<'a> {
    /// Create a new `DeckOps` bound to the given client.
    pub fn new(client: &'a RemoteDeckClient) -> Self {
        Self { client }
    }

    // -- Creation ----------------------------------------------------------

    /// Create a deck (or a shoe of `deck_count` decks, 1-20), optionally
    /// pre-shuffled.
    pub fn create_deck(&self, deck_count: i64, shuffled: bool) -> Result<DeckSummary> {
        let deck_count = check_range(
            "deck_count",
            deck_count,
            config::MIN_DECK_COUNT,
            config::MAX_DECK_COUNT,
        )?;

        let mut req = DeckRequest::new();
        req.segment("new");
        if shuffled {
            req.segment("shuffle");
        }
        req.query("deck_count", deck_count);

        let data = self.client.call(&req)?;
        deck_summary(&data)
    }

    /// Create a shuffled deck holding only the given card codes.
    pub fn create_partial_deck<S: AsRef<str>>(&self, cards: &[S]) -> Result<DeckSummary> {
        let cards = require_cards(cards, "build a partial deck")?;

        let mut req = DeckRequest::new();
        req.segment("new").segment("shuffle").cards(&cards);

        let data = self.client.call(&req)?;
        deck_summary(&data)
    }

    // -- Shuffling ---------------------------------------------------------

    /// Reshuffle a deck. With `remaining_only`, drawn cards stay out of the deck.
    pub fn shuffle_deck(&self, deck_id: &str, remaining_only: bool) -> Result<DeckSummary> {
        let deck_id = require_deck_id(deck_id, "shuffle a deck")?;

        let mut req = DeckRequest::deck(deck_id);
        req.segment("shuffle");
        if remaining_only {
            req.query("remaining", "true");
        }

        let data = self.client.call(&req)?;
        deck_summary(&data)
    }

    // -- Drawing -----------------------------------------------------------

    /// Draw `count` cards (1-52) from the top of the deck.
    pub fn draw_cards(&self, deck_id: &str, count: i64) -> Result<DrawResult> {
        let deck_id = require_deck_id(deck_id, "draw cards")?;
        let count = check_range("count", count, config::MIN_DRAW, config::MAX_DRAW)?;

        let mut req = DeckRequest::deck(deck_id);
        req.segment("draw").query("count", count);

        let data = self.client.call(&req)?;
        Ok(DrawResult {
            deck: deck_summary(&data)?,
            cards: format_cards(data.get("cards"))?,
        })
    }

    // -- Inspection --------------------------------------------------------

    /// Current deck-level state.
    pub fn get_deck_state(&self, deck_id: &str) -> Result<DeckSummary> {
        let deck_id = require_deck_id(deck_id, "check deck state")?;

        let data = self.client.call(&DeckRequest::deck(deck_id))?;
        deck_summary(&data)
    }

    // -- Returning ---------------------------------------------------------

    /// Return cards to the deck.
    ///
    /// With a `pile_name`, cards come back from that pile; otherwise drawn
    /// cards come back from anywhere. An empty `cards` list returns
    /// everything eligible; an empty pile name counts as none.
    pub fn return_cards<S: AsRef<str>>(
        &self,
        deck_id: &str,
        pile_name: Option<&str>,
        cards: &[S],
    ) -> Result<PileResult> {
        let deck_id = require_deck_id(deck_id, "return cards")?;
        let cards = normalize_cards(cards)?;

        let mut req = DeckRequest::deck(deck_id);
        if let Some(pile) = pile_name.filter(|p| !p.is_empty()) {
            req.pile(validate_pile_name(pile)?);
        }
        req.segment("return").cards(&cards);

        let data = self.client.call(&req)?;
        Ok(PileResult {
            deck: deck_summary(&data)?,
            piles: pile_counts(data.get("piles"))?,
        })
    }
}
