//! Pile operations: named sub-collections of cards inside a deck.

use crate::client::RemoteDeckClient;
use crate::config;
use crate::error::{DeckError, Result};
use crate::models::{DrawPosition, PileDrawResult, PileResult};
use crate::normalize::{deck_summary, format_cards, pile_counts, pile_map};
use crate::request::DeckRequest;
use crate::validate::{
    check_range, normalize_cards, require_cards, require_deck_id, require_pile_name,
};

// ---------------------------------------------------------------------------
// DrawFromPileParams
// ---------------------------------------------------------------------------

/// Parameters for [`PileOps::draw_from_pile`].
///
/// Give either explicit `cards` or a `count`, never both (an empty `cards`
/// list still counts as given). Explicit cards
/// can only be drawn from the top; `bottom` and `random` need a `count`.
/// With neither at the top, the service draws its default of one card.
#[derive(Debug, Clone, Default)]
pub struct DrawFromPileParams {
    pub cards: Option<Vec<String>>,
    pub count: Option<i64>,
    pub position: DrawPosition,
}

impl DrawFromPileParams {
    /// Draw `count` cards from `position`.
    pub fn count(count: i64, position: DrawPosition) -> Self {
        Self {
            cards: None,
            count: Some(count),
            position,
        }
    }

    /// Draw these specific cards (top of the pile only).
    pub fn cards<S: AsRef<str>>(cards: &[S]) -> Self {
        Self {
            cards: Some(cards.iter().map(|c| c.as_ref().to_string()).collect()),
            count: None,
            position: DrawPosition::Top,
        }
    }

    /// Resolve the parameters into the request query.
    fn apply(&self, req: &mut DeckRequest) -> Result<()> {
        // Any supplied card list conflicts with a count, even an empty one.
        if self.cards.is_some() && self.count.is_some() {
            return Err(DeckError::InvalidArgument(
                "Provide either specific card codes or a count, not both.".to_string(),
            ));
        }
        let cards = self.cards.as_deref().filter(|c| !c.is_empty());

        match (cards, self.count, self.position) {
            (Some(_), None, DrawPosition::Bottom | DrawPosition::Random) => {
                Err(DeckError::InvalidArgument(format!(
                    "Drawing specific cards is only supported from the top of the pile (got position '{}').",
                    self.position
                )))
            }
            (Some(cards), None, DrawPosition::Top) => {
                req.cards(&normalize_cards(cards)?);
                Ok(())
            }
            (_, Some(count), _) => {
                let count = check_range("count", count, config::MIN_DRAW, config::MAX_DRAW)?;
                req.query("count", count);
                Ok(())
            }
            (None, None, DrawPosition::Bottom | DrawPosition::Random) => {
                Err(DeckError::InvalidArgument(format!(
                    "Specify count when drawing from the bottom or randomly (got position '{}').",
                    self.position
                )))
            }
            (None, None, DrawPosition::Top) => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// PileOps
// ---------------------------------------------------------------------------

/// Operations on named piles within a deck.
pub struct PileOps<'a> {
    client: &'a RemoteDeckClient,
}

impl<'a> PileOps<'a> {
    /// Create a new `PileOps` bound to the given client.
    pub fn new(client: &'a RemoteDeckClient) -> Self {
        Self { client }
    }

    /// Put drawn cards into a pile, creating the pile if needed.
    pub fn add_to_pile<S: AsRef<str>>(
        &self,
        deck_id: &str,
        pile_name: &str,
        cards: &[S],
    ) -> Result<PileResult> {
        let deck_id = require_deck_id(deck_id, "add cards to a pile")?;
        let pile_name = require_pile_name(pile_name)?;
        let cards = require_cards(cards, "add to the pile")?;

        let mut req = DeckRequest::deck(deck_id);
        req.pile(pile_name).segment("add").cards(&cards);

        let data = self.client.call(&req)?;
        Ok(PileResult {
            deck: deck_summary(&data)?,
            piles: pile_counts(data.get("piles"))?,
        })
    }

    /// Draw cards out of a pile.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use deckofcards_sdk::{DeckOfCards, DrawFromPileParams, DrawPosition};
    ///
    /// let api = DeckOfCards::builder().build().unwrap();
    /// let drawn = api
    ///     .piles()
    ///     .draw_from_pile("3p40paa87x90", "discard", &DrawFromPileParams::count(2, DrawPosition::Bottom))
    ///     .unwrap();
    /// println!("{} cards left in discard", drawn.piles["discard"].remaining());
    /// ```
    pub fn draw_from_pile(
        &self,
        deck_id: &str,
        pile_name: &str,
        params: &DrawFromPileParams,
    ) -> Result<PileDrawResult> {
        let deck_id = require_deck_id(deck_id, "draw from a pile")?;
        let pile_name = require_pile_name(pile_name)?;

        let mut req = DeckRequest::deck(deck_id);
        req.pile(pile_name).segment("draw");
        if let Some(segment) = params.position.path_segment() {
            req.segment(segment);
        }
        params.apply(&mut req)?;

        let data = self.client.call(&req)?;
        Ok(PileDrawResult {
            deck: deck_summary(&data)?,
            piles: pile_counts(data.get("piles"))?,
            cards: format_cards(data.get("cards"))?,
        })
    }

    /// List a pile's cards. The named pile carries card detail; other
    /// piles in the deck are reported as counts.
    pub fn list_pile_cards(&self, deck_id: &str, pile_name: &str) -> Result<PileResult> {
        let deck_id = require_deck_id(deck_id, "inspect a pile")?;
        let pile_name = require_pile_name(pile_name)?;

        let mut req = DeckRequest::deck(deck_id);
        req.pile(pile_name).segment("list");

        let data = self.client.call(&req)?;
        Ok(PileResult {
            deck: deck_summary(&data)?,
            piles: pile_map(data.get("piles"))?,
        })
    }

    /// Shuffle the cards in a pile.
    pub fn shuffle_pile(&self, deck_id: &str, pile_name: &str) -> Result<PileResult> {
        let deck_id = require_deck_id(deck_id, "shuffle a pile")?;
        let pile_name = require_pile_name(pile_name)?;

        let mut req = DeckRequest::deck(deck_id);
        req.pile(pile_name).segment("shuffle");

        let data = self.client.call(&req)?;
        Ok(PileResult {
            deck: deck_summary(&data)?,
            piles: pile_counts(data.get("piles"))?,
        })
    }
}
