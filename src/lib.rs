//! Deck of Cards SDK for Rust.
//!
//! Provides a validated, strongly-typed facade over the Deck of Cards HTTP
//! API. All deck and pile state lives in the remote service; this crate
//! checks arguments locally (card codes, pile names, counts, parameter
//! combinations), issues one request per operation, and reshapes the
//! service's loosely-typed JSON into stable result types.
//!
//! # Quick start
//!
//! ```no_run
//! use deckofcards_sdk::models::card_codes;
//! use deckofcards_sdk::DeckOfCards;
//!
//! let api = DeckOfCards::builder().build().unwrap();
//!
//! // Shuffle up a fresh deck and deal five cards
//! let deck = api.decks().create_deck(1, true).unwrap();
//! let hand = api.decks().draw_cards(&deck.deck_id, 5).unwrap();
//!
//! // Keep them in a named pile
//! api.piles().add_to_pile(&deck.deck_id, "hand", &card_codes(&hand.cards)).unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod operations;
pub mod request;
pub mod tools;
pub mod validate;

#[cfg(feature = "async")]
pub use async_client::AsyncDeckOfCards;
pub use client::RemoteDeckClient;
pub use error::{DeckError, ErrorKind, Result};
pub use models::{
    Card, DeckSummary, DrawPosition, DrawResult, PileDrawResult, PileInfo, PileMap, PileResult,
};
pub use operations::{DeckOps, DrawFromPileParams, PileOps};
pub use request::DeckRequest;

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// DeckOfCardsBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`DeckOfCards`] instance.
///
/// Use [`DeckOfCards::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](DeckOfCardsBuilder::build) to create the client.
#[derive(Debug, Clone)]
pub struct DeckOfCardsBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for DeckOfCardsBuilder {
    fn default() -> Self {
        Self {
            base_url: config::default_base_url(),
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl DeckOfCardsBuilder {
    /// Start from defaults, taking the base URL from the
    /// `DECK_API_BASE_URL` environment variable when it is set and non-empty.
    pub fn from_env() -> Self {
        let builder = Self::default();
        match std::env::var(config::BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => builder.base_url(url.trim()),
            _ => builder,
        }
    }

    /// Set the deck service base URL.
    ///
    /// Defaults to `https://deckofcardsapi.com/api/deck`. Point this at a
    /// self-hosted instance or a local stub for testing.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-request timeout.
    ///
    /// Defaults to 10 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client. No request is made until an operation is called.
    pub fn build(self) -> Result<DeckOfCards> {
        let client = RemoteDeckClient::new(&self.base_url, self.timeout)?;
        Ok(DeckOfCards { client })
    }
}

// ---------------------------------------------------------------------------
// DeckOfCards
// ---------------------------------------------------------------------------

/// The main entry point for the SDK.
///
/// Wraps a [`RemoteDeckClient`] and exposes deck and pile operations as
/// lightweight borrowing wrappers. Holds no deck state, so one instance can
/// serve concurrent callers.
///
/// Created via [`DeckOfCards::builder()`].
#[derive(Debug, Clone)]
pub struct DeckOfCards {
    client: RemoteDeckClient,
}

impl DeckOfCards {
    /// Create a new builder for configuring the client.
    pub fn builder() -> DeckOfCardsBuilder {
        DeckOfCardsBuilder::default()
    }

    /// Access deck-level operations (create, shuffle, draw, state, return).
    pub fn decks(&self) -> DeckOps<'_> {
        DeckOps::new(&self.client)
    }

    /// Access pile operations (add, draw, list, shuffle).
    pub fn piles(&self) -> PileOps<'_> {
        PileOps::new(&self.client)
    }

    /// Return a reference to the underlying [`RemoteDeckClient`].
    pub fn client(&self) -> &RemoteDeckClient {
        &self.client
    }
}

impl fmt::Display for DeckOfCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DeckOfCards(base_url={}, timeout={:?})",
            self.client.base_url(),
            self.client.timeout()
        )
    }
}
