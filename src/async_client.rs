//! Async wrapper around [`DeckOfCards`] for use in async runtimes (Tokio, etc.).
//!
//! Runs every operation on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the single HTTP round trip is in flight.
//!
//! # Example
//!
//! ```no_run
//! use deckofcards_sdk::AsyncDeckOfCards;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let api = AsyncDeckOfCards::builder().build().await.unwrap();
//!
//!     // Run any sync operation via closure
//!     let deck = api.run(|d| d.decks().create_deck(1, true)).await.unwrap();
//!
//!     // Or go through the tool surface
//!     let drawn = api
//!         .dispatch("draw_cards", serde_json::json!({ "deck_id": deck.deck_id, "count": 2 }))
//!         .await
//!         .unwrap();
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::error::{DeckError, Result};
use crate::{DeckOfCards, DeckOfCardsBuilder};

// ---------------------------------------------------------------------------
// AsyncDeckOfCardsBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncDeckOfCards`] instance.
#[derive(Debug, Clone, Default)]
pub struct AsyncDeckOfCardsBuilder {
    inner: DeckOfCardsBuilder,
}

impl AsyncDeckOfCardsBuilder {
    /// Start from defaults, honoring `DECK_API_BASE_URL`.
    pub fn from_env() -> Self {
        Self {
            inner: DeckOfCardsBuilder::from_env(),
        }
    }

    /// Set the deck service base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.inner = self.inner.base_url(url);
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Build the async client.
    ///
    /// The blocking HTTP client is constructed on the blocking thread pool,
    /// since it must not be created or dropped inside an async context.
    pub async fn build(self) -> Result<AsyncDeckOfCards> {
        tokio::task::spawn_blocking(move || {
            let api = self.inner.build()?;
            Ok(AsyncDeckOfCards {
                inner: Arc::new(api),
            })
        })
        .await
        .map_err(join_error)?
    }
}

fn join_error(e: tokio::task::JoinError) -> DeckError {
    DeckError::RemoteUnavailable(format!("Task join error: {e}"))
}

// ---------------------------------------------------------------------------
// AsyncDeckOfCards
// ---------------------------------------------------------------------------

/// Async wrapper around [`DeckOfCards`].
///
/// The wrapped client holds no mutable state, so calls run concurrently
/// without a lock. Calls against the same deck are not serialized.
#[derive(Clone)]
pub struct AsyncDeckOfCards {
    inner: Arc<DeckOfCards>,
}

impl AsyncDeckOfCards {
    /// Create a new builder for configuring the async client.
    pub fn builder() -> AsyncDeckOfCardsBuilder {
        AsyncDeckOfCardsBuilder::default()
    }

    /// Run a sync operation on the blocking thread pool.
    ///
    /// The closure receives a `&DeckOfCards` and should return a `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&DeckOfCards) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let api = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&api))
            .await
            .map_err(join_error)?
    }

    /// Run a named tool asynchronously.
    ///
    /// Convenience wrapper around [`run()`](Self::run) for
    /// [`tools::dispatch()`](crate::tools::dispatch).
    pub async fn dispatch(&self, name: &str, args: Value) -> Result<Value> {
        let name = name.to_string();
        self.run(move |api| crate::tools::dispatch(api, &name, args))
            .await
    }
}
