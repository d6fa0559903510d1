//! Request descriptors for the deck service.
//!
//! Operations describe a call as path segments plus query pairs. The
//! descriptor alone turns itself into a URL: every segment is percent-encoded
//! as a single path segment, so a deck id cannot change the shape of the
//! request. Builder methods return `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use deckofcards_sdk::DeckRequest;
//! use reqwest::Url;
//!
//! let base = Url::parse("https://deckofcardsapi.com/api/deck").unwrap();
//! let url = DeckRequest::deck("3p40paa87x90")
//!     .pile("discard")
//!     .segment("draw")
//!     .query("count", 2)
//!     .url(&base)
//!     .unwrap();
//! assert_eq!(
//!     url.as_str(),
//!     "https://deckofcardsapi.com/api/deck/3p40paa87x90/pile/discard/draw/?count=2"
//! );
//! ```

use reqwest::Url;

use crate::error::{DeckError, Result};

/// Path segments and query parameters for one deck service call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeckRequest {
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl DeckRequest {
    /// A request rooted at the service base (used for `new/...`).
    pub fn new() -> Self {
        Self::default()
    }

    /// A request rooted at an existing deck.
    pub fn deck(deck_id: &str) -> Self {
        Self {
            segments: vec![deck_id.to_string()],
            query: Vec::new(),
        }
    }

    /// Append one path segment.
    pub fn segment(&mut self, segment: &str) -> &mut Self {
        self.segments.push(segment.to_string());
        self
    }

    /// Append `pile/{name}`.
    pub fn pile(&mut self, name: &str) -> &mut Self {
        self.segment("pile").segment(name)
    }

    /// Add a query parameter. Later duplicates are sent as well.
    pub fn query<V: ToString>(&mut self, key: &str, value: V) -> &mut Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Add `cards=AS,2S,...`. An empty list adds nothing.
    pub fn cards(&mut self, codes: &[String]) -> &mut Self {
        if !codes.is_empty() {
            self.query("cards", codes.join(","));
        }
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.query
    }

    /// Resolve against `base`, ending the path with the slash the service
    /// expects.
    pub fn url(&self, base: &Url) -> Result<Url> {
        let mut url = base.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                DeckError::RemoteUnavailable(format!(
                    "Deck service base URL '{}' cannot carry a path.",
                    base
                ))
            })?;
            path.pop_if_empty();
            for segment in &self.segments {
                path.push(segment);
            }
            path.push("");
        }
        url.set_query(None);
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        Ok(url)
    }
}
