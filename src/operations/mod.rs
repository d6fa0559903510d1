//! Operation layer for the Deck of Cards SDK.
//!
//! Each module provides an operations struct that borrows a
//! [`RemoteDeckClient`](crate::client::RemoteDeckClient). Every operation
//! validates its arguments locally, issues exactly one remote call, and
//! normalizes the response into a typed result. Invalid input never reaches
//! the network.

pub mod decks;
pub mod piles;

pub use decks::DeckOps;
pub use piles::{DrawFromPileParams, PileOps};
