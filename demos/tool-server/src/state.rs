/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// Async SDK handle. Dispatches each blocking deck service call to a
    /// thread pool internally.
    pub api: deckofcards_sdk::AsyncDeckOfCards,
}
