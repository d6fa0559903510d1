pub mod card;
pub mod deck;
pub mod pile;

pub use card::*;
pub use deck::*;
pub use pile::*;
