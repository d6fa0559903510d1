use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::error::DeckError;

// ---------------------------------------------------------------------------
// PileInfo — Per-pile entry, with or without card detail
// ---------------------------------------------------------------------------

/// One entry of a pile map.
///
/// The service only lists cards for the pile named in a `list` call; every
/// other entry (and every entry from other endpoints) is a bare count. The
/// two shapes are kept distinct rather than folding into an optional field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PileInfo {
    Detailed { remaining: u64, cards: Vec<Card> },
    Counted { remaining: u64 },
}

impl PileInfo {
    pub fn remaining(&self) -> u64 {
        match self {
            PileInfo::Detailed { remaining, .. } | PileInfo::Counted { remaining } => *remaining,
        }
    }

    /// Card detail, if the service reported it for this pile.
    pub fn cards(&self) -> Option<&[Card]> {
        match self {
            PileInfo::Detailed { cards, .. } => Some(cards),
            PileInfo::Counted { .. } => None,
        }
    }

    pub fn is_detailed(&self) -> bool {
        matches!(self, PileInfo::Detailed { .. })
    }

    /// Drop card detail, keeping only the count.
    pub fn into_counted(self) -> PileInfo {
        PileInfo::Counted {
            remaining: self.remaining(),
        }
    }
}

/// Pile name to pile entry. Names are unique within a deck.
pub type PileMap = BTreeMap<String, PileInfo>;

// ---------------------------------------------------------------------------
// DrawPosition
// ---------------------------------------------------------------------------

/// Where in a pile `draw_from_pile` takes cards from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawPosition {
    #[default]
    Top,
    Bottom,
    Random,
}

impl DrawPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawPosition::Top => "top",
            DrawPosition::Bottom => "bottom",
            DrawPosition::Random => "random",
        }
    }

    /// Extra path segment after `draw`; `None` for the top of the pile.
    pub fn path_segment(&self) -> Option<&'static str> {
        match self {
            DrawPosition::Top => None,
            DrawPosition::Bottom => Some("bottom"),
            DrawPosition::Random => Some("random"),
        }
    }
}

impl FromStr for DrawPosition {
    type Err = DeckError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top" => Ok(DrawPosition::Top),
            "bottom" => Ok(DrawPosition::Bottom),
            "random" => Ok(DrawPosition::Random),
            _ => Err(DeckError::InvalidArgument(format!(
                "Invalid position '{}': position must be one of 'top', 'bottom', or 'random'.",
                s
            ))),
        }
    }
}

impl fmt::Display for DrawPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
