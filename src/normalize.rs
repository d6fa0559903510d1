//! Reshape raw deck service JSON into typed results.
//!
//! The service's payloads vary by endpoint; these functions pick out the
//! stable fields and reject responses missing required ones.

use serde_json::{Map, Value};

use crate::error::{DeckError, Result};
use crate::models::{Card, DeckSummary, PileInfo, PileMap};

fn missing(field: &str) -> DeckError {
    DeckError::RemoteProtocol(format!(
        "Deck service response is missing or has an invalid '{}' field.",
        field
    ))
}

fn str_field(obj: &Value, field: &str) -> Result<String> {
    obj.get(field)
        .and_then(Value::as_str)
        .map(|s| s.to_string())
        .ok_or_else(|| missing(field))
}

fn count_field(obj: &Value, field: &str) -> Result<u64> {
    obj.get(field).and_then(Value::as_u64).ok_or_else(|| missing(field))
}

/// Extract deck-level fields.
///
/// `deck_id` and `remaining` are required. `shuffled` and `deck_count` are
/// kept only if present.
pub fn deck_summary(data: &Value) -> Result<DeckSummary> {
    Ok(DeckSummary {
        deck_id: str_field(data, "deck_id")?,
        remaining: count_field(data, "remaining")?,
        shuffled: data.get("shuffled").and_then(Value::as_bool),
        deck_count: data.get("deck_count").and_then(Value::as_u64),
    })
}

/// Keep `{code, value, suit, image}` from each card, in order.
///
/// Absent, `null` or empty input gives an empty list.
pub fn format_cards(cards: Option<&Value>) -> Result<Vec<Card>> {
    let items = match cards {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(missing("cards")),
    };

    items
        .iter()
        .map(|card| {
            Ok(Card {
                code: str_field(card, "code")?,
                value: str_field(card, "value")?,
                suit: str_field(card, "suit")?,
                image: str_field(card, "image")?,
            })
        })
        .collect()
}

/// Build a pile map, keeping card detail for entries that carry a `cards` key.
pub fn pile_map(piles: Option<&Value>) -> Result<PileMap> {
    let entries = match piles {
        None | Some(Value::Null) => return Ok(PileMap::new()),
        Some(Value::Object(entries)) => entries,
        Some(_) => return Err(missing("piles")),
    };
    entries_to_map(entries)
}

fn entries_to_map(entries: &Map<String, Value>) -> Result<PileMap> {
    let mut map = PileMap::new();
    for (name, entry) in entries {
        let remaining = count_field(entry, "remaining")?;
        let info = match entry.get("cards") {
            Some(cards) => PileInfo::Detailed {
                remaining,
                cards: format_cards(Some(cards))?,
            },
            None => PileInfo::Counted { remaining },
        };
        map.insert(name.clone(), info);
    }
    Ok(map)
}

/// Build a count-only pile map, discarding any card detail.
pub fn pile_counts(piles: Option<&Value>) -> Result<PileMap> {
    Ok(pile_map(piles)?
        .into_iter()
        .map(|(name, info)| (name, info.into_counted()))
        .collect())
}
