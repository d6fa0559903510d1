//! Local argument checks applied before any request leaves the process.
//!
//! Card codes are canonicalized here (trimmed, upper-cased, grammar-checked)
//! and pile names are checked against the URL-safe pile grammar. Every
//! helper fails with a message naming the offending value and the rule it
//! broke.

use crate::config;
use crate::error::{DeckError, Result};

/// Canonicalize a list of two-character card codes, preserving order.
///
/// Empty input yields an empty list. Operations that need at least one card
/// must check for emptiness themselves via [`require_cards`].
pub fn normalize_cards<S: AsRef<str>>(codes: &[S]) -> Result<Vec<String>> {
    codes.iter().map(|c| normalize_card(c.as_ref())).collect()
}

/// Canonicalize a single card code: `" as "` becomes `"AS"`.
pub fn normalize_card(raw: &str) -> Result<String> {
    let code = raw.trim().to_uppercase();
    let mut chars = code.chars();
    let (value, suit) = match (chars.next(), chars.next(), chars.next()) {
        (Some(v), Some(s), None) => (v, s),
        _ => {
            return Err(DeckError::InvalidCardCode(format!(
                "Invalid card code '{}': must be exactly two characters.",
                raw
            )))
        }
    };

    if !config::CARD_VALUES.contains(&value) || !config::CARD_SUITS.contains(&suit) {
        return Err(DeckError::InvalidCardCode(format!(
            "Invalid card code '{}': value must be one of {}; suit must be one of {}.",
            raw,
            sorted_list(config::CARD_VALUES),
            sorted_list(config::CARD_SUITS)
        )));
    }

    Ok(code)
}

fn sorted_list(chars: &[char]) -> String {
    let mut sorted = chars.to_vec();
    sorted.sort_unstable();
    sorted
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check a pile name against the grammar `[A-Za-z0-9_-]{1,32}`.
///
/// Returns the name unchanged on success.
pub fn validate_pile_name(name: &str) -> Result<&str> {
    let valid = !name.is_empty()
        && name.len() <= config::MAX_PILE_NAME_LEN
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if !valid {
        return Err(DeckError::InvalidPileName(format!(
            "Invalid pile name '{}': pile names must be 1-{} characters of letters, numbers, hyphen, or underscore.",
            name,
            config::MAX_PILE_NAME_LEN
        )));
    }
    Ok(name)
}

/// Reject a missing or blank deck id. Any other id is passed on verbatim.
pub fn require_deck_id<'s>(deck_id: &'s str, action: &str) -> Result<&'s str> {
    if deck_id.trim().is_empty() {
        return Err(DeckError::InvalidArgument(format!(
            "A deck_id is required to {}.",
            action
        )));
    }
    // Dot segments would be resolved away instead of reaching the service.
    if deck_id == "." || deck_id == ".." {
        return Err(DeckError::InvalidArgument(format!(
            "Invalid deck_id '{}'.",
            deck_id
        )));
    }
    Ok(deck_id)
}

/// Reject a missing pile name, then check it against the pile grammar.
pub fn require_pile_name(pile_name: &str) -> Result<&str> {
    if pile_name.is_empty() {
        return Err(DeckError::InvalidArgument(
            "A pile_name is required.".to_string(),
        ));
    }
    validate_pile_name(pile_name)
}

/// Normalize a card list that must contain at least one code.
pub fn require_cards<S: AsRef<str>>(codes: &[S], purpose: &str) -> Result<Vec<String>> {
    if codes.is_empty() {
        return Err(DeckError::InvalidArgument(format!(
            "Provide at least one card code to {}.",
            purpose
        )));
    }
    normalize_cards(codes)
}

/// Check that `value` lies within `min..=max`.
pub fn check_range(field: &str, value: i64, min: i64, max: i64) -> Result<i64> {
    if value < min || value > max {
        return Err(DeckError::InvalidArgument(format!(
            "{} must be between {} and {} (got {}).",
            field, min, max, value
        )));
    }
    Ok(value)
}
