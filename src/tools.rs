//! Tool-call surface for agent hosts.
//!
//! Exposes the ten deck and pile operations as named tools: JSON-schema
//! definitions for discovery, typed argument structs with defaults, and a
//! [`dispatch`] function that decodes arguments, runs the operation, and
//! encodes its typed result. Transport (MCP, HTTP, ...) is left to the host.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config;
use crate::error::{DeckError, Result};
use crate::models::DrawPosition;
use crate::operations::DrawFromPileParams;
use crate::DeckOfCards;

pub const SERVER_NAME: &str = "deck-of-cards";

pub const INSTRUCTIONS: &str = "This server wraps the Deck of Cards API. \
     Use the tools to create decks, shuffle them, draw cards, and manage piles.";

pub const TOOL_NAMES: [&str; 10] = [
    "create_deck",
    "create_partial_deck",
    "shuffle_deck",
    "draw_cards",
    "get_deck_state",
    "add_to_pile",
    "draw_from_pile",
    "list_pile_cards",
    "shuffle_pile",
    "return_cards",
];

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

fn one() -> i64 {
    1
}

fn top() -> String {
    DrawPosition::Top.as_str().to_string()
}

// Missing required strings decode as empty so the operation can name the
// field in its own error.

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDeckArgs {
    #[serde(default = "one")]
    pub deck_count: i64,
    #[serde(default)]
    pub shuffled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePartialDeckArgs {
    #[serde(default)]
    pub cards: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShuffleDeckArgs {
    #[serde(default)]
    pub deck_id: String,
    #[serde(default)]
    pub shuffle_remaining_only: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DrawCardsArgs {
    #[serde(default)]
    pub deck_id: String,
    #[serde(default = "one")]
    pub count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeckIdArgs {
    #[serde(default)]
    pub deck_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddToPileArgs {
    #[serde(default)]
    pub deck_id: String,
    #[serde(default)]
    pub pile_name: String,
    #[serde(default)]
    pub cards: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DrawFromPileArgs {
    #[serde(default)]
    pub deck_id: String,
    #[serde(default)]
    pub pile_name: String,
    pub cards: Option<Vec<String>>,
    pub count: Option<i64>,
    #[serde(default = "top")]
    pub position: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PileArgs {
    #[serde(default)]
    pub deck_id: String,
    #[serde(default)]
    pub pile_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReturnCardsArgs {
    #[serde(default)]
    pub deck_id: String,
    pub pile_name: Option<String>,
    pub cards: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

fn decode<T: DeserializeOwned>(args: Value) -> Result<T> {
    let args = if args.is_null() { json!({}) } else { args };
    Ok(serde_json::from_value(args)?)
}

fn encode<T: Serialize>(result: T) -> Result<Value> {
    serde_json::to_value(result).map_err(DeckError::Encode)
}

/// Run the tool `name` with a JSON argument object and return its JSON result.
///
/// `null` arguments are treated as an empty object.
pub fn dispatch(api: &DeckOfCards, name: &str, args: Value) -> Result<Value> {
    log::debug!("tool call {} {}", name, args);
    match name {
        "create_deck" => {
            let a: CreateDeckArgs = decode(args)?;
            encode(api.decks().create_deck(a.deck_count, a.shuffled)?)
        }
        "create_partial_deck" => {
            let a: CreatePartialDeckArgs = decode(args)?;
            encode(api.decks().create_partial_deck(&a.cards)?)
        }
        "shuffle_deck" => {
            let a: ShuffleDeckArgs = decode(args)?;
            encode(api.decks().shuffle_deck(&a.deck_id, a.shuffle_remaining_only)?)
        }
        "draw_cards" => {
            let a: DrawCardsArgs = decode(args)?;
            encode(api.decks().draw_cards(&a.deck_id, a.count)?)
        }
        "get_deck_state" => {
            let a: DeckIdArgs = decode(args)?;
            encode(api.decks().get_deck_state(&a.deck_id)?)
        }
        "add_to_pile" => {
            let a: AddToPileArgs = decode(args)?;
            encode(api.piles().add_to_pile(&a.deck_id, &a.pile_name, &a.cards)?)
        }
        "draw_from_pile" => {
            let a: DrawFromPileArgs = decode(args)?;
            let params = DrawFromPileParams {
                cards: a.cards,
                count: a.count,
                position: a.position.parse()?,
            };
            encode(api.piles().draw_from_pile(&a.deck_id, &a.pile_name, &params)?)
        }
        "list_pile_cards" => {
            let a: PileArgs = decode(args)?;
            encode(api.piles().list_pile_cards(&a.deck_id, &a.pile_name)?)
        }
        "shuffle_pile" => {
            let a: PileArgs = decode(args)?;
            encode(api.piles().shuffle_pile(&a.deck_id, &a.pile_name)?)
        }
        "return_cards" => {
            let a: ReturnCardsArgs = decode(args)?;
            encode(api.decks().return_cards(
                &a.deck_id,
                a.pile_name.as_deref(),
                a.cards.as_deref().unwrap_or_default(),
            )?)
        }
        _ => Err(DeckError::InvalidArgument(format!(
            "Unknown tool '{}'. Available tools: {}.",
            name,
            TOOL_NAMES.join(", ")
        ))),
    }
}

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

/// Definitions for all tools, as `{name, description, parameters}` objects
/// with JSON-schema parameters.
pub fn definitions() -> Vec<Value> {
    vec![
        create_deck(),
        create_partial_deck(),
        shuffle_deck(),
        draw_cards(),
        get_deck_state(),
        add_to_pile(),
        draw_from_pile(),
        list_pile_cards(),
        shuffle_pile(),
        return_cards(),
    ]
}

fn deck_id_param() -> Value {
    json!({
        "type": "string",
        "description": "Deck identifier returned by create_deck or create_partial_deck."
    })
}

fn pile_name_param() -> Value {
    json!({
        "type": "string",
        "pattern": format!("^[A-Za-z0-9_-]{{1,{}}}$", config::MAX_PILE_NAME_LEN),
        "description": "Pile name: 1-32 letters, numbers, hyphens, or underscores."
    })
}

/// `return_cards` treats an empty pile name as no pile.
fn optional_pile_name_param() -> Value {
    json!({
        "type": "string",
        "pattern": format!("^([A-Za-z0-9_-]{{1,{}}})?$", config::MAX_PILE_NAME_LEN),
        "description": "Pile to return cards from; omit or leave empty to return drawn cards from anywhere."
    })
}

fn cards_param(description: &str) -> Value {
    json!({
        "type": "array",
        "items": { "type": "string", "minLength": 2, "maxLength": 2 },
        "description": description
    })
}

fn count_param(description: &str) -> Value {
    json!({
        "type": "integer",
        "minimum": config::MIN_DRAW,
        "maximum": config::MAX_DRAW,
        "description": description
    })
}

fn create_deck() -> Value {
    json!({
        "name": "create_deck",
        "description": "Create a new deck or multi-deck shoe; set deck_count (1-20) to stack decks and shuffled=true to start pre-shuffled.",
        "parameters": {
            "type": "object",
            "properties": {
                "deck_count": {
                    "type": "integer",
                    "minimum": config::MIN_DECK_COUNT,
                    "maximum": config::MAX_DECK_COUNT,
                    "default": 1,
                    "description": "Number of standard 52-card decks to combine."
                },
                "shuffled": {
                    "type": "boolean",
                    "default": false,
                    "description": "Shuffle the new deck before returning it."
                }
            },
            "required": []
        }
    })
}

fn create_partial_deck() -> Value {
    json!({
        "name": "create_partial_deck",
        "description": "Create a partial deck containing only the specified card codes. Cards should be provided as two-character codes (e.g. AS, 0H).",
        "parameters": {
            "type": "object",
            "properties": {
                "cards": cards_param("Card codes to include, rank then suit (0 is ten).")
            },
            "required": ["cards"]
        }
    })
}

fn shuffle_deck() -> Value {
    json!({
        "name": "shuffle_deck",
        "description": "Reshuffle the specified deck. Set shuffle_remaining_only to true to keep drawn cards out.",
        "parameters": {
            "type": "object",
            "properties": {
                "deck_id": deck_id_param(),
                "shuffle_remaining_only": {
                    "type": "boolean",
                    "default": false,
                    "description": "Only shuffle cards still in the deck."
                }
            },
            "required": ["deck_id"]
        }
    })
}

fn draw_cards() -> Value {
    json!({
        "name": "draw_cards",
        "description": "Draw one or more cards from a deck.",
        "parameters": {
            "type": "object",
            "properties": {
                "deck_id": deck_id_param(),
                "count": count_param("Number of cards to draw (default 1).")
            },
            "required": ["deck_id"]
        }
    })
}

fn get_deck_state() -> Value {
    json!({
        "name": "get_deck_state",
        "description": "Return information about the deck including remaining cards.",
        "parameters": {
            "type": "object",
            "properties": {
                "deck_id": deck_id_param()
            },
            "required": ["deck_id"]
        }
    })
}

fn add_to_pile() -> Value {
    json!({
        "name": "add_to_pile",
        "description": "Add specific cards to a named pile. Pile names must be 1-32 characters using letters, numbers, hyphen, or underscore.",
        "parameters": {
            "type": "object",
            "properties": {
                "deck_id": deck_id_param(),
                "pile_name": pile_name_param(),
                "cards": cards_param("Drawn card codes to place in the pile.")
            },
            "required": ["deck_id", "pile_name", "cards"]
        }
    })
}

fn draw_from_pile() -> Value {
    json!({
        "name": "draw_from_pile",
        "description": "Draw cards from a named pile. By default draws from the top; set position to 'bottom' or 'random' to change behavior. Provide explicit card codes or use count.",
        "parameters": {
            "type": "object",
            "properties": {
                "deck_id": deck_id_param(),
                "pile_name": pile_name_param(),
                "cards": cards_param("Specific card codes to draw (top only; not with count)."),
                "count": count_param("Number of cards to draw (required for bottom or random)."),
                "position": {
                    "type": "string",
                    "enum": ["top", "bottom", "random"],
                    "default": "top",
                    "description": "Where in the pile to draw from."
                }
            },
            "required": ["deck_id", "pile_name"]
        }
    })
}

fn list_pile_cards() -> Value {
    json!({
        "name": "list_pile_cards",
        "description": "List the cards currently stored in a pile.",
        "parameters": {
            "type": "object",
            "properties": {
                "deck_id": deck_id_param(),
                "pile_name": pile_name_param()
            },
            "required": ["deck_id", "pile_name"]
        }
    })
}

fn shuffle_pile() -> Value {
    json!({
        "name": "shuffle_pile",
        "description": "Shuffle the cards contained in a named pile.",
        "parameters": {
            "type": "object",
            "properties": {
                "deck_id": deck_id_param(),
                "pile_name": pile_name_param()
            },
            "required": ["deck_id", "pile_name"]
        }
    })
}

fn return_cards() -> Value {
    json!({
        "name": "return_cards",
        "description": "Return cards to the main deck or a specific pile. Provide cards to return specific codes; omit to return everything.",
        "parameters": {
            "type": "object",
            "properties": {
                "deck_id": deck_id_param(),
                "pile_name": optional_pile_name_param(),
                "cards": cards_param("Card codes to return; omit to return all.")
            },
            "required": ["deck_id"]
        }
    })
}
