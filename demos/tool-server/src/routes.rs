use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Json;
use deckofcards_sdk::tools;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

/// GET /tools
///
/// Server name, usage instructions, and the definition of every tool.
pub async fn list_tools() -> Json<Value> {
    Json(json!({
        "name": tools::SERVER_NAME,
        "instructions": tools::INSTRUCTIONS,
        "tools": tools::definitions(),
    }))
}

/// POST /tools/{name}
///
/// Invoke one tool. The body is the tool's argument object; an empty body
/// means no arguments.
pub async fn call_tool(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    body: Option<Json<Value>>,
) -> Result<Json<Value>, AppError> {
    let args = body.map(|Json(v)| v).unwrap_or(Value::Null);
    log::info!("tool {} called", name);

    let result = state.api.dispatch(&name, args).await.map_err(|e| {
        log::warn!("tool {} failed: {}", name, e);
        AppError::from(e)
    })?;
    Ok(Json(json!({ "data": result })))
}
