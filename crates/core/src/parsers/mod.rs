pub mod board_json;

use crate::model::Board;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("board: {0}")]
    Board(#[from] board_json::BoardJsonError),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unable to detect document shape")]
    UnknownShape,
}

/// Detect the board document shape and parse it.
///
/// Detection strategy:
/// 1. Parse the bytes as JSON.
/// 2. `{"data": {"objects": ...}}` — the wrapped document a board service
///    returns from its fetch endpoint.
/// 3. `{"objects": ...}` — a bare board.
pub fn parse_auto(data: &[u8]) -> Result<Board, ParseError> {
    let value: serde_json::Value = serde_json::from_slice(data)?;

    if let Some(obj) = value.as_object() {
        if obj.get("data").and_then(|d| d.get("objects")).is_some() {
            return Ok(board_json::parse_wrapped(data)?);
        }
        if obj.contains_key("objects") {
            return Ok(board_json::parse_bare(data)?);
        }
    }

    Err(ParseError::UnknownShape)
}
