use serde::Deserialize;
use thiserror::Error;

use crate::model::Board;

#[derive(Debug, Error)]
pub enum BoardJsonError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Wrapped board document: `{"data": {"objects": {...}}}`.
///
/// Board services nest the board under `data` alongside request metadata
/// the viewer ignores; unknown fields at every level are tolerated.
#[derive(Debug, Deserialize)]
struct WrappedDocument {
    data: Board,
}

/// Parse a wrapped board document.
pub fn parse_wrapped(data: &[u8]) -> Result<Board, BoardJsonError> {
    let doc: WrappedDocument = serde_json::from_slice(data)?;
    Ok(doc.data)
}

/// Parse a bare board: `{"objects": {...}}`.
pub fn parse_bare(data: &[u8]) -> Result<Board, BoardJsonError> {
    let board: Board = serde_json::from_slice(data)?;
    Ok(board)
}
