//! JSON persistence of generator sessions.

use std::path::Path;

use serde_json::Value;

use crate::blocks::{Block, CodeGeneratorState};
use crate::diagnostics::GenError;

/// Parse a session: either a full state object or a bare array of blocks.
pub fn parse_session(json: &str) -> Result<CodeGeneratorState, GenError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| GenError::decode(format!("invalid session JSON: {e}")))?;
    match value {
        Value::Array(_) => {
            let blocks: Vec<Block> = serde_json::from_value(value)
                .map_err(|e| GenError::decode(format!("invalid block array: {e}")))?;
            Ok(CodeGeneratorState::from_blocks(blocks))
        }
        Value::Object(_) => serde_json::from_value(value)
            .map_err(|e| GenError::decode(format!("invalid session state: {e}"))),
        _ => Err(GenError::decode("session must be a state object or an array of blocks")),
    }
}

pub fn load_session(path: &Path) -> Result<CodeGeneratorState, GenError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| GenError::io(format!("could not read session: {e}"), path.to_path_buf()))?;
    let state = parse_session(&content)?;
    tracing::debug!(path = %path.display(), blocks = state.blocks.len(), "loaded session");
    Ok(state)
}

pub fn session_to_json(state: &CodeGeneratorState) -> Result<String, GenError> {
    serde_json::to_string_pretty(state).map_err(|e| GenError::decode(format!("could not encode session: {e}")))
}
