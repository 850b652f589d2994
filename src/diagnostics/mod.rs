use crate::blocks::BlockType;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("cannot nest inside {block_type} block {index}: only if, elseIf, else and while blocks hold children")]
    UnsupportedNestingTarget { index: usize, block_type: BlockType },

    #[error("nest target {index} does not exist in the current block forest")]
    NestTargetNotFound { index: usize },

    #[error("unknown block kind: {block_type} block {index} has no statement form")]
    UnknownBlockKind { index: usize, block_type: BlockType },

    #[error("Config error: {msg}")]
    Config { msg: String, path: PathBuf },

    #[error("Decode error: {msg}")]
    Decode { msg: String },

    #[error("I/O error: {msg}")]
    Io { msg: String, path: PathBuf },
}

impl GenError {
    pub fn unsupported_nesting(index: usize, block_type: BlockType) -> Self {
        Self::UnsupportedNestingTarget { index, block_type }
    }

    pub fn target_not_found(index: usize) -> Self {
        Self::NestTargetNotFound { index }
    }

    pub fn unknown_kind(index: usize, block_type: BlockType) -> Self {
        Self::UnknownBlockKind { index, block_type }
    }

    pub fn config(msg: impl Into<String>, path: PathBuf) -> Self {
        Self::Config { msg: msg.into(), path }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode { msg: msg.into() }
    }

    pub fn io(msg: impl Into<String>, path: PathBuf) -> Self {
        Self::Io { msg: msg.into(), path }
    }
}

/// Print a GenError to stderr for terminal output.
pub fn render_error(err: &GenError) {
    match err {
        GenError::Config { path, .. } | GenError::Io { path, .. } => {
            eprintln!("error: {err}");
            eprintln!("  --> {}", path.display());
        }
        GenError::UnsupportedNestingTarget { .. }
        | GenError::NestTargetNotFound { .. }
        | GenError::UnknownBlockKind { .. }
        | GenError::Decode { .. } => {
            eprintln!("error: {err}");
        }
    }
}
