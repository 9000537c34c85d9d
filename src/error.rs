use thiserror::Error;

/// Everything the core can refuse to do.
///
/// `GenerationFailed` is fatal for the level-construction call that
/// produced it; the caller retries with a fresh seed or gives up. The
/// remaining kinds are recoverable and leave state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("level generation failed while placing {0}")]
    GenerationFailed(&'static str),

    #[error("inventory is full")]
    InventoryFull,

    #[error("no inventory slot {index}")]
    InvalidIndex { index: usize },

    #[error("move blocked by a wall")]
    IllegalMove,
}
