//! Errors raised while building a timeline from its seed document.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimelineError {
    /// The seed JSON could not be decoded (this includes a category list of the wrong length).
    #[error("malformed timeline seed: {0}")]
    Seed(#[from] serde_json::Error),

    #[error("timeline seed lists no positions")]
    NoPositions,

    #[error("category `{name}` appears more than once in the timeline seed")]
    DuplicateCategory { name: String },
}
