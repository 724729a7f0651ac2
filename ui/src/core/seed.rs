//! Seed document the timeline is built from.
//!
//! The bundled seed lives in `assets/seed/timeline.json` and is embedded at
//! compile time. The document lists the shared category names once; each
//! position receives its own unscored copy when the timeline is built.
//!
//! ```json
//! {
//!   "categories": ["News Apps", "..."],
//!   "positions": [{ "label": "Early Morning", "time": "6:00 AM", "description": "..." }]
//! }
//! ```

use std::collections::HashSet;

use serde::Deserialize;

use super::error::TimelineError;

/// Every position carries exactly this many categories.
pub const CATEGORIES_PER_POSITION: usize = 10;

const BUNDLED_SEED: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/seed/timeline.json"
));

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimelineSeed {
    pub categories: [String; CATEGORIES_PER_POSITION],
    pub positions: Vec<PositionSeed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PositionSeed {
    pub label: String,
    pub time: String,
    pub description: String,
}

impl TimelineSeed {
    /// Decode and validate the seed compiled into the crate.
    pub fn bundled() -> Result<Self, TimelineError> {
        Self::from_json(BUNDLED_SEED)
    }

    pub fn from_json(raw: &str) -> Result<Self, TimelineError> {
        let seed: Self = serde_json::from_str(raw)?;
        seed.validate()?;
        Ok(seed)
    }

    pub fn validate(&self) -> Result<(), TimelineError> {
        if self.positions.is_empty() {
            return Err(TimelineError::NoPositions);
        }

        let mut seen = HashSet::new();
        for name in &self.categories {
            if !seen.insert(name.as_str()) {
                return Err(TimelineError::DuplicateCategory { name: name.clone() });
            }
        }

        Ok(())
    }
}
