//! Timeline state model and its update rules.
//!
//! The timeline owns its positions and each position owns a fixed array of
//! categories. The only mutable fields are the per-category `scored` flags and
//! the optional active position index. Every user interaction is a
//! [`TimelineAction`]; [`Timeline::apply`] performs it in place and
//! [`Timeline::reduce`] is the pure previous-state to next-state form.
//!
//! Index arguments that fall outside the timeline are ignored, as is any
//! category action while no position is active.

use crate::core::seed::{PositionSeed, TimelineSeed, CATEGORIES_PER_POSITION};
use crate::core::TimelineError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub scored: bool,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scored: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub label: String,
    pub time: String,
    pub description: String,
    categories: [Category; CATEGORIES_PER_POSITION],
}

impl Position {
    fn from_seed(seed: &PositionSeed, names: &[String; CATEGORIES_PER_POSITION]) -> Self {
        Self {
            label: seed.label.clone(),
            time: seed.time.clone(),
            description: seed.description.clone(),
            categories: names.clone().map(Category::new),
        }
    }

    pub fn categories(&self) -> &[Category; CATEGORIES_PER_POSITION] {
        &self.categories
    }

    /// Number of scored categories, always within `0..=CATEGORIES_PER_POSITION`.
    pub fn score(&self) -> usize {
        self.categories.iter().filter(|c| c.scored).count()
    }

    pub fn max_score(&self) -> usize {
        CATEGORIES_PER_POSITION
    }

    pub fn is_complete(&self) -> bool {
        self.score() == CATEGORIES_PER_POSITION
    }

    fn mark(&mut self, category: usize) -> bool {
        match self.categories.get_mut(category) {
            Some(entry) if !entry.scored => {
                entry.scored = true;
                true
            }
            _ => false,
        }
    }

    fn clear(&mut self) -> bool {
        let changed = self.score() > 0;
        for entry in self.categories.iter_mut() {
            entry.scored = false;
        }
        changed
    }
}

/// One user interaction with the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineAction {
    /// Open the detail overlay on a position, replacing any open one.
    OpenPosition(usize),
    ClosePosition,
    /// Mark a category of the active position as scored.
    MarkCategory(usize),
    /// Clear every category of the active position.
    ResetPosition,
    /// Clear every category of every position. Leaves the overlay as it is.
    ResetAll,
}

/// Whether the detail overlay is shown, and for which position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Idle,
    Detail(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    positions: Vec<Position>,
    active: Option<usize>,
}

impl Timeline {
    /// Build the timeline from the seed compiled into the crate.
    pub fn bundled() -> Result<Self, TimelineError> {
        Self::from_seed(&TimelineSeed::bundled()?)
    }

    pub fn from_seed(seed: &TimelineSeed) -> Result<Self, TimelineError> {
        seed.validate()?;
        let positions = seed
            .positions
            .iter()
            .map(|position| Position::from_seed(position, &seed.categories))
            .collect();

        Ok(Self {
            positions,
            active: None,
        })
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn position(&self, index: usize) -> Option<&Position> {
        self.positions.get(index)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_position(&self) -> Option<&Position> {
        self.active.and_then(|index| self.positions.get(index))
    }

    pub fn overlay(&self) -> Overlay {
        match self.active {
            Some(index) => Overlay::Detail(index),
            None => Overlay::Idle,
        }
    }

    pub fn total_score(&self) -> usize {
        self.positions.iter().map(Position::score).sum()
    }

    pub fn max_score(&self) -> usize {
        self.positions.len() * CATEGORIES_PER_POSITION
    }

    /// Share of all categories scored, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        let max = self.max_score();
        if max == 0 {
            return 0.0;
        }
        (self.total_score() as f64 / max as f64).clamp(0.0, 1.0)
    }

    /// Apply `action` in place. Returns `false` when the action was a no-op.
    pub fn apply(&mut self, action: TimelineAction) -> bool {
        match action {
            TimelineAction::OpenPosition(index) => {
                if index >= self.positions.len() || self.active == Some(index) {
                    return false;
                }
                self.active = Some(index);
                true
            }
            TimelineAction::ClosePosition => self.active.take().is_some(),
            TimelineAction::MarkCategory(category) => match self.active_mut() {
                Some(position) => position.mark(category),
                None => false,
            },
            TimelineAction::ResetPosition => match self.active_mut() {
                Some(position) => position.clear(),
                None => false,
            },
            TimelineAction::ResetAll => self
                .positions
                .iter_mut()
                .fold(false, |changed, position| position.clear() | changed),
        }
    }

    /// Pure form of [`Timeline::apply`]: consume the previous state, return the next.
    pub fn reduce(mut self, action: TimelineAction) -> Self {
        self.apply(action);
        self
    }

    fn active_mut(&mut self) -> Option<&mut Position> {
        let index = self.active?;
        self.positions.get_mut(index)
    }
}
