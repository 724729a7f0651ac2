pub mod state;
pub use state::{Category, Overlay, Position, Timeline, TimelineAction};

mod summary;
pub use summary::SummaryView;

mod strip;
pub use strip::TimelineStrip;

mod detail;
pub use detail::DetailOverlay;

mod view;
pub use view::TimelineView;
