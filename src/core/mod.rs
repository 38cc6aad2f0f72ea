//! Economy core: tier math, progression engine and offline accounting.

pub mod arcs;
pub mod constants;
pub mod engine;
pub mod format;
pub mod offline;
pub mod tier;

pub use arcs::{current_arc, StoryArc};
pub use engine::{ProgressionEngine, PurchaseResult};
pub use format::format_number;
pub use offline::{LevelRestore, OfflineDuration, OfflineReport};
pub use tier::TierState;
