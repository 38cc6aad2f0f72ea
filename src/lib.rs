//! Investment Simulator - idle investment game engine
//!
//! Tier economy, prestige resets and JSON saves with offline income. A
//! presentation layer drives everything through [`Game`].

pub mod build_info;
pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod prestige;
pub mod save;
pub mod simulator;

pub use catalog::{TierCatalog, TierDefinition};
pub use config::GameConfig;
pub use error::{CatalogError, SaveError};
pub use game::{Game, TierSnapshot};
pub use prestige::PrestigeState;
pub use save::{SaveManager, SaveRecord};
