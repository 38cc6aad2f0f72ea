//! Deterministic balance simulator.
//!
//! Plays the real [`Game`](crate::game::Game) with a greedy strategy in fixed
//! time steps to measure how long each tier and each Ascend takes to reach:
//! - Time to first purchase of every tier
//! - Ascension timeline and points per cycle
//! - Final balance and income

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{AscensionRecord, SimReport, TierUnlock};
pub use runner::{best_purchase, run_simulation};
