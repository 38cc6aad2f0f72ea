// Catalog layout
pub const PAGE_SIZE: usize = 24;
pub const COST_TO_RATE_RATIO: f64 = 50.0;

// Cost curve: base_cost * COST_GROWTH^level
pub const COST_GROWTH: f64 = 1.15;

// Level bonus: x4 at level 200, x4 per 25 levels past 200, x100 per 1000 levels past 200.
// Levels above LEVEL_BONUS_CAP add no further bonus.
pub const LEVEL_BONUS_START: u32 = 200;
pub const LEVEL_BONUS_CAP: u32 = 8000;
pub const LEVEL_BONUS_ACTIVATION: f64 = 4.0;
pub const LEVEL_BONUS_STEP: u32 = 25;
pub const LEVEL_BONUS_STEP_FACTOR: f64 = 4.0;
pub const LEVEL_BONUS_MILESTONE: u32 = 1000;
pub const LEVEL_BONUS_MILESTONE_FACTOR: f64 = 100.0;

// Purchase batch sizes, cycled in order
pub const PURCHASE_MULTIPLIERS: [u32; 5] = [1, 10, 25, 100, 1000];

// Manual click: CLICK_BASE + CLICK_RATE_FRACTION * total rate once tier 0 is owned
pub const CLICK_BASE: f64 = 0.01;
pub const CLICK_RATE_FRACTION: f64 = 0.1;

// Prestige
pub const ASCEND_GATE_TIER: usize = 32;
pub const ASCENSION_POWER_PER_POINT: f64 = 0.01;
pub const TRANSCENDENT_POWER_PER_POINT: f64 = 0.001;
pub const TRANSCEND_MIN_POINTS: u64 = 1;

// Offline breakdown
pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 60 * 60;
pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

// Persistence
pub const SAVE_FILE_NAME: &str = "save.json";
pub const APP_NAME: &str = "investment-sim";
