//! Save record codec and on-disk save management.

mod manager;
mod record;

pub use manager::SaveManager;
pub use record::{from_record, to_record, SaveRecord};
