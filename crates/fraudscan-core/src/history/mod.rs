//! Scan history domain module.
//!
//! - `model`: `HistoryEntry`
//! - `store`: pure, bounded, deduplicated snapshot (`HistoryStore`)
//! - `repository`: persistence trait (`HistoryRepository`)
//! - `cache`: snapshot + repository, the only place history is written (`HistoryCache`)

mod cache;
mod model;
mod repository;
mod store;

pub use cache::HistoryCache;
pub use model::HistoryEntry;
pub use repository::{HistoryRepository, MemoryHistoryRepository};
pub use store::{HISTORY_LIMIT, HistoryStore};
