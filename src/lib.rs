pub mod config;
pub mod observability;
mod planner;
mod store;

pub use config::Config;
pub use planner::{Planner, SyncStatus};
pub use store::{DocumentStore, MemoryStore};
