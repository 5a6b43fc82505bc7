//! Gateway inventory and statistics module

mod api;
mod index;
mod models;

pub use index::StatsIndex;
pub use models::{DeviceStats, Gateway, InterfaceStat};
