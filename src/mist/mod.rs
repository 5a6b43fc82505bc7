//! Mist API client module
//!
//! This module provides credential resolution and the calls used to browse
//! sites, gateway inventory and gateway statistics.

mod client;
mod credentials;
pub mod gateways;
pub mod record;
pub mod sites;
pub mod traits;

pub use client::MistClient;
pub use credentials::{normalize_base_url, parse_credentials, CredentialResolver, Credentials};
pub use gateways::{DeviceStats, Gateway, InterfaceStat, StatsIndex};
pub use record::Record;
pub use sites::{visible_sites, Site};
pub use traits::{ListResponse, MistResource};
