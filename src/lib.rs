//! gwstats - Browse Mist sites and view live gateway statistics
//!
//! A CLI tool to look up WAN gateway health on the Juniper Mist cloud.
//!
//! # Features
//!
//! - Credential file in JSON, `key=value` or three-line form
//! - Interactive site and gateway menus
//! - Direct lookup by site and device id
//! - Human-readable summaries or raw JSON
//!
//! # Example
//!
//! ```bash
//! # Interactive menus (credentials from ./Token-Org-URL.txt)
//! gwstats
//!
//! # Every gateway's stats for one site
//! gwstats --site 978c48e6-6ef6-11e6-8bbf-02e208b2d34f
//!
//! # One device, raw JSON
//! gwstats --site <site_id> --device-id <device_id> --json
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod mist;
pub mod output;
pub mod ui;
pub mod workflow;

pub use cli::{Cli, OutputFormat};
pub use error::{GwError, Result};
pub use mist::{
    normalize_base_url, parse_credentials, CredentialResolver, Credentials, DeviceStats, Gateway,
    MistClient, MistResource, Site, StatsIndex,
};
pub use output::{render_device, render_devices};
pub use ui::Prompt;
pub use workflow::{run_direct, InteractiveSession};
