//! Output formatting module
//!
//! Pure formatting of statistics records as text summaries or raw JSON.
//! Callers decide where the text goes.

mod json;
mod summary;
mod table;

use crate::cli::OutputFormat;
use crate::mist::DeviceStats;

pub use self::json::{device_json, devices_json, to_sorted_json};
pub use self::summary::{format_device, format_devices, format_epoch, format_inventory, format_uptime};
pub use self::table::gateway_table;

/// Render one statistics record in the requested format
pub fn render_device(stats: &DeviceStats, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_device(stats),
        OutputFormat::Json => device_json(stats) + "\n",
    }
}

/// Render every statistics record of a site in the requested format
pub fn render_devices(stats: &[DeviceStats], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_devices(stats),
        OutputFormat::Json => devices_json(stats) + "\n",
    }
}
