//! Non-interactive stats fetch (`--site [--device-id]`)

use log::debug;
use std::io::Write;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::mist::MistClient;
use crate::output::{render_device, render_devices};

/// Fetch stats for one device, or all gateways of a site, and write them out
pub async fn run_direct<W: Write>(
    client: &MistClient,
    site_id: &str,
    device_id: Option<&str>,
    format: OutputFormat,
    limit: u32,
    out: &mut W,
) -> Result<()> {
    match device_id {
        Some(device_id) => {
            debug!("Direct stats fetch for device {} at site {}", device_id, site_id);
            let stats = client.get_gateway_stats(site_id, device_id).await?;
            write!(out, "{}", render_device(&stats, format))?;
        }
        None => {
            debug!("Direct stats fetch for all gateways at site {}", site_id);
            let stats = client.list_gateway_stats(site_id, limit).await?;
            write!(out, "{}", render_devices(&stats, format))?;
        }
    }
    out.flush()?;
    Ok(())
}
