//! Human-readable device summaries

use chrono::{DateTime, SecondsFormat};

use crate::mist::{DeviceStats, Gateway, MistResource};

const HEAVY_RULE: &str =
    "================================================================================";
const LIGHT_RULE: &str =
    "--------------------------------------------------------------------------------";

/// Compact uptime, e.g. `1d 2h 3m`
pub fn format_uptime(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    let seconds = secs % 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// RFC 3339 timestamp for epoch seconds
pub fn format_epoch(epoch: f64) -> Option<String> {
    if !epoch.is_finite() || epoch < 0.0 {
        return None;
    }
    DateTime::from_timestamp(epoch.trunc() as i64, 0)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// Summary block for one statistics record
pub fn format_device(stats: &DeviceStats) -> String {
    let mut lines = vec![
        HEAVY_RULE.to_string(),
        format!("Device: {}", stats.name()),
    ];

    let id = stats.id();
    if !id.is_empty() {
        lines.push(format!("  ID: {}", id));
    }
    if !stats.model().is_empty() {
        lines.push(format!("  Model: {}", stats.model()));
    }
    if !stats.version().is_empty() {
        lines.push(format!("  Version: {}", stats.version()));
    }
    lines.push(format!("  Status: {}", stats.status()));
    lines.push(format!("  IP: {}", stats.ip()));
    lines.push(format!("  Ext IP: {}", stats.ext_ip()));

    match stats.uptime_secs().filter(|s| *s >= 1.0) {
        Some(secs) => lines.push(format!(
            "  Uptime (s): {} ({})",
            stats.uptime(),
            format_uptime(secs as u64)
        )),
        None => lines.push(format!("  Uptime (s): {}", stats.uptime())),
    }
    if let Some(seen) = stats.last_seen().and_then(format_epoch) {
        lines.push(format!("  Last seen: {}", seen));
    }

    lines.push(format!("  CPU load avg: {}", stats.load_avg()));
    lines.push(format!("  Memory usage: {}%", stats.memory_usage()));

    let interfaces = stats.interfaces();
    if !interfaces.is_empty() {
        lines.push("  Interfaces:".to_string());
        for iface in interfaces {
            lines.push(format!("    - {}:", iface.name));
            lines.push(format!("        usage: {}", iface.port_usage()));
            let network = iface.network_name();
            if !network.is_empty() {
                lines.push(format!("        network: {}", network));
            }
            let ips = iface.ips();
            if !ips.is_empty() {
                lines.push(format!("        ips: {}", ips.join(", ")));
            }
            lines.push(format!("        up: {}", iface.up()));
            lines.push(format!(
                "        rx_pkts: {}, tx_pkts: {}",
                iface.rx_pkts(),
                iface.tx_pkts()
            ));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Summary blocks for every statistics record of a site
pub fn format_devices(stats: &[DeviceStats]) -> String {
    if stats.is_empty() {
        return "No gateway devices found for this site.\n".to_string();
    }

    let mut out = format!("Found {} gateway device(s):\n\n", stats.len());
    for record in stats {
        out.push_str(&format_device(record));
    }
    out
}

/// Inventory block printed as soon as a gateway is picked
pub fn format_inventory(gateway: &Gateway) -> String {
    let lines = [
        LIGHT_RULE.to_string(),
        "Selected gateway (inventory):".to_string(),
        format!("  Name:   {}", gateway.name()),
        format!("  MAC:    {}", gateway.mac()),
        format!("  ID:     {}", gateway.id()),
        format!("  Model:  {}", gateway.model()),
        format!("  Status: {}", gateway.status()),
        LIGHT_RULE.to_string(),
    ];
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
