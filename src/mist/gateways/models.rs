//! Gateway data models

use serde_json::Value;

use crate::mist::record::{scalar_to_string, Record};
use crate::mist::traits::MistResource;

/// Gateway inventory record (identity, model, status)
#[derive(Debug, Clone, PartialEq)]
pub struct Gateway {
    raw: Value,
}

impl MistResource for Gateway {
    fn from_raw(raw: Value) -> Self {
        Self { raw }
    }

    fn raw(&self) -> &Value {
        &self.raw
    }
}

impl Gateway {
    pub fn name(&self) -> &str {
        self.record().str_or(&["name", "router_name"], "unnamed")
    }

    pub fn mac(&self) -> &str {
        self.record().str_or(&["mac"], "")
    }

    pub fn model(&self) -> &str {
        self.record().str_or(&["model"], "")
    }

    pub fn status(&self) -> &str {
        self.record().str_or(&["status"], "")
    }

    /// Key used to find this gateway's statistics: id, else MAC, else `_id`
    pub fn stats_key(&self) -> Option<String> {
        self.record().first_key(&["id", "mac", "_id"])
    }
}

/// Live statistics record for one device
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceStats {
    raw: Value,
}

impl MistResource for DeviceStats {
    fn from_raw(raw: Value) -> Self {
        Self { raw }
    }

    fn raw(&self) -> &Value {
        &self.raw
    }

    fn id(&self) -> String {
        self.record().first_key(&["id", "_id"]).unwrap_or_default()
    }
}

impl DeviceStats {
    pub fn name(&self) -> &str {
        self.record()
            .str_or(&["name", "router_name", "_id"], "unknown")
    }

    pub fn model(&self) -> &str {
        self.record().str_or(&["model", "hardware_model"], "")
    }

    pub fn version(&self) -> &str {
        self.record().str_or(&["version"], "")
    }

    pub fn status(&self) -> String {
        self.record().display_or("status", "")
    }

    pub fn ip(&self) -> String {
        self.record().display_or("ip", "")
    }

    pub fn ext_ip(&self) -> String {
        self.record().display_or("ext_ip", "")
    }

    /// Uptime as reported (seconds, possibly fractional)
    pub fn uptime(&self) -> String {
        self.record().display_or("uptime", "0")
    }

    pub fn uptime_secs(&self) -> Option<f64> {
        self.record().f64_field("uptime")
    }

    /// Epoch seconds of the last report, when present
    pub fn last_seen(&self) -> Option<f64> {
        self.record().f64_field("last_seen")
    }

    /// CPU load averages joined for display, `n/a` when absent
    pub fn load_avg(&self) -> String {
        let load = self.record().object("cpu_stat").array("load_avg");
        if load.is_empty() {
            return "n/a".to_string();
        }
        load.iter().map(scalar_to_string).collect::<Vec<_>>().join(", ")
    }

    /// Memory usage percentage for display, `n/a` when absent
    pub fn memory_usage(&self) -> String {
        self.record().object("memory_stat").display_or("usage", "n/a")
    }

    /// Interfaces sorted by name
    pub fn interfaces(&self) -> Vec<InterfaceStat<'_>> {
        self.record()
            .sorted_entries("if_stat")
            .into_iter()
            .map(|(name, record)| InterfaceStat { name, record })
            .collect()
    }

    /// Keys this record can be found under: id, else `_id`, else MAC
    pub fn index_key(&self) -> Option<String> {
        self.record().first_key(&["id", "_id", "mac"])
    }
}

/// One entry of a device's interface map
#[derive(Debug, Clone, Copy)]
pub struct InterfaceStat<'a> {
    pub name: &'a str,
    record: Record<'a>,
}

impl<'a> InterfaceStat<'a> {
    pub fn port_usage(&self) -> String {
        self.record.display_or("port_usage", "")
    }

    pub fn network_name(&self) -> String {
        self.record.display_or("network_name", "")
    }

    pub fn ips(&self) -> Vec<String> {
        self.record.array("ips").iter().map(scalar_to_string).collect()
    }

    pub fn up(&self) -> bool {
        self.record.bool_or("up", false)
    }

    pub fn rx_pkts(&self) -> String {
        self.record.display_or("rx_pkts", "0")
    }

    pub fn tx_pkts(&self) -> String {
        self.record.display_or("tx_pkts", "0")
    }
}
