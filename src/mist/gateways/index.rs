//! Per-site lookup from gateway inventory to statistics records

use log::debug;
use std::collections::HashMap;

use super::models::{DeviceStats, Gateway};

/// Statistics records of one site keyed by id, else internal id, else MAC
///
/// Built once per gateway menu from the batch statistics listing.
#[derive(Debug, Default)]
pub struct StatsIndex {
    by_key: HashMap<String, DeviceStats>,
}

impl StatsIndex {
    /// Index records; later records replace earlier ones with the same key
    pub fn build(stats: Vec<DeviceStats>) -> Self {
        let mut by_key = HashMap::with_capacity(stats.len());
        for record in stats {
            match record.index_key() {
                Some(key) => {
                    by_key.insert(key, record);
                }
                None => debug!("Skipping statistics record without id, _id or mac"),
            }
        }
        Self { by_key }
    }

    /// Statistics for an inventory record
    ///
    /// Looks up the gateway's own key first, then its MAC, which covers
    /// endpoints that key statistics solely by MAC.
    pub fn lookup(&self, gateway: &Gateway) -> Option<&DeviceStats> {
        gateway
            .stats_key()
            .and_then(|key| self.by_key.get(&key))
            .or_else(|| match gateway.mac() {
                "" => None,
                mac => self.by_key.get(mac),
            })
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
