//! Gateway inventory and statistics API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::mist::client::segment;
use crate::mist::MistClient;

use super::models::{DeviceStats, Gateway};

impl MistClient {
    /// List gateway inventory records of a site
    pub async fn list_gateway_devices(&self, site_id: &str, limit: u32) -> Result<Vec<Gateway>> {
        let path = format!(
            "/sites/{}/devices?type={}&limit={}",
            segment(site_id),
            api::GATEWAY_TYPE,
            limit
        );
        debug!("Fetching gateway inventory for site {}", site_id);
        self.fetch_list(&path, "devices").await
    }

    /// List statistics for all gateways of a site
    pub async fn list_gateway_stats(&self, site_id: &str, limit: u32) -> Result<Vec<DeviceStats>> {
        let path = format!(
            "/sites/{}/stats/devices?type={}&limit={}",
            segment(site_id),
            api::GATEWAY_TYPE,
            limit
        );
        debug!("Fetching gateway stats for site {}", site_id);
        self.fetch_list(&path, "stats").await
    }

    /// Statistics for a single gateway
    pub async fn get_gateway_stats(&self, site_id: &str, device_id: &str) -> Result<DeviceStats> {
        let path = format!(
            "/sites/{}/stats/devices/{}?type={}",
            segment(site_id),
            segment(device_id),
            api::GATEWAY_TYPE
        );
        debug!("Fetching stats for device {} at site {}", device_id, site_id);
        self.fetch_object(&path, "single device stats").await
    }
}
