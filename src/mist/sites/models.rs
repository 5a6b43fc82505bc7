//! Site data models

use serde_json::Value;

use crate::config::workflow;
use crate::mist::traits::MistResource;

/// Site record from the Mist API (passthrough fields kept in `raw`)
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    raw: Value,
}

impl MistResource for Site {
    fn from_raw(raw: Value) -> Self {
        Self { raw }
    }

    fn raw(&self) -> &Value {
        &self.raw
    }
}

impl Site {
    /// Site name, empty when absent
    pub fn name(&self) -> &str {
        self.record().str_or(&["name"], "")
    }

    /// Menu label: `name (id)`
    pub fn label(&self) -> String {
        let name = self.record().str_or(&["name"], "unnamed-site");
        format!("{} ({})", name, self.id())
    }

    /// True for the organization's reserved default site
    pub fn is_reserved(&self) -> bool {
        self.name().to_lowercase() == workflow::RESERVED_SITE_NAME
    }
}

/// Sites shown in the selection menu
///
/// The reserved default site is hidden unless hiding it would leave the
/// menu empty. Server order is preserved.
pub fn visible_sites(sites: Vec<Site>) -> Vec<Site> {
    if sites.iter().all(Site::is_reserved) {
        return sites;
    }
    sites.into_iter().filter(|s| !s.is_reserved()).collect()
}
