//! Common traits for Mist resources

use serde::Deserialize;
use serde_json::Value;

use crate::mist::record::Record;

/// Common trait for records returned by the Mist API (sites, devices, stats)
///
/// Resources keep the full JSON record so raw output can reproduce the
/// retrieved structure exactly; typed accessors read through [`Record`].
pub trait MistResource: Sized {
    /// Wrap a raw JSON record
    fn from_raw(raw: Value) -> Self;

    /// The raw JSON record as retrieved
    fn raw(&self) -> &Value;

    /// Defensive accessor view over the record
    fn record(&self) -> Record<'_> {
        Record::new(self.raw())
    }

    /// Resource identifier (numbers stringified), empty when absent
    fn id(&self) -> String {
        self.record().first_key(&["id"]).unwrap_or_default()
    }
}

/// Accepted shapes for list endpoints
///
/// Endpoints answer either with a bare array or with an object wrapping
/// the array under `results`.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum ListResponse {
    Bare(Vec<Value>),
    Wrapped { results: Vec<Value> },
}

impl ListResponse {
    /// Consume self and return the items
    pub fn into_items(self) -> Vec<Value> {
        match self {
            ListResponse::Bare(items) => items,
            ListResponse::Wrapped { results } => results,
        }
    }
}
