//! Site module

mod api;
mod models;

pub use models::{visible_sites, Site};
