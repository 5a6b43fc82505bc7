//! UI utilities for terminal interaction
//!
//! This module provides the menu prompts and progress spinners used by the
//! interactive workflow.

mod prompt;
mod spinner;

pub use prompt::{is_quit, Prompt};
pub use spinner::{create_spinner, finish_spinner};
