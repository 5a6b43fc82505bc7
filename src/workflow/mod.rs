//! Site → gateway selection workflow and non-interactive stats fetch

mod direct;
mod interactive;

pub use direct::run_direct;
pub use interactive::InteractiveSession;
