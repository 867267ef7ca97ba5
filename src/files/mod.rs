//! Input file handling.

pub mod resolve;

pub use resolve::{find_combat_log, resolve_input};
