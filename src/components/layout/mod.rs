//! Layout Components
//!
//! Header and run history panel.

pub mod header;
pub mod run_history;
