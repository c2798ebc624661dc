//! Simulator Feature
//!
//! Policy control panel, outcome chart and whitepaper actions.

pub mod controller;
pub mod page;
