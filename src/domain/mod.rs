//! Domain - Pure Data Structures and the Policy Model
//!
//! These types don't depend on GPUI and represent the business domain.

pub mod chart;
pub mod config;
pub mod policy;
pub mod simulation;
pub mod whitepaper;
