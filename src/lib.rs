//! Policy Sim Library
//!
//! This crate provides the application logic for Policy Sim, a desktop
//! simulator that compares the economic, social and environmental outcomes
//! of AI policy choices against a baseline.

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod i18n;
pub mod logging;
pub mod state;
pub mod theme;
pub mod utils;
