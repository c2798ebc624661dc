//! Whitepaper - Placeholder Content

/// Text shown in the whitepaper modal
pub const WHITEPAPER_PLACEHOLDER: &str = "Generated whitepaper content based on simulation results...";
