//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Smallest window the layout still fits in
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Run history panel heights
pub const HISTORY_PANEL_EXPANDED_HEIGHT: f32 = 180.0;
pub const HISTORY_PANEL_COLLAPSED_HEIGHT: f32 = 32.0;

/// Run history ring buffer capacity
pub const ACTIVITY_CAPACITY: usize = 500;

/// Number of history entries rendered at once
pub const HISTORY_VISIBLE: usize = 50;

/// Outcome chart plot area
pub const CHART_PLOT_HEIGHT: f32 = 220.0;
pub const CHART_AXIS_WIDTH: f32 = 40.0;
pub const CHART_BAR_WIDTH: f32 = 28.0;

/// Modal dialog width
pub const MODAL_MAX_WIDTH: f32 = 760.0;

/// Configuration file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "policy-sim.toml";

/// Log file name prefix inside the data directory
pub const LOG_FILE_PREFIX: &str = "policy-sim.log";
