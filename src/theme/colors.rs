//! Colors - Simulator Theme Colors

use gpui::{Rgba, rgb, rgba};

use crate::domain::simulation::Metric;

/// Dark slate palette - All colors are accessed via associated functions
pub struct SimColors;

impl SimColors {
    // Background colors
    /// Window background
    pub fn background() -> Rgba { rgb(0x111827) }
    /// Card background
    pub fn card_bg() -> Rgba { rgb(0x1f2937) }
    /// Inset panel background (options, metric cards)
    pub fn panel_bg() -> Rgba { rgba(0x37415180) }
    /// Inset panel hover
    pub fn panel_hover() -> Rgba { rgb(0x374151) }
    /// Code/whitepaper block background
    pub fn code_bg() -> Rgba { rgba(0x111827b3) }
    /// Modal backdrop
    pub fn backdrop() -> Rgba { rgba(0x000000b3) }
    /// Log panel background
    pub fn history_panel_bg() -> Rgba { rgb(0x0b1220) }

    // Text colors
    /// Headings
    pub fn text_heading() -> Rgba { rgb(0xffffff) }
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0xe5e7eb) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x9ca3af) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x6b7280) }

    // Accent colors
    /// Icons and focus - Cyan
    pub fn accent() -> Rgba { rgb(0x22d3ee) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0x4b5563) }
    /// Subtle border
    pub fn border_subtle() -> Rgba { rgb(0x374151) }

    // Button colors
    /// Primary button background - Cyan
    pub fn button_primary_bg() -> Rgba { rgb(0x0891b2) }
    /// Primary button hover
    pub fn button_primary_hover() -> Rgba { rgb(0x0e7490) }
    /// Secondary button background - Indigo
    pub fn button_secondary_bg() -> Rgba { rgb(0x4f46e5) }
    /// Secondary button hover
    pub fn button_secondary_hover() -> Rgba { rgb(0x4338ca) }
    /// Button text
    pub fn button_text() -> Rgba { rgb(0xffffff) }

    // Radio colors
    /// Radio ring
    pub fn radio_border() -> Rgba { rgb(0x6b7280) }
    /// Checked radio fill
    pub fn radio_checked() -> Rgba { rgb(0x06b6d4) }

    // Chart colors
    /// Baseline bars
    pub fn chart_baseline() -> Rgba { rgb(0x4b5563) }
    /// Axis lines and labels
    pub fn chart_axis() -> Rgba { rgb(0x9ca3af) }
    /// Grid lines
    pub fn chart_grid() -> Rgba { rgba(0x9ca3af33) }
}

impl SimColors {
    /// Color of a metric's result bar and card heading
    pub fn metric(metric: Metric) -> Rgba {
        match metric {
            Metric::Gdp => rgb(0x34d399),
            Metric::Inequality => rgb(0xf87171),
            Metric::Energy => rgb(0xfbbf24),
        }
    }
}
