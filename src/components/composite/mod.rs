//! Composite Components
//!
//! Cards, chart, modal and other components built from primitives.

pub mod bar_chart;
pub mod card;
pub mod icon_header;
pub mod metric_card;
pub mod modal;
