//! Format - Formatting Utilities

use chrono::{DateTime, Local};

/// Format time with milliseconds
pub fn format_time_ms(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S%.3f").to_string()
}

/// Format a metric value with one decimal and its unit, e.g. "2.5%"
pub fn format_metric(value: f64, unit: &str) -> String {
    // Avoid rendering "-0.0"
    let value = if value.abs() < 0.05 { 0.0 } else { value };
    format!("{value:.1}{unit}")
}

/// Format a signed difference from the baseline, e.g. "+0.4"
pub fn format_delta(delta: f64) -> String {
    if delta.abs() < 0.05 {
        "±0.0".to_string()
    } else {
        format!("{delta:+.1}")
    }
}

/// Format an axis tick, dropping a trailing ".0"
pub fn format_tick(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics() {
        assert_eq!(format_metric(2.5, "%"), "2.5%");
        assert_eq!(format_metric(4.0, ""), "4.0");
        assert_eq!(format_metric(-0.1, "%"), "-0.1%");
        assert_eq!(format_metric(-0.0, "%"), "0.0%");
    }

    #[test]
    fn deltas() {
        assert_eq!(format_delta(0.4), "+0.4");
        assert_eq!(format_delta(-1.9), "-1.9");
        assert_eq!(format_delta(0.0), "±0.0");
    }

    #[test]
    fn ticks() {
        assert_eq!(format_tick(2.0), "2");
        assert_eq!(format_tick(-2.0), "-2");
        assert_eq!(format_tick(2.5), "2.5");
        assert_eq!(format_tick(0.30000000000000004), "0.3");
    }
}
