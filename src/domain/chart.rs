//! Chart - Result vs Baseline Bar Chart Model
//!
//! Pure layout math for the outcome chart; rendering lives in
//! `components::composite::bar_chart`.

use crate::domain::simulation::{BASELINE, Metric, SimulationResults};

/// One bar group: a simulated value next to its baseline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartEntry {
    pub metric: Metric,
    pub value: f64,
    pub baseline: f64,
}

/// Build the three bar groups for a set of results
pub fn chart_entries(results: &SimulationResults) -> [ChartEntry; 3] {
    Metric::ALL.map(|metric| ChartEntry {
        metric,
        value: metric.value(results),
        baseline: metric.value(&BASELINE),
    })
}

/// Vertical placement of a bar inside the plot area, in pixels from the top
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub top: f32,
    pub height: f32,
}

impl BarGeometry {
    /// Top of a value label sitting on the outer end of the bar
    pub fn label_top(&self, value: f64, label_height: f32) -> f32 {
        if value >= 0.0 {
            self.top - label_height
        } else {
            self.top + self.height + 2.0
        }
    }
}

/// Horizontal centre of column `index` out of `columns`, as a fraction of the row width
///
/// Bar groups and their axis labels are both placed with this, so a label
/// always sits under its group whatever the label's own width.
pub fn column_center(index: usize, columns: usize) -> f32 {
    if columns == 0 {
        return 0.5;
    }
    (index as f32 + 0.5) / columns as f32
}

/// Value axis of the chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScale {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

const TARGET_TICKS: f64 = 4.0;

/// Round a raw step up to 1, 2, 2.5 or 5 times a power of ten
fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 2.5 {
        2.5
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

impl ChartScale {
    /// Fit an axis that contains every value, every baseline and zero
    pub fn fit(entries: &[ChartEntry]) -> Self {
        let values = entries.iter().flat_map(|e| [e.value, e.baseline]);
        let (upper, lower) = values.fold((0.0f64, 0.0f64), |(upper, lower), v| {
            (upper.max(v), lower.max(-v))
        });

        let span = upper + lower;
        if span <= 0.0 {
            return Self {
                min: 0.0,
                max: 1.0,
                step: nice_step(1.0 / TARGET_TICKS),
            };
        }

        let step = nice_step(span / TARGET_TICKS);
        Self {
            min: -(lower / step).ceil() * step,
            max: (upper / step).ceil() * step,
            step,
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Distance of `value` from the top of a plot of the given height
    pub fn offset_of(&self, value: f64, plot_height: f32) -> f32 {
        ((self.max - value) / self.span()) as f32 * plot_height
    }

    /// Distance of the zero line from the top of the plot
    pub fn zero_offset(&self, plot_height: f32) -> f32 {
        self.offset_of(0.0, plot_height)
    }

    /// Place a bar for `value`; positive bars rise from zero, negative bars hang below it
    pub fn bar(&self, value: f64, plot_height: f32) -> BarGeometry {
        let zero = self.zero_offset(plot_height);
        let height = (value.abs() / self.span()) as f32 * plot_height;
        if value >= 0.0 {
            BarGeometry {
                top: zero - height,
                height,
            }
        } else {
            BarGeometry { top: zero, height }
        }
    }

    /// Tick values from the bottom of the axis to the top
    pub fn ticks(&self) -> Vec<f64> {
        let count = (self.span() / self.step).round() as usize;
        (0..=count)
            .map(|i| self.min + i as f64 * self.step)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(metric: Metric, value: f64, baseline: f64) -> ChartEntry {
        ChartEntry {
            metric,
            value,
            baseline,
        }
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!((actual - expected).abs() < 1e-3, "{actual} != {expected}");
    }

    #[test]
    fn three_groups_paired_with_baseline() {
        let results = SimulationResults {
            gdp: 3.1,
            inequality: 2.2,
            energy: -0.1,
        };
        let entries = chart_entries(&results);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], entry(Metric::Gdp, 3.1, BASELINE.gdp));
        assert_eq!(entries[1], entry(Metric::Inequality, 2.2, BASELINE.inequality));
        assert_eq!(entries[2], entry(Metric::Energy, -0.1, BASELINE.energy));
    }

    #[test]
    fn nice_steps() {
        assert_eq!(nice_step(1.0), 1.0);
        assert_eq!(nice_step(1.5), 2.0);
        assert_eq!(nice_step(2.2), 2.5);
        assert_eq!(nice_step(3.0), 5.0);
        assert_eq!(nice_step(7.0), 10.0);
        assert_eq!(nice_step(0.0), 1.0);
    }

    #[test]
    fn positive_only_scale() {
        let scale = ChartScale::fit(&chart_entries(&BASELINE));
        assert_eq!(scale.min, 0.0);
        assert_eq!(scale.max, 4.0);
        assert_eq!(scale.step, 1.0);
        assert_eq!(scale.ticks(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);

        let bar = scale.bar(2.0, 100.0);
        assert_eq!(bar, BarGeometry { top: 50.0, height: 50.0 });
        assert_eq!(scale.bar(0.0, 100.0).height, 0.0);
        assert_eq!(scale.offset_of(4.0, 100.0), 0.0);
        assert_eq!(scale.offset_of(1.0, 100.0), 75.0);
    }

    #[test]
    fn negative_values_hang_below_zero() {
        let entries = [
            entry(Metric::Gdp, 4.0, 2.0),
            entry(Metric::Inequality, 1.0, 1.0),
            entry(Metric::Energy, -2.0, 1.0),
        ];
        let scale = ChartScale::fit(&entries);
        assert_eq!(scale.min, -2.0);
        assert_eq!(scale.max, 4.0);

        let zero = scale.zero_offset(120.0);
        assert_close(zero, 80.0);

        let down = scale.bar(-2.0, 120.0);
        assert_eq!(down.top, zero);
        assert_close(down.height, 40.0);

        let up = scale.bar(4.0, 120.0);
        assert_close(up.top, 0.0);
        assert_close(up.height, 80.0);
    }

    #[test]
    fn all_zero_has_unit_span() {
        let entries = [
            entry(Metric::Gdp, 0.0, 0.0),
            entry(Metric::Inequality, 0.0, 0.0),
            entry(Metric::Energy, 0.0, 0.0),
        ];
        let scale = ChartScale::fit(&entries);
        assert_eq!(scale.span(), 1.0);
        assert_eq!(scale.bar(0.0, 50.0).height, 0.0);
    }

    #[test]
    fn bars_stay_inside_plot() {
        use crate::domain::policy::PolicySelections;
        use crate::domain::simulation::run_simulation;

        for selections in PolicySelections::all_combinations() {
            let entries = chart_entries(&run_simulation(&selections));
            let scale = ChartScale::fit(&entries);
            for e in entries {
                for v in [e.value, e.baseline] {
                    let bar = scale.bar(v, 200.0);
                    assert!(bar.height >= 0.0);
                    assert!(bar.top >= -0.01);
                    assert!(bar.top + bar.height <= 200.01);
                }
            }
        }
    }

    #[test]
    fn columns_are_evenly_centred() {
        assert_close(column_center(0, 3), 1.0 / 6.0);
        assert_close(column_center(1, 3), 0.5);
        assert_close(column_center(2, 3), 5.0 / 6.0);
        assert_close(column_center(0, 0), 0.5);
    }

    #[test]
    fn labels_sit_outside_the_bar() {
        let scale = ChartScale {
            min: -2.0,
            max: 4.0,
            step: 1.0,
        };
        let up = scale.bar(3.0, 120.0);
        assert_close(up.label_top(3.0, 16.0), up.top - 16.0);

        let down = scale.bar(-1.0, 120.0);
        assert_close(down.label_top(-1.0, 16.0), down.top + down.height + 2.0);
        assert!(down.label_top(-1.0, 16.0) > scale.zero_offset(120.0));
    }
}
