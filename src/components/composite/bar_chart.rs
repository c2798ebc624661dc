//! Bar Chart Component
//!
//! Grouped bars: each metric's simulated result next to its baseline, both
//! labelled with their values.

use gpui::{
    AnyElement, App, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window, div, px, relative,
};

use crate::constants::{CHART_AXIS_WIDTH, CHART_BAR_WIDTH, CHART_PLOT_HEIGHT};
use crate::domain::chart::{ChartEntry, ChartScale, column_center};
use crate::domain::simulation::Metric;
use crate::theme::colors::SimColors;
use crate::theme::typography::Typography;
use crate::utils::format::{format_metric, format_tick};

const BAR_GAP: f32 = 6.0;
const VALUE_LABEL_HEIGHT: f32 = 16.0;
const GROUP_WIDTH: f32 = CHART_BAR_WIDTH * 2.0 + BAR_GAP;
const X_LABEL_WIDTH: f32 = 112.0;
const X_LABEL_ROW_HEIGHT: f32 = 32.0;

/// Result vs baseline bar chart
#[derive(IntoElement)]
pub struct BarChart {
    entries: [ChartEntry; 3],
    metric_labels: [SharedString; 3],
    result_label: SharedString,
    baseline_label: SharedString,
}

impl BarChart {
    /// `label` maps a metric to its axis label
    pub fn new(entries: [ChartEntry; 3], label: impl Fn(Metric) -> SharedString) -> Self {
        Self {
            metric_labels: entries.map(|e| label(e.metric)),
            entries,
            result_label: SharedString::default(),
            baseline_label: SharedString::default(),
        }
    }

    /// Legend captions for the two series
    pub fn legend(mut self, result: impl Into<SharedString>, baseline: impl Into<SharedString>) -> Self {
        self.result_label = result.into();
        self.baseline_label = baseline.into();
        self
    }

    fn render_axis(scale: &ChartScale) -> impl IntoElement {
        div()
            .relative()
            .flex_none()
            .w(px(CHART_AXIS_WIDTH))
            .h(px(CHART_PLOT_HEIGHT))
            .children(scale.ticks().into_iter().map(|tick| {
                let offset = scale.offset_of(tick, CHART_PLOT_HEIGHT);
                div()
                    .absolute()
                    .right(px(6.0))
                    .top(px(offset - 7.0))
                    .text_size(px(11.0))
                    .text_color(SimColors::chart_axis())
                    .child(format_tick(tick))
            }))
    }

    fn render_grid(scale: &ChartScale) -> Vec<AnyElement> {
        let mut lines: Vec<AnyElement> = scale
            .ticks()
            .into_iter()
            .map(|tick| {
                div()
                    .absolute()
                    .left_0()
                    .right_0()
                    .top(px(scale.offset_of(tick, CHART_PLOT_HEIGHT)))
                    .h(px(1.0))
                    .bg(SimColors::chart_grid())
                    .into_any_element()
            })
            .collect();

        lines.push(
            div()
                .absolute()
                .left_0()
                .right_0()
                .top(px(scale.zero_offset(CHART_PLOT_HEIGHT)))
                .h(px(1.0))
                .bg(SimColors::chart_axis())
                .into_any_element(),
        );

        lines
    }

    fn render_value_label(left: f32, top: f32, text: String, color: gpui::Rgba) -> impl IntoElement {
        div()
            .absolute()
            .left(px(left))
            .top(px(top))
            .w(px(CHART_BAR_WIDTH))
            .flex()
            .justify_center()
            .text_size(px(11.0))
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(color)
            .child(text)
    }

    fn render_group(
        index: usize,
        columns: usize,
        entry: &ChartEntry,
        scale: &ChartScale,
    ) -> impl IntoElement {
        let unit = entry.metric.unit();
        let result = scale.bar(entry.value, CHART_PLOT_HEIGHT);
        let baseline = scale.bar(entry.baseline, CHART_PLOT_HEIGHT);
        let baseline_left = CHART_BAR_WIDTH + BAR_GAP;

        div()
            .absolute()
            .top_0()
            .h_full()
            .left(relative(column_center(index, columns)))
            .ml(px(-GROUP_WIDTH / 2.0))
            .w(px(GROUP_WIDTH))
            .child(
                div()
                    .absolute()
                    .left_0()
                    .top(px(result.top))
                    .w(px(CHART_BAR_WIDTH))
                    .h(px(result.height))
                    .rounded_sm()
                    .bg(SimColors::metric(entry.metric)),
            )
            .child(
                div()
                    .absolute()
                    .left(px(baseline_left))
                    .top(px(baseline.top))
                    .w(px(CHART_BAR_WIDTH))
                    .h(px(baseline.height))
                    .rounded_sm()
                    .bg(SimColors::chart_baseline()),
            )
            .child(Self::render_value_label(
                0.0,
                result.label_top(entry.value, VALUE_LABEL_HEIGHT),
                format_metric(entry.value, unit),
                SimColors::text_primary(),
            ))
            .child(Self::render_value_label(
                baseline_left,
                baseline.label_top(entry.baseline, VALUE_LABEL_HEIGHT),
                format_metric(entry.baseline, unit),
                SimColors::text_muted(),
            ))
    }

    fn render_legend_item(swatches: Vec<gpui::Rgba>, label: SharedString) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .gap_2()
            .child(
                div().flex().gap_0p5().children(
                    swatches
                        .into_iter()
                        .map(|color| div().w(px(6.0)).h(px(12.0)).rounded_sm().bg(color)),
                ),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(SimColors::text_primary())
                    .child(label),
            )
    }
}

impl RenderOnce for BarChart {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let scale = ChartScale::fit(&self.entries);
        let columns = self.entries.len();

        let plot = div()
            .relative()
            .flex_1()
            .h(px(CHART_PLOT_HEIGHT))
            .border_l_1()
            .border_color(SimColors::chart_axis())
            .children(Self::render_grid(&scale))
            .children(
                self.entries
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| Self::render_group(index, columns, entry, &scale)),
            );

        // Same offsets as the plot so each label centres under its group
        let x_labels = div()
            .flex()
            .mt_2()
            .child(div().flex_none().w(px(CHART_AXIS_WIDTH)))
            .child(
                div()
                    .relative()
                    .flex_1()
                    .h(px(X_LABEL_ROW_HEIGHT))
                    .border_l_1()
                    .border_color(gpui::transparent_black())
                    .children(self.metric_labels.into_iter().enumerate().map(|(index, label)| {
                        div()
                            .absolute()
                            .top_0()
                            .left(relative(column_center(index, columns)))
                            .ml(px(-X_LABEL_WIDTH / 2.0))
                            .w(px(X_LABEL_WIDTH))
                            .flex()
                            .justify_center()
                            .text_size(px(Typography::TEXT_XS))
                            .text_color(SimColors::chart_axis())
                            .child(label)
                    })),
            );

        let result_swatches = self.entries.iter().map(|e| SimColors::metric(e.metric)).collect();
        let legend = div()
            .flex()
            .justify_center()
            .gap_6()
            .mt_3()
            .child(Self::render_legend_item(result_swatches, self.result_label))
            .child(Self::render_legend_item(vec![SimColors::chart_baseline()], self.baseline_label));

        div()
            .w_full()
            .flex()
            .flex_col()
            .pt(px(VALUE_LABEL_HEIGHT))
            .child(div().flex().child(Self::render_axis(&scale)).child(plot))
            .child(x_labels)
            .child(legend)
    }
}
