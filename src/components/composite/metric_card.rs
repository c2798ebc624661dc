//! Metric Card Component

use gpui::{
    App, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div, px,
    svg,
};

use crate::assets::PolicyIcon;
use crate::domain::simulation::Metric;
use crate::theme::colors::SimColors;
use crate::theme::typography::Typography;
use crate::utils::format::{format_delta, format_metric};

/// A single outcome figure with its change from baseline
#[derive(IntoElement)]
pub struct MetricCard {
    metric: Metric,
    label: SharedString,
    value: f64,
    baseline: f64,
}

impl MetricCard {
    pub fn new(metric: Metric, label: impl Into<SharedString>, value: f64, baseline: f64) -> Self {
        Self {
            metric,
            label: label.into(),
            value,
            baseline,
        }
    }
}

impl RenderOnce for MetricCard {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let color = SimColors::metric(self.metric);

        let mut heading = div().flex().items_center().justify_center().text_color(color);
        if let Some(icon) = PolicyIcon::from_name(self.metric.icon_name()) {
            heading = heading.child(svg().path(icon.path()).size(px(20.0)).mr_2().text_color(color));
        }

        div()
            .flex_1()
            .p_4()
            .rounded_lg()
            .bg(SimColors::panel_bg())
            .flex()
            .flex_col()
            .items_center()
            .child(heading.child(self.label))
            .child(
                div()
                    .mt_1()
                    .text_size(px(Typography::TEXT_2XL))
                    .font_weight(FontWeight::BOLD)
                    .text_color(SimColors::text_heading())
                    .child(format_metric(self.value, self.metric.unit())),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(SimColors::text_muted())
                    .child(format_delta(self.value - self.baseline)),
            )
    }
}
