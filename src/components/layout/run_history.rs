//! Run History Panel
//!
//! Docked at the bottom of the window. Collapsed it shows the latest run;
//! expanded it lists each run with its policy package and outcomes, plus
//! selection changes and whitepaper requests in between.

use gpui::{
    AnyElement, ClickEvent, Context, FontWeight, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::app::entities::AppEntities;
use crate::constants::{
    HISTORY_PANEL_COLLAPSED_HEIGHT, HISTORY_PANEL_EXPANDED_HEIGHT, HISTORY_VISIBLE,
};
use crate::domain::policy::{PolicyDimension, PolicySelections};
use crate::domain::simulation::{BASELINE, Metric, SimulationResults};
use crate::i18n::{Locale, t};
use crate::state::activity_state::{Activity, ActivityEntry};
use crate::theme::colors::SimColors;
use crate::theme::typography::Typography;
use crate::utils::format::{format_delta, format_metric, format_time_ms};

/// Compact policy package, e.g. "Edu Strong · Anti Weak · Eth Moderate"
pub fn package_label(locale: Locale, selections: &PolicySelections) -> String {
    PolicyDimension::ALL
        .iter()
        .map(|&dimension| {
            format!(
                "{} {}",
                t(locale, dimension.short_key()),
                t(locale, selections.get(dimension).label_key())
            )
        })
        .collect::<Vec<_>>()
        .join(" · ")
}

/// Collapsible run history
pub struct RunHistoryPanel {
    entities: AppEntities,
    expanded: bool,
}

impl RunHistoryPanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.activity, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            expanded: false,
        }
    }

    fn toggle_expanded(&mut self, cx: &mut Context<Self>) {
        self.expanded = !self.expanded;
        cx.notify();
    }

    fn render_outcomes(results: &SimulationResults) -> impl IntoElement {
        div().flex().items_center().gap_4().children(Metric::ALL.map(|metric| {
            let value = metric.value(results);
            div()
                .flex()
                .items_center()
                .gap_1()
                .child(
                    div()
                        .text_color(SimColors::metric(metric))
                        .font_weight(FontWeight::SEMIBOLD)
                        .child(format_metric(value, metric.unit())),
                )
                .child(
                    div()
                        .text_size(px(Typography::TEXT_XS))
                        .text_color(SimColors::text_muted())
                        .child(format_delta(value - metric.value(&BASELINE))),
                )
        }))
    }

    fn render_entry(locale: Locale, entry: &ActivityEntry) -> AnyElement {
        let time = div()
            .flex_none()
            .min_w(px(85.0))
            .text_size(px(11.0))
            .text_color(SimColors::text_muted())
            .child(format_time_ms(&entry.timestamp));

        let row = div()
            .w_full()
            .flex()
            .items_center()
            .gap_3()
            .py_px()
            .text_size(px(12.0))
            .child(time);

        match entry.activity {
            Activity::Ran {
                run,
                selections,
                results,
            } => row
                .child(
                    div()
                        .flex_none()
                        .min_w(px(36.0))
                        .font_weight(FontWeight::BOLD)
                        .text_color(SimColors::accent())
                        .child(format!("#{run}")),
                )
                .child(
                    div()
                        .flex_1()
                        .text_color(SimColors::text_primary())
                        .child(package_label(locale, &selections)),
                )
                .child(Self::render_outcomes(&results))
                .into_any_element(),
            Activity::Selected { dimension, level } => row
                .child(
                    div()
                        .text_color(SimColors::text_secondary())
                        .child(format!(
                            "{} → {}",
                            t(locale, dimension.title_key()),
                            t(locale, level.label_key())
                        )),
                )
                .into_any_element(),
            Activity::Whitepaper => row
                .child(
                    div()
                        .text_color(SimColors::text_secondary())
                        .child(t(locale, "activity-whitepaper")),
                )
                .into_any_element(),
        }
    }

    fn render_header_button(
        id: &'static str,
        label: impl Into<SharedString>,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut gpui::App) + 'static,
    ) -> impl IntoElement {
        div()
            .id(id)
            .px_2()
            .py_1()
            .rounded_sm()
            .text_color(SimColors::text_muted())
            .text_size(px(11.0))
            .cursor_pointer()
            .hover(|s| s.bg(SimColors::panel_hover()))
            .on_click(on_click)
            .child(label.into())
    }
}

impl Render for RunHistoryPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let history = self.entities.activity.read(cx);
        let expanded = self.expanded;

        let title = div()
            .flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .text_color(SimColors::text_primary())
                    .text_size(px(13.0))
                    .font_weight(FontWeight::MEDIUM)
                    .child(t(locale, "log-title")),
            )
            .child(
                div()
                    .text_color(SimColors::text_muted())
                    .text_size(px(11.0))
                    .child(format!("({} {})", history.run_count(), t(locale, "log-runs"))),
            );

        // Latest outcome stays visible while collapsed
        let last_run = match history.last_run().map(|e| e.activity) {
            Some(Activity::Ran { run, results, .. }) if !expanded => Some(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .text_size(px(12.0))
                    .child(
                        div()
                            .text_color(SimColors::text_muted())
                            .child(format!("{} #{run}", t(locale, "log-last-run"))),
                    )
                    .child(Self::render_outcomes(&results)),
            ),
            _ => None,
        };

        let entities = self.entities.clone();
        let clear = Self::render_header_button(
            "clear-history",
            t(locale, "log-clear"),
            move |_event: &ClickEvent, _window, cx| {
                entities.activity.update(cx, |history, cx| {
                    history.clear();
                    cx.notify();
                });
            },
        );
        let toggle = Self::render_header_button(
            "toggle-history",
            if expanded { "▼" } else { "▲" },
            cx.listener(|this, _event: &ClickEvent, _window, cx| this.toggle_expanded(cx)),
        );

        let mut header = div()
            .h(px(HISTORY_PANEL_COLLAPSED_HEIGHT))
            .w_full()
            .flex_none()
            .px_4()
            .flex()
            .items_center()
            .justify_between()
            .child(title);
        if let Some(last_run) = last_run {
            header = header.child(last_run);
        }
        header = header.child(div().flex().items_center().gap_2().child(clear).child(toggle));

        let mut panel = div()
            .h(px(if expanded {
                HISTORY_PANEL_EXPANDED_HEIGHT
            } else {
                HISTORY_PANEL_COLLAPSED_HEIGHT
            }))
            .w_full()
            .flex_none()
            .flex()
            .flex_col()
            .bg(SimColors::history_panel_bg())
            .border_t_1()
            .border_color(SimColors::border_subtle())
            .child(header);

        if expanded {
            let body = div()
                .id("history-entries")
                .flex_1()
                .overflow_y_scroll()
                .px_4()
                .py_1();

            panel = panel.child(if history.is_empty() {
                body.child(
                    div()
                        .text_size(px(12.0))
                        .text_color(SimColors::text_muted())
                        .child(t(locale, "log-empty")),
                )
            } else {
                body.children(
                    history
                        .recent(HISTORY_VISIBLE)
                        .map(|entry| Self::render_entry(locale, entry)),
                )
            });
        }

        panel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::policy::PolicyLevel;

    #[test]
    fn package_label_lists_every_dimension() {
        let selections = PolicySelections {
            education: PolicyLevel::Strong,
            antitrust: PolicyLevel::Weak,
            ethics: PolicyLevel::Moderate,
        };
        assert_eq!(
            package_label(Locale::EnUS, &selections),
            "Edu Strong · Anti Weak · Eth Moderate"
        );
        assert_eq!(package_label(Locale::ZhCN, &selections), "教育 强 · 反垄断 弱 · 伦理 中");
    }
}
