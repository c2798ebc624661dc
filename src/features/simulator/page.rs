//! Simulator Page
//!
//! Policy control panel on the left, simulated outcomes on the right.

use gpui::{
    ClickEvent, Context, FontWeight, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::app::application::run_shortcut_label;
use crate::app::entities::AppEntities;
use crate::assets::PolicyIcon;
use crate::components::composite::bar_chart::BarChart;
use crate::components::composite::card::Card;
use crate::components::composite::icon_header::IconHeader;
use crate::components::composite::metric_card::MetricCard;
use crate::components::primitives::action_button::{ActionButton, ButtonTone};
use crate::components::primitives::radio_option::RadioOption;
use crate::domain::policy::{PolicyDimension, PolicyOption, PolicySelections};
use crate::features::simulator::controller::SimulatorController;
use crate::i18n::{Locale, t};
use crate::theme::colors::SimColors;
use crate::theme::typography::Typography;

/// Simulator page component
pub struct SimulatorPage {
    entities: AppEntities,
    controller: SimulatorController,
}

impl SimulatorPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = SimulatorController::new(entities.clone());

        // Observe simulator changes
        cx.observe(&entities.simulator, |_this, _, cx| cx.notify())
            .detach();

        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            controller,
        }
    }

    fn render_card_title(&self, title: gpui::SharedString) -> impl IntoElement {
        div()
            .w_full()
            .mb_6()
            .flex()
            .justify_center()
            .text_size(px(Typography::TEXT_2XL))
            .font_weight(FontWeight::BOLD)
            .text_color(SimColors::text_heading())
            .child(title)
    }

    fn render_dimension(
        &self,
        dimension: PolicyDimension,
        selections: &PolicySelections,
        locale: Locale,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let selected = selections.get(dimension);

        div()
            .w_full()
            .mb_6()
            .child(IconHeader::new(dimension.icon_name(), t(locale, dimension.title_key())))
            .children(PolicyOption::for_dimension(dimension).map(|option| {
                let level = option.level;
                RadioOption::new(option.id, t(locale, option.label_key))
                    .description(t(locale, option.description_key))
                    .checked(selected == level)
                    .on_select(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                        this.controller.select_policy(dimension, level, cx);
                    }))
            }))
    }

    fn render_controls(&self, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement {
        let selections = *self.entities.simulator.read(cx).selections();

        let mut card = Card::new().child(self.render_card_title(t(locale, "panel-controls")));
        for dimension in PolicyDimension::ALL {
            card = card.child(self.render_dimension(dimension, &selections, locale, cx));
        }

        card.child(
            div().mt_2().child(
                ActionButton::new(
                    "run-simulation",
                    t(locale, "action-run"),
                    ButtonTone::Run,
                    cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.controller.run_simulation(cx);
                    }),
                )
                .shortcut(run_shortcut_label()),
            ),
        )
    }

    fn render_outcomes(&self, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement {
        let entries = self.entities.simulator.read(cx).chart_entries();

        let chart = BarChart::new(entries, |metric| t(locale, metric.label_key()))
            .legend(t(locale, "chart-simulated"), t(locale, "chart-baseline"));

        let cards = div().w_full().mt_6().flex().gap_4().children(entries.map(|entry| {
            MetricCard::new(
                entry.metric,
                t(locale, entry.metric.card_label_key()),
                entry.value,
                entry.baseline,
            )
        }));

        Card::new()
            .child(self.render_card_title(t(locale, "panel-outcomes")))
            .child(div().w_full().mb_6().child(chart))
            .child(cards)
            .child(
                div().mt_8().child(
                    ActionButton::new(
                        "generate-whitepaper",
                        t(locale, "action-whitepaper"),
                        ButtonTone::Report,
                        cx.listener(|this, _event: &ClickEvent, _window, cx| {
                            this.controller.generate_whitepaper(cx);
                        }),
                    )
                    .icon(PolicyIcon::FileText),
                ),
            )
    }
}

impl Render for SimulatorPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;

        div()
            .id("simulator-page")
            .size_full()
            .overflow_y_scroll()
            .px_6()
            .pb_8()
            .child(
                div()
                    .w_full()
                    .flex()
                    .flex_wrap()
                    .items_start()
                    .gap_8()
                    .child(self.render_controls(locale, cx))
                    .child(self.render_outcomes(locale, cx)),
            )
    }
}
