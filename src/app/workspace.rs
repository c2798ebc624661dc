//! Workspace - Main Shell with Layout
//!
//! The workspace is the main container that holds the header, the simulator
//! page and the run history. The whitepaper modal is layered on top of it.

use gpui::{
    App, Context, Entity, FocusHandle, Focusable, FontWeight, InteractiveElement, IntoElement,
    ParentElement, Render, Styled, Window, div, prelude::*, px,
};

use crate::app::application::{CloseWhitepaper, RunSimulation};
use crate::app::entities::AppEntities;
use crate::assets::PolicyIcon;
use crate::components::composite::modal::Modal;
use crate::components::layout::header::Header;
use crate::components::layout::run_history::RunHistoryPanel;
use crate::features::simulator::controller::SimulatorController;
use crate::features::simulator::page::SimulatorPage;
use crate::i18n::t;
use crate::theme::colors::SimColors;
use crate::theme::typography::Typography;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    page: Entity<SimulatorPage>,
    history: Entity<RunHistoryPanel>,
    focus_handle: FocusHandle,
    controller: SimulatorController,
}

impl Workspace {
    pub fn new(entities: AppEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        // Create layout components
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let page = cx.new(|cx| SimulatorPage::new(entities.clone(), cx));
        let history = cx.new(|cx| RunHistoryPanel::new(entities.clone(), cx));

        // Keyboard actions are dispatched from the root
        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        // Observe the whitepaper modal
        cx.observe(&entities.simulator, |_this, _, cx| cx.notify())
            .detach();

        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        let controller = SimulatorController::new(entities.clone());

        Self {
            entities,
            header,
            page,
            history,
            focus_handle,
            controller,
        }
    }

    fn render_whitepaper(&self, content: gpui::SharedString, cx: &mut Context<Self>) -> Modal {
        let locale = self.entities.i18n.read(cx).locale;
        let controller = self.controller.clone();

        Modal::new(t(locale, "whitepaper-title"))
            .icon(PolicyIcon::FileText)
            .child(
                div()
                    .w_full()
                    .p_4()
                    .rounded_md()
                    .bg(SimColors::code_bg())
                    .font_family(Typography::MONO_FAMILY)
                    .text_size(px(Typography::TEXT_SM))
                    .font_weight(FontWeight::NORMAL)
                    .text_color(SimColors::text_primary())
                    .child(content),
            )
            .on_close(move |_window, cx| controller.close_whitepaper(cx))
    }
}

impl Focusable for Workspace {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let whitepaper = self.entities.simulator.read(cx).whitepaper().cloned();
        let modal = whitepaper.map(|content| self.render_whitepaper(content, cx));

        div()
            .relative()
            .size_full()
            .flex()
            .flex_col()
            .bg(SimColors::background())
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(|this, _: &RunSimulation, _window, cx| {
                this.controller.run_simulation(cx);
            }))
            .on_action(cx.listener(|this, _: &CloseWhitepaper, _window, cx| {
                this.controller.close_whitepaper(cx);
            }))
            .child(
                // Header
                self.header.clone(),
            )
            .child(
                // Main content area
                div()
                    .flex_1()
                    .overflow_hidden()
                    .child(self.page.clone()),
            )
            .child(
                // Run history
                self.history.clone(),
            )
            .when_some(modal, |root, modal| root.child(modal))
    }
}
