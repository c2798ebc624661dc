//! Header Component
//!
//! The application header with title, subtitle and language switcher.

use gpui::{
    ClickEvent, Context, FontWeight, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, px, svg,
};

use crate::app::entities::AppEntities;
use crate::assets::PolicyIcon;
use crate::i18n::t;
use crate::theme::colors::SimColors;
use crate::theme::typography::Typography;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let entities = self.entities.clone();

        div()
            .w_full()
            .pt_8()
            .pb_6()
            .px_6()
            .flex()
            .flex_col()
            .items_center()
            .relative()
            .child(
                div()
                    .text_size(px(Typography::TEXT_4XL))
                    .font_weight(FontWeight::EXTRA_BOLD)
                    .text_color(SimColors::text_heading())
                    .child(t(locale, "app-title")),
            )
            .child(
                div()
                    .mt_2()
                    .text_size(px(Typography::TEXT_LG))
                    .text_color(SimColors::text_secondary())
                    .child(t(locale, "app-subtitle")),
            )
            // Language switcher
            .child(
                div()
                    .id("lang-switcher")
                    .absolute()
                    .top_4()
                    .right_6()
                    .px_3()
                    .py_1()
                    .flex()
                    .items_center()
                    .gap_2()
                    .rounded_md()
                    .bg(SimColors::panel_bg())
                    .text_color(SimColors::text_primary())
                    .text_size(px(13.0))
                    .cursor_pointer()
                    .hover(|s| s.bg(SimColors::panel_hover()))
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        entities.i18n.update(cx, |i18n, cx| {
                            i18n.toggle_locale();
                            tracing::info!(locale = ?i18n.locale, "Locale switched");
                            cx.notify();
                        });
                    })
                    .child(
                        svg()
                            .path(PolicyIcon::Languages.path())
                            .size(px(14.0))
                            .text_color(SimColors::text_primary()),
                    )
                    .child(locale.display_name()),
            )
    }
}
