//! Modal Component
//!
//! A full-window overlay with a titled card. Used for the whitepaper.

use gpui::{
    AnyElement, App, ClickEvent, FontWeight, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
    relative, svg,
};

use crate::assets::PolicyIcon;
use crate::constants::MODAL_MAX_WIDTH;
use crate::theme::colors::SimColors;
use crate::theme::typography::Typography;

/// Modal component
#[derive(IntoElement)]
pub struct Modal {
    title: SharedString,
    icon: Option<PolicyIcon>,
    children: Vec<AnyElement>,
    on_close: Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl Modal {
    /// Create a new modal
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            children: Vec::new(),
            on_close: None,
        }
    }

    /// Show an icon before the title
    pub fn icon(mut self, icon: PolicyIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Add a child element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Set the close handler
    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let on_close = self.on_close;

        // Backdrop
        div()
            .id("modal-backdrop")
            .absolute()
            .inset_0()
            .occlude()
            .bg(SimColors::backdrop())
            .flex()
            .items_center()
            .justify_center()
            .p_4()
            .child(
                // Modal container
                div()
                    .id("modal-card")
                    .relative()
                    .w_full()
                    .max_w(px(MODAL_MAX_WIDTH))
                    .max_h(relative(0.9))
                    .overflow_y_scroll()
                    .p_6()
                    .bg(SimColors::card_bg())
                    .border_1()
                    .border_color(SimColors::border_subtle())
                    .rounded_xl()
                    .shadow_lg()
                    .flex()
                    .flex_col()
                    // Close button
                    .child(
                        div()
                            .id("modal-close")
                            .absolute()
                            .top_4()
                            .right_4()
                            .size(px(28.0))
                            .rounded_md()
                            .flex()
                            .items_center()
                            .justify_center()
                            .cursor_pointer()
                            .text_color(SimColors::text_secondary())
                            .hover(|s| s.text_color(SimColors::text_heading()))
                            .when_some(on_close, |el, handler| {
                                el.on_click(move |_event: &ClickEvent, window, cx| {
                                    handler(window, cx);
                                })
                            })
                            .child(
                                svg()
                                    .path(PolicyIcon::X.path())
                                    .size(px(24.0))
                                    .text_color(SimColors::text_secondary()),
                            ),
                    )
                    // Header
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .mb_6()
                            .when_some(self.icon, |el, icon| {
                                el.child(
                                    svg()
                                        .path(icon.path())
                                        .size(px(32.0))
                                        .mr_4()
                                        .text_color(SimColors::accent()),
                                )
                            })
                            .child(
                                div()
                                    .text_size(px(Typography::TEXT_2XL))
                                    .font_weight(FontWeight::BOLD)
                                    .text_color(SimColors::text_heading())
                                    .child(self.title),
                            ),
                    )
                    // Content
                    .child(div().flex().flex_col().gap_4().children(self.children)),
            )
    }
}
