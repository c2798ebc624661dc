//! Radio Option Component
//!
//! A labelled radio row with a description line, one per policy option.

use gpui::{
    App, ClickEvent, ElementId, FontWeight, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::SimColors;
use crate::theme::typography::Typography;

/// A radio option row
#[derive(IntoElement)]
pub struct RadioOption {
    id: ElementId,
    label: SharedString,
    description: Option<SharedString>,
    checked: bool,
    on_select: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl RadioOption {
    /// Create a new radio option
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: None,
            checked: false,
            on_select: None,
        }
    }

    /// Set the description shown under the label
    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the handler called when the row is clicked
    pub fn on_select(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_select = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for RadioOption {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let checked = self.checked;

        let ring_color = if checked {
            SimColors::radio_checked()
        } else {
            SimColors::radio_border()
        };

        let radio = div()
            .size(px(20.0))
            .flex_none()
            .rounded_full()
            .border_2()
            .border_color(ring_color)
            .bg(SimColors::background())
            .flex()
            .items_center()
            .justify_center()
            .when(checked, |el| {
                el.child(div().size(px(10.0)).rounded_full().bg(SimColors::radio_checked()))
            });

        let mut row = div()
            .id(self.id)
            .w_full()
            .p_4()
            .mb_2()
            .bg(SimColors::panel_bg())
            .border_1()
            .border_color(if checked {
                SimColors::radio_checked()
            } else {
                SimColors::border()
            })
            .rounded_lg()
            .cursor_pointer()
            .hover(|s| s.bg(SimColors::panel_hover()))
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_BASE))
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(SimColors::text_primary())
                            .child(self.label),
                    )
                    .child(radio),
            )
            .when_some(self.description, |el, description| {
                el.child(
                    div()
                        .mt_1()
                        .text_size(px(Typography::TEXT_SM))
                        .text_color(SimColors::text_secondary())
                        .child(description),
                )
            });

        if let Some(handler) = self.on_select {
            row = row.on_click(handler);
        }

        row
    }
}
