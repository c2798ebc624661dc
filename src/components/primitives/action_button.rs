//! Action Button Component
//!
//! Full-width call-to-action used under each card: a tone, an optional
//! leading icon and an optional keyboard hint on the right.

use gpui::{
    App, ClickEvent, ElementId, FontWeight, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*,
    px, svg,
};

use crate::assets::PolicyIcon;
use crate::theme::colors::SimColors;
use crate::theme::typography::Typography;

/// Colour family of an action button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTone {
    /// Runs the simulation (cyan)
    Run,
    /// Produces a document from the results (indigo)
    Report,
}

impl ButtonTone {
    /// Resting and hovered background
    fn colors(self) -> (Rgba, Rgba) {
        match self {
            ButtonTone::Run => (SimColors::button_primary_bg(), SimColors::button_primary_hover()),
            ButtonTone::Report => (
                SimColors::button_secondary_bg(),
                SimColors::button_secondary_hover(),
            ),
        }
    }
}

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

#[derive(IntoElement)]
pub struct ActionButton {
    id: ElementId,
    label: SharedString,
    tone: ButtonTone,
    icon: Option<PolicyIcon>,
    shortcut: Option<SharedString>,
    on_click: ClickHandler,
}

impl ActionButton {
    pub fn new(
        id: impl Into<ElementId>,
        label: impl Into<SharedString>,
        tone: ButtonTone,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            tone,
            icon: None,
            shortcut: None,
            on_click: Box::new(on_click),
        }
    }

    pub fn icon(mut self, icon: PolicyIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Keyboard hint shown at the right edge
    pub fn shortcut(mut self, shortcut: impl Into<SharedString>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }
}

impl RenderOnce for ActionButton {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg, hover_bg) = self.tone.colors();
        let on_click = self.on_click;

        div()
            .id(self.id)
            .relative()
            .w_full()
            .px_4()
            .py_3()
            .flex()
            .items_center()
            .justify_center()
            .gap_2()
            .bg(bg)
            .hover(|s| s.bg(hover_bg))
            .rounded_lg()
            .cursor_pointer()
            .text_color(SimColors::button_text())
            .text_size(px(Typography::TEXT_BASE))
            .font_weight(FontWeight::BOLD)
            .on_click(move |event, window, cx| on_click(event, window, cx))
            .when_some(self.icon, |el, icon| {
                el.child(
                    svg()
                        .path(icon.path())
                        .size(px(18.0))
                        .text_color(SimColors::button_text()),
                )
            })
            .child(self.label)
            .when_some(self.shortcut, |el, shortcut| {
                el.child(
                    div()
                        .absolute()
                        .right_4()
                        .px_2()
                        .rounded_sm()
                        .bg(SimColors::backdrop())
                        .text_size(px(Typography::TEXT_XS))
                        .font_weight(FontWeight::NORMAL)
                        .child(shortcut),
                )
            })
    }
}
