//! Card Component
//!
//! A rounded panel that groups related content.

use gpui::{AnyElement, App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, px};

use crate::theme::colors::SimColors;

/// Panel container
#[derive(IntoElement)]
pub struct Card {
    children: Vec<AnyElement>,
}

impl Card {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .flex_1()
            .min_w(px(360.0))
            .p_6()
            .flex()
            .flex_col()
            .bg(SimColors::card_bg())
            .border_1()
            .border_color(SimColors::border_subtle())
            .rounded_xl()
            .shadow_lg()
            .children(self.children)
    }
}
