//! Icon Header Component
//!
//! A section heading with an icon from the bundled set.

use gpui::{
    App, Empty, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window,
    div, px, svg,
};

use crate::assets::PolicyIcon;
use crate::theme::colors::SimColors;
use crate::theme::typography::Typography;

/// Section header with a leading icon
#[derive(IntoElement)]
pub struct IconHeader {
    icon_name: SharedString,
    title: SharedString,
}

impl IconHeader {
    pub fn new(icon_name: impl Into<SharedString>, title: impl Into<SharedString>) -> Self {
        Self {
            icon_name: icon_name.into(),
            title: title.into(),
        }
    }
}

/// Look up a bundled icon, warning when the name is unknown
pub fn resolve_icon(name: &str) -> Option<PolicyIcon> {
    let icon = PolicyIcon::from_name(name);
    if icon.is_none() {
        tracing::warn!(icon = %name, "Icon not found in bundled icon set");
    }
    icon
}

impl RenderOnce for IconHeader {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let Some(icon) = resolve_icon(&self.icon_name) else {
            return Empty.into_any_element();
        };

        div()
            .flex()
            .items_center()
            .mb_4()
            .child(
                svg()
                    .path(icon.path())
                    .size(px(24.0))
                    .mr_3()
                    .text_color(SimColors::accent()),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_XL))
                    .font_weight(FontWeight::BOLD)
                    .text_color(SimColors::text_heading())
                    .child(self.title),
            )
            .into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("capture lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn resolve_captured(name: &str) -> (Option<PolicyIcon>, String) {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let icon = tracing::subscriber::with_default(subscriber, || resolve_icon(name));
        let output = captured.0.lock().expect("capture lock").clone();
        (icon, String::from_utf8(output).expect("utf8 log output"))
    }

    #[test]
    fn unknown_icon_renders_nothing_and_warns() {
        let (icon, output) = resolve_captured("NoSuchIcon");
        assert!(icon.is_none());
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("NoSuchIcon"), "{output}");
    }

    #[test]
    fn dimension_icons_resolve_quietly() {
        for dimension in crate::domain::policy::PolicyDimension::ALL {
            let (icon, output) = resolve_captured(dimension.icon_name());
            assert!(icon.is_some(), "{}", dimension.icon_name());
            assert!(output.is_empty(), "{output}");
        }
    }
}
