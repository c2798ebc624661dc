//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    App, AppContext, Application, Bounds, KeyBinding, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::domain::config::AppConfig;
use crate::i18n::t;
use crate::utils::config_store::ConfigSource;

actions!(policy_sim, [Quit, RunSimulation, CloseWhitepaper]);

/// Label of the run shortcut as shown on the Run button
pub fn run_shortcut_label() -> &'static str {
    if cfg!(target_os = "macos") {
        "⌘↵"
    } else {
        "Ctrl+Enter"
    }
}

fn key_bindings() -> Vec<KeyBinding> {
    let (quit, run) = if cfg!(target_os = "macos") {
        ("cmd-q", "cmd-enter")
    } else {
        ("ctrl-q", "ctrl-enter")
    };

    vec![
        KeyBinding::new(quit, Quit, None),
        KeyBinding::new(run, RunSimulation, None),
        KeyBinding::new("escape", CloseWhitepaper, None),
    ]
}

/// Run the Policy Sim application
pub fn run_app(config: AppConfig, source: ConfigSource) {
    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.bind_keys(key_bindings());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let (width, height) = config.ui.window_size();
        let locale = config.resolve_locale();
        tracing::debug!(from_file = source.is_file(), "Applying configuration");

        // Initialize global entities
        let entities = AppEntities::init(locale, config.simulator.initial, cx);
        cx.set_global(entities.clone());

        // Create main window
        let bounds = Bounds::centered(None, gpui::size(px(width), px(height)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(t(locale, "app-title")),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), window, cx))
        });

        if let Err(e) = opened {
            tracing::error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        tracing::info!(width, height, ?locale, "Main window opened");
        cx.activate(true);
    });
}
