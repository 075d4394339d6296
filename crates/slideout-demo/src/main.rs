//! # Slideout Demo
//!
//! Desktop window showing the [`Sidebar`] component in its configurations.
//!
//! The main sidebar's options are read from `<config dir>/slideout/demo.json`
//! (written with defaults on first run). A second sidebar is rendered inline
//! on the opposite edge.

use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use slideout::{Position, Sidebar, SidebarOptions, SlideoutHost, Style};

mod config;

use config::Config;

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!("Starting Slideout demo");

    let config = Config::load();
    if let Some(path) = Config::config_path().filter(|p| !p.exists()) {
        if let Err(e) = config.save_to(&path) {
            tracing::warn!("Failed to write default config: {e:#}");
        }
    }

    let cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(config.title.clone())
            .with_inner_size(LogicalSize::new(1000.0, 700.0)),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(cfg)
        .with_context(config.sidebar)
        .launch(App);

    Ok(())
}

/// Root component.
#[component]
fn App() -> Element {
    let options = use_context::<SidebarOptions>();
    let mut main_open = use_signal(|| false);
    let mut inline_open = use_signal(|| false);

    let style = options
        .width
        .map(|width| Style::new().with("width", width))
        .unwrap_or_default();
    let inline_position = match options.position {
        Position::Left => Position::Right,
        Position::Right => Position::Left,
    };

    rsx! {
        SlideoutHost {
            main {
                style: "padding: 24px; font-family: sans-serif;",

                h1 { "Slideout" }

                div {
                    style: "display: flex; gap: 12px;",

                    button {
                        onclick: move |_| main_open.set(!main_open()),
                        if main_open() { "Close sidebar" } else { "Open sidebar" }
                    }

                    button {
                        onclick: move |_| inline_open.set(!inline_open()),
                        if inline_open() { "Close inline sidebar" } else { "Open inline sidebar" }
                    }
                }

                p { "Click anywhere outside an open sidebar to dismiss it." }
            }

            Sidebar {
                id: "demo-sidebar",
                is_open: main_open(),
                on_close: move |_| main_open.set(false),
                style,
                size: options.size,
                position: options.position,
                transition: options.transition,
                create_portal: options.create_portal,
                render_overlay: options.render_overlay,
                close_on_outside_click: options.close_on_outside_click,

                nav {
                    style: "padding: 16px;",
                    h2 { "Navigation" }
                    ul {
                        li { "Home" }
                        li { "Settings" }
                    }
                    button {
                        onclick: move |_| main_open.set(false),
                        "Close"
                    }
                }
            }

            Sidebar {
                id: "demo-inline-sidebar",
                is_open: inline_open(),
                on_close: move |_| inline_open.set(false),
                position: inline_position,
                create_portal: false,
                transition: slideout::TransitionProfile::Slow,

                div {
                    style: "padding: 16px;",
                    "Rendered in place"
                }
            }
        }
    }
}
