//! # Sidebar Component
//!
//! Slide-in panel with optional dimming overlay and click-outside dismissal.

use dioxus::prelude::*;

use slideout_core::{
    plan, MountNode, Placement, Position, SidebarConfig, SidebarOptions, Size, Style,
    TransitionProfile,
};

use crate::hooks::{use_outside_click, use_presence};
use crate::portal::Portal;

/// Slide-in sidebar.
///
/// Fully controlled: the embedding application owns `is_open` and flips it
/// in `on_close`. By default the panel is projected into the body outlet of
/// the enclosing [`SlideoutHost`](crate::SlideoutHost) and only exists while
/// open or closing. With `create_portal: false` it stays mounted in place
/// and slides off-screen instead.
///
/// # Examples
///
/// ```rust,ignore
/// #[component]
/// fn Menu() -> Element {
///     let mut open = use_signal(|| false);
///
///     rsx! {
///         button { onclick: move |_| open.set(true), "Menu" }
///         Sidebar {
///             id: "menu",
///             is_open: open(),
///             on_close: move |_| open.set(false),
///             position: Position::Right,
///             render_overlay: true,
///             nav { "..." }
///         }
///     }
/// }
/// ```
#[component]
pub fn Sidebar(
    /// DOM id of the panel element.
    id: String,
    /// Whether the panel is open.
    is_open: bool,
    /// Called on outside clicks; the owner should set `is_open` to false.
    on_close: EventHandler<()>,
    /// Panel content.
    children: Element,
    /// Style overrides for the panel. A `width` declaration overrides `size`.
    #[props(default)]
    style: Style,
    /// Mount node for detached rendering. Defaults to the body outlet.
    mount_node: Option<MountNode>,
    /// Receives the panel's root element once mounted.
    on_mounted: Option<EventHandler<MountedEvent>>,
    /// Width preset.
    #[props(default)]
    size: Size,
    /// Edge the panel slides in from.
    #[props(default)]
    position: Position,
    /// Animation timing profile.
    #[props(default)]
    transition: TransitionProfile,
    /// Render into a detached mount node.
    #[props(default = true)]
    create_portal: bool,
    /// Render the dimming overlay.
    #[props(default)]
    render_overlay: bool,
    /// Close on pointer-downs outside the panel.
    #[props(default = true)]
    close_on_outside_click: bool,
) -> Element {
    let config = SidebarConfig {
        id,
        is_open,
        options: SidebarOptions {
            size,
            position,
            transition,
            create_portal,
            render_overlay,
            close_on_outside_click,
            width: None,
        },
        style,
        mount_node,
    };

    let frame = use_presence(is_open, config.options.transition());
    use_outside_click(&config.id, close_on_outside_click, on_close);

    let plan = plan(&config, frame);

    let overlay = plan.overlay.map(|overlay| {
        rsx! {
            div {
                class: "slideout-overlay",
                style: overlay.style.to_css(),
            }
        }
    });

    let panel = plan.panel.map(|panel| {
        let element = rsx! {
            div {
                id: panel.id,
                class: "slideout-panel",
                style: panel.style.to_css(),
                onmounted: move |evt| {
                    if let Some(handler) = on_mounted {
                        handler.call(evt);
                    }
                },
                {children}
            }
        };

        match panel.placement {
            Placement::Inline => element,
            Placement::Detached(node) => rsx! {
                Portal { target: node, {element} }
            },
        }
    });

    rsx! {
        {overlay}
        {panel}
    }
}
