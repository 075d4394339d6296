//! # Slideout
//!
//! Slide-in sidebar component for Dioxus.
//!
//! ## Features
//!
//! - **Detached rendering**: panels are projected into a mount node outside
//!   their parent, or rendered in place
//! - **Animation**: open/close slides with exit animations before removal
//! - **Overlay**: optional dimming backdrop that fades with the panel
//! - **Dismissal**: pointer-downs outside the panel (but not on buttons)
//!   call `on_close`
//!
//! ## Modules
//!
//! - [`sidebar`] - The [`Sidebar`] component
//! - [`host`] - [`SlideoutHost`], the required root wrapper
//! - [`portal`] - [`Portal`] and [`PortalOutlet`]
//! - [`hooks`] - [`use_presence`] and [`use_outside_click`]
//! - [`document`] - Document-level listeners via `document::eval`
//!
//! ## Example
//!
//! ```rust,ignore
//! use dioxus::prelude::*;
//! use slideout::{SlideoutHost, Sidebar};
//!
//! #[component]
//! fn App() -> Element {
//!     let mut open = use_signal(|| false);
//!
//!     rsx! {
//!         SlideoutHost {
//!             button { onclick: move |_| open.set(!open()), "Toggle" }
//!             Sidebar {
//!                 id: "nav",
//!                 is_open: open(),
//!                 on_close: move |_| open.set(false),
//!                 "Hello"
//!             }
//!         }
//!     }
//! }
//! ```

pub mod document;
pub mod hooks;
pub mod host;
pub mod portal;
pub mod sidebar;

#[cfg(test)]
mod testing;

pub use document::{EvalDocument, PointerDownReport};
pub use hooks::{use_outside_click, use_presence};
pub use host::SlideoutHost;
pub use portal::{mount_dom_id, portal_dom_id, Portal, PortalHost, PortalOutlet};
pub use sidebar::Sidebar;

pub use slideout_core::{
    Length, MountNode, Position, SidebarOptions, Size, SlideoutError, Style, TransitionProfile,
    Width,
};
