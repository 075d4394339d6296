//! # Slideout Core
//!
//! Framework-independent logic of the Slideout sidebar widget.
//!
//! Everything here is plain data and pure functions, so the rendering layer
//! only has to turn a [`RenderPlan`] into elements and forward pointer
//! events to an [`OutsideClick`] binding.
//!
//! ## Modules
//!
//! - [`types`] - Size, position and transition tokens
//! - [`resolve`] - Width and transition resolution, CSS lengths
//! - [`geometry`] - Closed/open poses of the panel
//! - [`style`] - Inline CSS for panel and overlay
//! - [`click`] - Control-click and dismissal predicates
//! - [`listener`] - Document listener registry and scoped registrations
//! - [`dismiss`] - Click-outside binding keyed by callback identity
//! - [`animation`] - Easing, tweens and the two-state animator
//! - [`presence`] - Mount tracking with exit animations
//! - [`portal`] - Detached-subtree projection registry
//! - [`options`] - Serializable sidebar options
//! - [`plan`] - Per-render planning
//!
//! ## Example
//!
//! ```rust
//! use slideout_core::{plan, Frame, SidebarConfig, VisualState};
//!
//! let config = SidebarConfig::new("menu", true);
//! let plan = plan(&config, Frame::settled(VisualState::Open));
//! let panel = plan.panel.unwrap();
//! assert_eq!(panel.style.get("width"), Some("200px"));
//! ```

pub mod animation;
pub mod click;
pub mod dismiss;
pub mod error;
pub mod geometry;
pub mod listener;
pub mod options;
pub mod plan;
pub mod portal;
pub mod presence;
pub mod resolve;
pub mod style;
pub mod types;

pub use animation::{Animator, Easing, Tween};
pub use click::{is_control_click, should_dismiss, PointerDown};
pub use dismiss::{dismiss_handler, OutsideClick};
pub use error::{Result, SlideoutError};
pub use geometry::{Geometry, Pose};
pub use listener::{DocumentListeners, Handler, ListenerId, MemoryDocument, Registration};
pub use options::SidebarOptions;
pub use plan::{plan, OverlayPlan, PanelPlan, Placement, RenderPlan, SidebarConfig};
pub use portal::{project_into, MountNode, PortalKey, PortalRegistry};
pub use presence::{Frame, Phase, PresenceTracker};
pub use resolve::{resolve_width, transition_for, width_for, Length, Transition, Unit, Width};
pub use style::{overlay_style, panel_style, Style};
pub use types::{Position, Size, TransitionProfile, VisualState};
