//! Render planning.
//!
//! [`plan`] turns one render's configuration plus the current animation frame
//! into exactly what should be in the tree: whether the panel and overlay are
//! mounted, where the panel goes, and their inline styles.

use crate::geometry::Geometry;
use crate::options::SidebarOptions;
use crate::portal::MountNode;
use crate::presence::Frame;
use crate::resolve::Width;
use crate::style::{overlay_style, panel_style, Style};
use crate::types::VisualState;

/// Configuration supplied on every render.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SidebarConfig {
    /// DOM id of the panel element.
    pub id: String,
    /// Whether the panel should be open.
    pub is_open: bool,
    /// Behavioral and visual options.
    pub options: SidebarOptions,
    /// User style overrides applied to the panel.
    pub style: Style,
    /// Mount node for detached rendering; `None` means the body.
    pub mount_node: Option<MountNode>,
}

impl SidebarConfig {
    /// Creates a configuration with default options.
    pub fn new(id: impl Into<String>, is_open: bool) -> Self {
        Self {
            id: id.into(),
            is_open,
            ..Self::default()
        }
    }

    /// Target visual state.
    pub fn visual_state(&self) -> VisualState {
        VisualState::from_open(self.is_open)
    }

    /// Explicit width: `options.width`, else the `width` style override.
    ///
    /// A style width that is not a plain length, such as `calc(...)`, is
    /// used verbatim.
    pub fn width_override(&self) -> Option<Width> {
        match self.options.width {
            Some(width) => Some(width.into()),
            None => self.style.get("width").and_then(Width::parse_css),
        }
    }

    /// Resolved geometry.
    pub fn geometry(&self) -> Geometry {
        let width = self
            .width_override()
            .unwrap_or_else(|| self.options.width().into());
        Geometry::new(width, self.options.position)
    }

    /// Mount node used in detached mode.
    pub fn resolved_mount_node(&self) -> MountNode {
        self.mount_node.clone().unwrap_or_default()
    }
}

/// Where the panel element lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// At the component's own position in the tree.
    Inline,
    /// Projected under a mount node.
    Detached(MountNode),
}

/// The panel element to render.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelPlan {
    /// DOM id.
    pub id: String,
    /// Where it goes.
    pub placement: Placement,
    /// Inline style.
    pub style: Style,
}

/// The overlay element to render.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayPlan {
    /// Inline style.
    pub style: Style,
}

/// Everything one render produces.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    /// Panel element, absent when nothing should be mounted.
    pub panel: Option<PanelPlan>,
    /// Overlay element, absent when disabled or not mounted.
    pub overlay: Option<OverlayPlan>,
}

impl RenderPlan {
    /// Returns true if nothing is rendered at all.
    pub fn is_empty(&self) -> bool {
        self.panel.is_none() && self.overlay.is_none()
    }
}

/// Plans one render of the sidebar.
///
/// In detached mode the panel exists only while `frame.mounted`; inline the
/// panel is always present. The overlay follows `frame.mounted` in both.
pub fn plan(config: &SidebarConfig, frame: Frame) -> RenderPlan {
    let geometry = config.geometry();
    let options = &config.options;

    let placement = if options.create_portal {
        frame
            .mounted
            .then(|| Placement::Detached(config.resolved_mount_node()))
    } else {
        Some(Placement::Inline)
    };

    let panel = placement.map(|placement| PanelPlan {
        id: config.id.clone(),
        placement,
        style: panel_style(
            &config.style,
            &geometry.width,
            &geometry.pose_at(frame.progress),
        ),
    });

    let overlay = (options.render_overlay && frame.mounted).then(|| OverlayPlan {
        style: overlay_style(frame.progress),
    });

    RenderPlan { panel, overlay }
}
