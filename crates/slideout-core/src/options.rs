//! Sidebar options.
//!
//! Options are plain data with serde defaults, so a partial JSON document
//! only needs to name the fields it changes.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::resolve::{resolve_width, transition_for, Length, Transition};
use crate::types::{Position, Size, TransitionProfile};

/// Behavioral and visual options of a sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarOptions {
    /// Width preset.
    pub size: Size,

    /// Edge the panel slides in from.
    pub position: Position,

    /// Animation timing profile.
    pub transition: TransitionProfile,

    /// Render into a detached mount node instead of in place.
    pub create_portal: bool,

    /// Render the dimming overlay behind the panel.
    pub render_overlay: bool,

    /// Close when a pointer-down lands outside the panel.
    pub close_on_outside_click: bool,

    /// Explicit width, taking precedence over `size`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Length>,
}

impl Default for SidebarOptions {
    fn default() -> Self {
        Self {
            size: Size::default(),
            position: Position::default(),
            transition: TransitionProfile::default(),
            create_portal: true,
            render_overlay: false,
            close_on_outside_click: true,
            width: None,
        }
    }
}

impl SidebarOptions {
    /// Parses options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolved animation timing.
    pub fn transition(&self) -> Transition {
        transition_for(self.transition)
    }

    /// Resolved panel width.
    pub fn width(&self) -> Length {
        resolve_width(self.width, self.size)
    }
}
