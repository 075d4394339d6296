//! Inline CSS declarations for the panel and the dimming overlay.

use serde::{Deserialize, Serialize};

use crate::geometry::Pose;
use crate::resolve::Width;

/// Opacity of the overlay when the panel is fully open.
pub const OVERLAY_OPACITY: f64 = 0.7;

/// An ordered list of CSS declarations.
///
/// Setting a property that is already present replaces its value in place,
/// so later layers override earlier ones without reordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style {
    declarations: Vec<(String, String)>,
}

impl Style {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Style::set`].
    #[must_use]
    pub fn with(mut self, property: impl Into<String>, value: impl ToString) -> Self {
        self.set(property, value);
        self
    }

    /// Sets a property, replacing any previous value.
    pub fn set(&mut self, property: impl Into<String>, value: impl ToString) {
        let property = property.into();
        let value = value.to_string();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some(existing) => existing.1 = value,
            None => self.declarations.push((property, value)),
        }
    }

    /// Returns the value of a property.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Removes a property, returning its value.
    pub fn remove(&mut self, property: &str) -> Option<String> {
        let idx = self.declarations.iter().position(|(p, _)| p == property)?;
        Some(self.declarations.remove(idx).1)
    }

    /// Applies every declaration of `other` on top of this style.
    pub fn merge(&mut self, other: &Style) {
        for (property, value) in &other.declarations {
            self.set(property.clone(), value);
        }
    }

    /// Iterates over declarations in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Returns true if no declarations are set.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Renders the declarations as an inline `style` attribute value.
    pub fn to_css(&self) -> String {
        self.iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = Style::new();
        for (property, value) in iter {
            style.set(property, value);
        }
        style
    }
}

/// Base style of the panel before user overrides.
pub fn default_panel_style() -> Style {
    Style::new()
        .with("position", "fixed")
        .with("top", "0")
        .with("height", "100%")
        .with("overflow-y", "auto")
        .with("background-color", "#ffffff")
        .with("z-index", 1000)
        .with("box-sizing", "border-box")
}

/// Final panel style: defaults, then user overrides, then width, then pose.
pub fn panel_style(overrides: &Style, width: &Width, pose: &Pose) -> Style {
    let mut style = default_panel_style();
    style.merge(overrides);
    style.set("width", width);
    style.set(pose.edge.as_str(), "0");
    style.set("transform", pose.transform());
    style
}

/// Style of the dimming overlay at animation `progress`.
pub fn overlay_style(progress: f64) -> Style {
    let opacity = (OVERLAY_OPACITY * progress).clamp(0.0, OVERLAY_OPACITY);
    Style::new()
        .with("position", "fixed")
        .with("top", "0")
        .with("bottom", "0")
        .with("left", "0")
        .with("width", "100%")
        .with("background-color", "black")
        .with("z-index", 999)
        .with("opacity", format!("{opacity:.3}"))
}
