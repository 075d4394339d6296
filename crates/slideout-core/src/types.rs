//! Enumerated configuration tokens.
//!
//! Every enumeration parses from and prints as the short token used in
//! configuration documents (`"md"`, `"left"`, `"fast"`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SlideoutError;

/// Width preset of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Size {
    /// 100px.
    #[serde(rename = "sm")]
    Small,
    /// 200px.
    #[default]
    #[serde(rename = "md")]
    Medium,
    /// 300px.
    #[serde(rename = "lg")]
    Large,
    /// 500px.
    #[serde(rename = "xlg")]
    ExtraLarge,
    /// Full viewport width.
    #[serde(rename = "full")]
    Full,
}

impl Size {
    /// Every size preset, in ascending order.
    pub const ALL: [Size; 5] = [
        Size::Small,
        Size::Medium,
        Size::Large,
        Size::ExtraLarge,
        Size::Full,
    ];

    /// Returns the configuration token.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "sm",
            Self::Medium => "md",
            Self::Large => "lg",
            Self::ExtraLarge => "xlg",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = SlideoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| SlideoutError::UnknownSize(s.to_string()))
    }
}

/// Screen edge the panel slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Slides in from the left edge.
    #[default]
    Left,
    /// Slides in from the right edge.
    Right,
}

impl Position {
    /// Both positions.
    pub const ALL: [Position; 2] = [Position::Left, Position::Right];

    /// Returns the configuration token, which is also the CSS edge property.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = SlideoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(SlideoutError::UnknownPosition(s.to_string())),
        }
    }
}

/// Animation timing profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionProfile {
    /// 0.1s.
    #[default]
    Fast,
    /// 0.5s.
    Slow,
    /// 0.5s.
    Easy,
    /// No fixed duration; the animation engine picks one.
    Dragging,
}

impl TransitionProfile {
    /// Every transition profile.
    pub const ALL: [TransitionProfile; 4] = [
        TransitionProfile::Fast,
        TransitionProfile::Slow,
        TransitionProfile::Easy,
        TransitionProfile::Dragging,
    ];

    /// Returns the configuration token.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Slow => "slow",
            Self::Easy => "easy",
            Self::Dragging => "dragging",
        }
    }
}

impl fmt::Display for TransitionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransitionProfile {
    type Err = SlideoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|profile| profile.as_str() == s)
            .ok_or_else(|| SlideoutError::UnknownTransition(s.to_string()))
    }
}

/// Visual state of the panel, derived from the open flag alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualState {
    /// Fully visible.
    Open,
    /// Resting off-screen.
    Closed,
}

impl VisualState {
    /// Maps the open flag onto a visual state.
    pub const fn from_open(is_open: bool) -> Self {
        if is_open {
            Self::Open
        } else {
            Self::Closed
        }
    }

    /// Animation progress value of this state: 1.0 when open, 0.0 when closed.
    pub const fn progress(&self) -> f64 {
        match self {
            Self::Open => 1.0,
            Self::Closed => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_tokens_roundtrip() {
        for size in Size::ALL {
            assert_eq!(size.as_str().parse::<Size>().unwrap(), size);
        }
        assert!(matches!(
            "xl".parse::<Size>(),
            Err(SlideoutError::UnknownSize(token)) if token == "xl"
        ));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Size::default(), Size::Medium);
        assert_eq!(Position::default(), Position::Left);
        assert_eq!(TransitionProfile::default(), TransitionProfile::Fast);
    }

    #[test]
    fn test_serde_uses_tokens() {
        assert_eq!(serde_json::to_string(&Size::ExtraLarge).unwrap(), "\"xlg\"");
        assert_eq!(serde_json::to_string(&Position::Right).unwrap(), "\"right\"");
        let profile: TransitionProfile = serde_json::from_str("\"dragging\"").unwrap();
        assert_eq!(profile, TransitionProfile::Dragging);
    }

    #[test]
    fn test_unknown_tokens_rejected() {
        assert!(matches!(
            "top".parse::<Position>(),
            Err(SlideoutError::UnknownPosition(_))
        ));
        assert!(matches!(
            "instant".parse::<TransitionProfile>(),
            Err(SlideoutError::UnknownTransition(_))
        ));
    }

    #[test]
    fn test_visual_state_follows_open_flag() {
        assert_eq!(VisualState::from_open(true), VisualState::Open);
        assert_eq!(VisualState::from_open(false), VisualState::Closed);
        assert_eq!(VisualState::Open.progress(), 1.0);
        assert_eq!(VisualState::Closed.progress(), 0.0);
    }
}
