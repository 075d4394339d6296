//! Size and transition resolution.
//!
//! Both resolvers are exhaustive over their enumerations. Adding a variant to
//! [`Size`] or [`TransitionProfile`] fails to compile until it is mapped here.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::SlideoutError;
use crate::types::{Size, TransitionProfile};

/// Duration used when a transition profile leaves it to the engine.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

/// Unit of a CSS length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Pixels.
    Px,
    /// Percent of viewport width.
    Vw,
    /// Percent of viewport height.
    Vh,
    /// Percent of the containing block.
    Percent,
    /// Root font size.
    Rem,
    /// Element font size.
    Em,
}

impl Unit {
    /// Returns the CSS suffix.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Vw => "vw",
            Self::Vh => "vh",
            Self::Percent => "%",
            Self::Rem => "rem",
            Self::Em => "em",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "px" => Some(Self::Px),
            "vw" => Some(Self::Vw),
            "vh" => Some(Self::Vh),
            "%" => Some(Self::Percent),
            "rem" => Some(Self::Rem),
            "em" => Some(Self::Em),
            _ => None,
        }
    }
}

/// A CSS length such as `200px` or `100vw`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    /// Numeric magnitude.
    pub value: f64,
    /// Unit of the magnitude.
    pub unit: Unit,
}

impl Length {
    /// Creates a length in pixels.
    pub const fn px(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Px,
        }
    }

    /// Creates a length in viewport-width percent.
    pub const fn vw(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Vw,
        }
    }

    /// Returns the same length with the opposite sign.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            value: -self.value,
            unit: self.unit,
        }
    }

    /// Returns the length multiplied by `factor`.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            value: self.value * factor,
            unit: self.unit,
        }
    }

    /// Returns true if the magnitude is zero.
    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Avoid printing `-0px`.
        let value = if self.value == 0.0 { 0.0 } else { self.value };
        write!(f, "{}{}", value, self.unit.suffix())
    }
}

impl FromStr for Length {
    type Err = SlideoutError;

    /// Parses `<number><unit>`; a bare `0` is accepted as `0px`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+')))
            .unwrap_or(trimmed.len());
        let (number, suffix) = trimmed.split_at(split);

        let value: f64 = number
            .parse()
            .map_err(|_| SlideoutError::InvalidLength(s.to_string()))?;
        if !value.is_finite() {
            return Err(SlideoutError::InvalidLength(s.to_string()));
        }

        let unit = if suffix.is_empty() && value == 0.0 {
            Unit::Px
        } else {
            Unit::from_suffix(suffix).ok_or_else(|| SlideoutError::InvalidLength(s.to_string()))?
        };

        Ok(Self { value, unit })
    }
}

impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Resolved panel width.
///
/// Widths that are not a plain [`Length`], such as `calc(100% - 2rem)` or
/// `min(400px, 90vw)`, are kept verbatim and left to the browser.
#[derive(Debug, Clone, PartialEq)]
pub enum Width {
    /// A plain length.
    Length(Length),
    /// Any other CSS width value.
    Expr(String),
}

impl Width {
    /// Reads a CSS `width` value. Returns `None` for an empty value.
    pub fn parse_css(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        Some(
            raw.parse()
                .map_or_else(|_| Self::Expr(raw.to_string()), Self::Length),
        )
    }

    /// Returns the width multiplied by `factor`.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        match self {
            Self::Length(length) => Self::Length(length.scale(factor)),
            Self::Expr(_) if factor == 0.0 => Self::Length(Length::px(0.0)),
            Self::Expr(expr) if factor == 1.0 => Self::Expr(expr.clone()),
            Self::Expr(expr) => Self::Expr(format!("calc({factor} * ({expr}))")),
        }
    }

    /// Returns true if the width is a zero length.
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Length(length) if length.is_zero())
    }
}

impl From<Length> for Width {
    fn from(length: Length) -> Self {
        Self::Length(length)
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(length) => length.fmt(f),
            Self::Expr(expr) => f.write_str(expr),
        }
    }
}

/// Timing of an open/close animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transition {
    /// Fixed duration, or `None` to let the engine decide.
    pub duration: Option<Duration>,
}

impl Transition {
    /// Returns the fixed duration, or [`DEFAULT_DURATION`].
    pub fn effective_duration(&self) -> Duration {
        self.duration.unwrap_or(DEFAULT_DURATION)
    }
}

/// Maps a size preset to its panel width.
pub fn width_for(size: Size) -> Length {
    match size {
        Size::Small => Length::px(100.0),
        Size::Medium => Length::px(200.0),
        Size::Large => Length::px(300.0),
        Size::ExtraLarge => Length::px(500.0),
        Size::Full => Length::vw(100.0),
    }
}

/// Maps a transition profile to its timing.
pub fn transition_for(profile: TransitionProfile) -> Transition {
    let duration = match profile {
        TransitionProfile::Fast => Some(Duration::from_millis(100)),
        TransitionProfile::Slow => Some(Duration::from_millis(500)),
        TransitionProfile::Easy => Some(Duration::from_millis(500)),
        TransitionProfile::Dragging => None,
    };
    Transition { duration }
}

/// Resolves the panel width: an explicit override always wins over the preset.
pub fn resolve_width(width_override: Option<Length>, size: Size) -> Length {
    width_override.unwrap_or_else(|| width_for(size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_width_for_every_size() {
        let expected = ["100px", "200px", "300px", "500px", "100vw"];
        for (size, want) in Size::ALL.into_iter().zip(expected) {
            assert_eq!(width_for(size).to_string(), want, "size {size}");
        }
    }

    #[test]
    fn test_transition_for_every_profile() {
        let expected = [Some(0.1), Some(0.5), Some(0.5), None];
        for (profile, want) in TransitionProfile::ALL.into_iter().zip(expected) {
            let got = transition_for(profile).duration.map(|d| d.as_secs_f64());
            assert_eq!(got, want, "profile {profile}");
        }
    }

    #[test]
    fn test_dragging_uses_engine_default() {
        let transition = transition_for(TransitionProfile::Dragging);
        assert!(transition.duration.is_none());
        assert_eq!(transition.effective_duration(), DEFAULT_DURATION);
    }

    #[test]
    fn test_override_wins() {
        let custom: Length = "420px".parse().unwrap();
        for size in Size::ALL {
            assert_eq!(resolve_width(Some(custom), size), custom);
            assert_eq!(resolve_width(None, size), width_for(size));
        }
    }

    #[test]
    fn test_parse_lengths() {
        assert_eq!("200px".parse::<Length>().unwrap(), Length::px(200.0));
        assert_eq!(" 100vw ".parse::<Length>().unwrap(), Length::vw(100.0));
        assert_eq!("12.5rem".parse::<Length>().unwrap().unit, Unit::Rem);
        assert_eq!("50%".parse::<Length>().unwrap().unit, Unit::Percent);
        assert_eq!("0".parse::<Length>().unwrap(), Length::px(0.0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "px", "200", "200pt", "abc", "--5px", "infpx"] {
            assert!(
                matches!(input.parse::<Length>(), Err(SlideoutError::InvalidLength(_))),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn test_negate_and_zero_display() {
        assert_eq!(Length::px(200.0).negate().to_string(), "-200px");
        assert_eq!(Length::px(0.0).negate().to_string(), "0px");
        assert_eq!(Length::vw(100.0).scale(0.5).to_string(), "50vw");
    }

    #[test]
    fn test_length_serde_as_string() {
        let json = serde_json::to_string(&Length::px(300.0)).unwrap();
        assert_eq!(json, "\"300px\"");
        let parsed: Length = serde_json::from_str("\"75vw\"").unwrap();
        assert_eq!(parsed, Length::vw(75.0));
        assert!(serde_json::from_str::<Length>("\"wide\"").is_err());
    }

    #[test]
    fn test_css_width_keeps_expressions() {
        assert_eq!(Width::parse_css(" 420px "), Some(Width::Length(Length::px(420.0))));
        assert_eq!(
            Width::parse_css("calc(100% - 10px)"),
            Some(Width::Expr("calc(100% - 10px)".to_string()))
        );
        assert_eq!(Width::parse_css("200"), Some(Width::Expr("200".to_string())));
        assert_eq!(Width::parse_css("  "), None);
    }

    #[test]
    fn test_scaled_expression() {
        let width = Width::Expr("min(400px, 90vw)".to_string());
        assert_eq!(width.scale(1.0), width);
        assert_eq!(width.scale(-1.0).to_string(), "calc(-1 * (min(400px, 90vw)))");
        assert_eq!(width.scale(-0.5).to_string(), "calc(-0.5 * (min(400px, 90vw)))");
        assert!(width.scale(0.0).is_zero());
        assert!(width.scale(-0.0).is_zero());
    }

    proptest! {
        #[test]
        fn prop_display_parses_back(value in -10_000i32..10_000, unit_idx in 0usize..6) {
            let units = [Unit::Px, Unit::Vw, Unit::Vh, Unit::Percent, Unit::Rem, Unit::Em];
            let length = Length { value: f64::from(value), unit: units[unit_idx] };
            let parsed: Length = length.to_string().parse().unwrap();
            prop_assert_eq!(parsed, length);
        }
    }
}
