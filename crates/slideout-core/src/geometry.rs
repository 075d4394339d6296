//! Panel geometry: resolved width and the resting/visible poses.

use crate::resolve::Width;
use crate::types::{Position, VisualState};

/// Resolved geometry of a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    /// Resolved panel width.
    pub width: Width,
    /// Edge the panel is anchored to.
    pub position: Position,
}

/// Placement of the panel at a point of its animation.
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    /// Edge the panel is pinned to (`left: 0` or `right: 0`).
    pub edge: Position,
    /// Horizontal translation applied on top of the pinned placement.
    pub offset_x: Width,
}

impl Pose {
    /// Renders the translation as a CSS `transform` value.
    pub fn transform(&self) -> String {
        format!("translateX({})", self.offset_x)
    }
}

impl Geometry {
    /// Creates geometry from a resolved width and position.
    pub fn new(width: impl Into<Width>, position: Position) -> Self {
        Self {
            width: width.into(),
            position,
        }
    }

    fn direction(&self) -> f64 {
        match self.position {
            Position::Left => -1.0,
            Position::Right => 1.0,
        }
    }

    /// Horizontal offset of the off-screen resting pose.
    ///
    /// Left panels rest at `-width`, right panels at `+width`.
    pub fn closed_offset(&self) -> Width {
        self.width.scale(self.direction())
    }

    /// Pose for a settled visual state.
    pub fn pose(&self, state: VisualState) -> Pose {
        self.pose_at(state.progress())
    }

    /// Pose at animation `progress`, where 0.0 is closed and 1.0 is open.
    ///
    /// Progress outside `[0, 1]` is allowed so that overshooting easings
    /// translate past the open position.
    pub fn pose_at(&self, progress: f64) -> Pose {
        Pose {
            edge: self.position,
            offset_x: self.width.scale(self.direction() * (1.0 - progress)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{width_for, Length, Unit};
    use crate::types::Size;

    #[test]
    fn test_left_rests_at_negative_width() {
        let geometry = Geometry::new(width_for(Size::Medium), Position::Left);
        let pose = geometry.pose(VisualState::Closed);
        assert_eq!(pose.edge, Position::Left);
        assert_eq!(pose.offset_x, Width::Length(Length::px(-200.0)));
        assert_eq!(pose.transform(), "translateX(-200px)");
    }

    #[test]
    fn test_right_rests_at_positive_width_pinned_right() {
        let geometry = Geometry::new(width_for(Size::Full), Position::Right);
        let pose = geometry.pose(VisualState::Closed);
        assert_eq!(pose.edge, Position::Right);
        assert_eq!(pose.offset_x, Width::Length(Length::vw(100.0)));
    }

    #[test]
    fn test_open_pose_is_untranslated() {
        for position in Position::ALL {
            for width in [Width::from(Length::px(300.0)), Width::Expr("calc(50% + 1rem)".into())] {
                let pose = Geometry::new(width, position).pose(VisualState::Open);
                assert!(pose.offset_x.is_zero());
                assert_eq!(pose.transform(), "translateX(0px)");
            }
        }
    }

    #[test]
    fn test_midway_pose_keeps_unit() {
        let geometry = Geometry::new(Length::vw(100.0), Position::Left);
        let pose = geometry.pose_at(0.25);
        let Width::Length(offset) = pose.offset_x else {
            panic!("expected a plain length");
        };
        assert_eq!(offset.unit, Unit::Vw);
        assert_eq!(offset.value, -75.0);
    }

    #[test]
    fn test_expression_width_rests_off_screen() {
        let width = Width::Expr("calc(100% - 10px)".into());

        let left = Geometry::new(width.clone(), Position::Left);
        assert_eq!(
            left.pose(VisualState::Closed).transform(),
            "translateX(calc(-1 * (calc(100% - 10px))))"
        );

        let right = Geometry::new(width, Position::Right);
        assert_eq!(
            right.pose(VisualState::Closed).transform(),
            "translateX(calc(100% - 10px))"
        );
        assert_eq!(
            right.pose_at(0.5).transform(),
            "translateX(calc(0.5 * (calc(100% - 10px))))"
        );
    }
}
