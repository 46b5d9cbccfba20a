use std::fmt;

use serde::Serialize;

use crate::ir::{Dimension, Offset, Rect};

/// Role an axis plays in a placement.
///
/// The primary axis separates the child from its parent (vertical for
/// `top`/`bottom`), the secondary axis aligns them (horizontal for
/// `top`/`bottom`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Start,
    End,
    Center,
}

const PRIMARY_PLACEMENTS: [Placement; 2] = [Placement::Start, Placement::End];
const SECONDARY_PLACEMENTS: [Placement; 3] =
    [Placement::Start, Placement::End, Placement::Center];

impl AxisKind {
    /// Placements evaluated on this axis, in ranking tie order.
    pub fn placements(self) -> &'static [Placement] {
        match self {
            AxisKind::Primary => &PRIMARY_PLACEMENTS,
            AxisKind::Secondary => &SECONDARY_PLACEMENTS,
        }
    }

    pub fn supports(self, placement: Placement) -> bool {
        self.placements().contains(&placement)
    }

    /// Whether overlapping the parent is penalized (primary) or favored
    /// (secondary) when ranking candidates.
    pub fn avoid_overlap(self) -> bool {
        matches!(self, AxisKind::Primary)
    }

    /// Unclamped start coordinate of the child for `placement`.
    ///
    /// Callers only pass placements this axis supports; `Center` on the
    /// primary axis is rejected when the resolver is built.
    pub fn raw_position(
        self,
        placement: Placement,
        parent_start: f32,
        parent_length: f32,
        child_length: f32,
        gap: f32,
    ) -> f32 {
        match (self, placement) {
            (AxisKind::Primary, Placement::Start) => parent_start - gap - child_length,
            (AxisKind::Primary, _) => parent_start + parent_length + gap,
            (AxisKind::Secondary, Placement::Start) => parent_start,
            (AxisKind::Secondary, Placement::End) => parent_start - child_length + parent_length,
            (AxisKind::Secondary, Placement::Center) => {
                parent_start - child_length / 2.0 + parent_length / 2.0
            }
        }
    }
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisKind::Primary => f.write_str("primary"),
            AxisKind::Secondary => f.write_str("secondary"),
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::Start => f.write_str("start"),
            Placement::End => f.write_str("end"),
            Placement::Center => f.write_str("center"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    pub fn start(self, offset: Offset) -> f32 {
        match self {
            Direction::Horizontal => offset.left,
            Direction::Vertical => offset.top,
        }
    }

    pub fn length(self, dimension: Dimension) -> f32 {
        match self {
            Direction::Horizontal => dimension.width,
            Direction::Vertical => dimension.height,
        }
    }

    pub fn rect_start(self, rect: &Rect) -> f32 {
        self.start(rect.offset())
    }

    pub fn rect_length(self, rect: &Rect) -> f32 {
        self.length(rect.dimension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_places_child_outside_parent_with_gap() {
        let kind = AxisKind::Primary;
        assert_eq!(kind.raw_position(Placement::Start, 100.0, 20.0, 30.0, 5.0), 65.0);
        assert_eq!(kind.raw_position(Placement::End, 100.0, 20.0, 30.0, 5.0), 125.0);
    }

    #[test]
    fn secondary_aligns_edges_and_center() {
        let kind = AxisKind::Secondary;
        assert_eq!(kind.raw_position(Placement::Start, 10.0, 100.0, 40.0, 9.0), 10.0);
        assert_eq!(kind.raw_position(Placement::End, 10.0, 100.0, 40.0, 9.0), 70.0);
        assert_eq!(kind.raw_position(Placement::Center, 10.0, 100.0, 40.0, 9.0), 40.0);
    }

    #[test]
    fn overlap_policy_per_axis() {
        assert!(AxisKind::Primary.avoid_overlap());
        assert!(!AxisKind::Secondary.avoid_overlap());
        assert!(!AxisKind::Primary.supports(Placement::Center));
        assert!(AxisKind::Secondary.supports(Placement::Center));
    }

    #[test]
    fn direction_projects_rect() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Direction::Horizontal.rect_start(&rect), 2.0);
        assert_eq!(Direction::Horizontal.rect_length(&rect), 3.0);
        assert_eq!(Direction::Vertical.rect_start(&rect), 1.0);
        assert_eq!(Direction::Vertical.rect_length(&rect), 4.0);
    }
}
