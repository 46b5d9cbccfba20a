//! Positioning of a floating child (tooltip, dropdown, popover) next to an
//! anchor rectangle while keeping it inside the viewport.
//!
//! Each named strategy resolves the two directions independently, ranking
//! every placement on the axis, then cross-checks the combined position
//! against two fallbacks so the child never needlessly covers its anchor.

mod axis;
mod error;
mod resolver;
mod strategy;

pub use axis::{AxisKind, Direction, Placement};
pub use error::PlacementError;
pub use resolver::{
    AxisCandidate, AxisResolver, AxisSpan, FALLBACK_PRIMARY, FALLBACK_SECONDARY, adjust_position,
    overlapping_length,
};
pub use strategy::{ChoiceSource, PositionChoice, Strategy, StrategyName};

use serde::{Deserialize, Serialize};

use crate::ir::{Dimension, Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlacementOptions {
    /// Spacing kept between parent and child on the separating side.
    pub gap: f32,
}

impl PlacementOptions {
    pub fn with_gap(gap: f32) -> Self {
        Self { gap }
    }
}

/// Resolve the child's top-left position for the strategy called `strategy`.
///
/// `parent` and the result share a coordinate space whose origin is the
/// viewport's top-left corner.
pub fn calculate_child_position(
    strategy: &str,
    parent: &Rect,
    child: Dimension,
    viewport: Dimension,
    options: &PlacementOptions,
) -> Result<Position, PlacementError> {
    let name: StrategyName = strategy.parse()?;
    Ok(calculate_child_position_with(
        name, parent, child, viewport, options,
    ))
}

pub fn calculate_child_position_with(
    strategy: StrategyName,
    parent: &Rect,
    child: Dimension,
    viewport: Dimension,
    options: &PlacementOptions,
) -> Position {
    let position = strategy
        .strategy()
        .position(parent, child, viewport, options);
    log::debug!(
        target: "placement",
        "{strategy}: parent {:?}, child {:?}, viewport {:?} -> ({}, {})",
        parent,
        child,
        viewport,
        position.left,
        position.top
    );
    position
}

/// Like [`calculate_child_position`], for a viewport whose top-left corner
/// is not at the origin. `parent` and the result are in the same space as
/// `bounds`.
pub fn calculate_child_position_within(
    strategy: &str,
    parent: &Rect,
    child: Dimension,
    bounds: &Rect,
    options: &PlacementOptions,
) -> Result<Position, PlacementError> {
    let local_parent = Rect {
        top: parent.top - bounds.top,
        left: parent.left - bounds.left,
        ..*parent
    };
    let position =
        calculate_child_position(strategy, &local_parent, child, bounds.dimension(), options)?;
    Ok(position.translate(bounds.left, bounds.top))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gap_is_zero() {
        assert_eq!(PlacementOptions::default().gap, 0.0);
        let parsed: PlacementOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, PlacementOptions::default());
    }

    #[test]
    fn unknown_strategy_is_reported() {
        let err = calculate_child_position(
            "diagonal",
            &Rect::new(0.0, 0.0, 10.0, 10.0),
            Dimension::new(5.0, 5.0),
            Dimension::new(100.0, 100.0),
            &PlacementOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PlacementError::InvalidStrategy { ref name, .. } if name == "diagonal"));
    }

    #[test]
    fn bottom_places_child_under_parent() {
        let position = calculate_child_position(
            "bottom",
            &Rect::new(0.0, 0.0, 100.0, 20.0),
            Dimension::new(50.0, 200.0),
            Dimension::new(300.0, 220.0),
            &PlacementOptions::default(),
        )
        .unwrap();
        assert_eq!(position, Position::new(25.0, 20.0));
    }

    #[test]
    fn translated_viewport_matches_origin_viewport() {
        let parent = Rect::new(100.0, 50.0, 100.0, 20.0);
        let child = Dimension::new(60.0, 40.0);
        let options = PlacementOptions::with_gap(8.0);
        let local = calculate_child_position(
            "top",
            &parent,
            child,
            Dimension::new(400.0, 400.0),
            &options,
        )
        .unwrap();

        let bounds = Rect::new(1000.0, -300.0, 400.0, 400.0);
        let shifted_parent = Rect {
            top: parent.top + bounds.top,
            left: parent.left + bounds.left,
            ..parent
        };
        let shifted =
            calculate_child_position_within("top", &shifted_parent, child, &bounds, &options)
                .unwrap();
        assert_eq!(shifted, local.translate(bounds.left, bounds.top));
        assert_eq!(local, Position::new(70.0, 52.0));
    }
}
