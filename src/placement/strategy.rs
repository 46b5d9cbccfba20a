use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::PlacementOptions;
use super::axis::{AxisKind, Direction, Placement};
use super::error::PlacementError;
use super::resolver::{
    AxisResolver, AxisSpan, FALLBACK_PRIMARY, FALLBACK_SECONDARY, float_cmp,
};
use crate::ir::{Dimension, Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrategyName {
    #[serde(rename = "top")]
    Top,
    #[serde(rename = "bottom")]
    Bottom,
    #[serde(rename = "left")]
    Left,
    #[serde(rename = "right")]
    Right,
    #[serde(rename = "top left")]
    TopLeft,
    #[serde(rename = "top center")]
    TopCenter,
    #[serde(rename = "top right")]
    TopRight,
    #[serde(rename = "bottom left")]
    BottomLeft,
    #[serde(rename = "bottom center")]
    BottomCenter,
    #[serde(rename = "bottom right")]
    BottomRight,
    #[serde(rename = "left top")]
    LeftTop,
    #[serde(rename = "left center")]
    LeftCenter,
    #[serde(rename = "left bottom")]
    LeftBottom,
    #[serde(rename = "right top")]
    RightTop,
    #[serde(rename = "right center")]
    RightCenter,
    #[serde(rename = "right bottom")]
    RightBottom,
}

impl StrategyName {
    pub const ALL: [StrategyName; 16] = [
        StrategyName::Top,
        StrategyName::Bottom,
        StrategyName::Left,
        StrategyName::Right,
        StrategyName::TopLeft,
        StrategyName::TopCenter,
        StrategyName::TopRight,
        StrategyName::BottomLeft,
        StrategyName::BottomCenter,
        StrategyName::BottomRight,
        StrategyName::LeftTop,
        StrategyName::LeftCenter,
        StrategyName::LeftBottom,
        StrategyName::RightTop,
        StrategyName::RightCenter,
        StrategyName::RightBottom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StrategyName::Top => "top",
            StrategyName::Bottom => "bottom",
            StrategyName::Left => "left",
            StrategyName::Right => "right",
            StrategyName::TopLeft => "top left",
            StrategyName::TopCenter => "top center",
            StrategyName::TopRight => "top right",
            StrategyName::BottomLeft => "bottom left",
            StrategyName::BottomCenter => "bottom center",
            StrategyName::BottomRight => "bottom right",
            StrategyName::LeftTop => "left top",
            StrategyName::LeftCenter => "left center",
            StrategyName::LeftBottom => "left bottom",
            StrategyName::RightTop => "right top",
            StrategyName::RightCenter => "right center",
            StrategyName::RightBottom => "right bottom",
        }
    }

    /// The pre-built strategy for this name.
    pub fn strategy(self) -> Strategy {
        STRATEGIES
            .get(&self)
            .copied()
            .unwrap_or_else(|| self.build())
    }

    fn build(self) -> Strategy {
        use Placement::{Center, End, Start};
        use StrategyName::*;

        // Side picks the primary placement and which direction separates;
        // the second word picks the secondary alignment.
        let (side, vertical_side, align) = match self {
            Top | TopCenter => (Start, true, Center),
            TopLeft => (Start, true, Start),
            TopRight => (Start, true, End),
            Bottom | BottomCenter => (End, true, Center),
            BottomLeft => (End, true, Start),
            BottomRight => (End, true, End),
            Left | LeftCenter => (Start, false, Center),
            LeftTop => (Start, false, Start),
            LeftBottom => (Start, false, End),
            Right | RightCenter => (End, false, Center),
            RightTop => (End, false, Start),
            RightBottom => (End, false, End),
        };
        let primary = AxisResolver::new_unchecked(AxisKind::Primary, side);
        let secondary = AxisResolver::new_unchecked(AxisKind::Secondary, align);
        if vertical_side {
            Strategy::new(secondary, primary)
        } else {
            Strategy::new(primary, secondary)
        }
    }
}

impl fmt::Display for StrategyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyName {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| PlacementError::invalid_strategy(s))
    }
}

static STRATEGIES: Lazy<BTreeMap<StrategyName, Strategy>> = Lazy::new(|| {
    StrategyName::ALL
        .iter()
        .map(|&name| (name, name.build()))
        .collect()
});

/// Which resolver pair produced a 2-D candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceSource {
    /// The strategy's own resolvers.
    Suggested,
    /// Start-aligned horizontally, after the parent vertically.
    FallbackBelow,
    /// After the parent horizontally, start-aligned vertically.
    FallbackRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionChoice {
    pub source: ChoiceSource,
    pub position: Position,
    pub deviation: f32,
    pub overlapped_area: f32,
}

/// A horizontal and a vertical resolver combined into a 2-D placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Strategy {
    pub horizontal: AxisResolver,
    pub vertical: AxisResolver,
}

impl Strategy {
    pub fn new(horizontal: AxisResolver, vertical: AxisResolver) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Scalars for one direction, as consumed by an [`AxisResolver`].
    pub fn span(
        direction: Direction,
        parent: &Rect,
        child: Dimension,
        viewport: Dimension,
        options: &PlacementOptions,
    ) -> AxisSpan {
        AxisSpan {
            parent_start: direction.rect_start(parent),
            parent_length: direction.rect_length(parent),
            child_length: direction.length(child),
            gap: options.gap,
            viewport_length: direction.length(viewport),
        }
    }

    /// The suggested position and both fallbacks, best first.
    pub fn choices(
        &self,
        parent: &Rect,
        child: Dimension,
        viewport: Dimension,
        options: &PlacementOptions,
    ) -> Vec<PositionChoice> {
        let horizontal = Self::span(Direction::Horizontal, parent, child, viewport, options);
        let vertical = Self::span(Direction::Vertical, parent, child, viewport, options);
        let calculate = |x: &AxisResolver, y: &AxisResolver| {
            Position::new(x.resolve(&horizontal), y.resolve(&vertical))
        };

        let suggested = calculate(&self.horizontal, &self.vertical);
        let candidates = [
            (ChoiceSource::Suggested, suggested),
            (
                ChoiceSource::FallbackBelow,
                calculate(&FALLBACK_SECONDARY, &FALLBACK_PRIMARY),
            ),
            (
                ChoiceSource::FallbackRight,
                calculate(&FALLBACK_PRIMARY, &FALLBACK_SECONDARY),
            ),
        ];

        let mut choices: Vec<PositionChoice> = candidates
            .into_iter()
            .map(|(source, position)| {
                let dx = position.left - suggested.left;
                let dy = position.top - suggested.top;
                PositionChoice {
                    source,
                    position,
                    deviation: dx * dx + dy * dy,
                    overlapped_area: parent.overlap_area(&position.to_rect(child)),
                }
            })
            .collect();
        choices.sort_by(|a, b| {
            float_cmp(a.overlapped_area, b.overlapped_area)
                .then_with(|| float_cmp(a.deviation, b.deviation))
        });
        choices
    }

    pub fn position(
        &self,
        parent: &Rect,
        child: Dimension,
        viewport: Dimension,
        options: &PlacementOptions,
    ) -> Position {
        let choices = self.choices(parent, child, viewport, options);
        let best = choices[0];
        if best.source != ChoiceSource::Suggested {
            log::debug!(
                target: "placement",
                "suggested position overlaps parent; using {:?} at ({}, {})",
                best.source,
                best.position.left,
                best.position.top
            );
        }
        best.position
    }
}
