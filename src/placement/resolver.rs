// Per-axis candidate ranking. Everything here is one-dimensional; the
// strategy composer combines two resolvers into a 2-D position.

use std::cmp::Ordering;

use serde::Serialize;

use super::axis::{AxisKind, Placement};
use super::error::PlacementError;

/// Clamp a raw coordinate so the child stays inside `[0, viewport_length]`.
///
/// A child longer than the viewport collapses to 0. `f32::min`/`max` skip a
/// NaN operand, so an infinite child in an infinite viewport keeps
/// `suggested` instead of turning into NaN.
pub fn adjust_position(suggested: f32, child_length: f32, viewport_length: f32) -> f32 {
    (viewport_length - child_length).min(suggested).max(0.0)
}

/// Length of the intersection of two 1-D intervals.
pub fn overlapping_length(a_start: f32, a_length: f32, b_start: f32, b_length: f32) -> f32 {
    ((b_start + b_length).min(a_start + a_length) - b_start.max(a_start)).max(0.0)
}

/// Parent, child and viewport projected onto one direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisSpan {
    pub parent_start: f32,
    pub parent_length: f32,
    pub child_length: f32,
    pub gap: f32,
    pub viewport_length: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisCandidate {
    pub placement: Placement,
    pub position: f32,
    pub adjustment: f32,
    pub deviation: f32,
    pub overlap: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisResolver {
    kind: AxisKind,
    preferred: Placement,
}

pub const FALLBACK_PRIMARY: AxisResolver =
    AxisResolver::new_unchecked(AxisKind::Primary, Placement::End);
pub const FALLBACK_SECONDARY: AxisResolver =
    AxisResolver::new_unchecked(AxisKind::Secondary, Placement::Start);

impl AxisResolver {
    pub fn new(kind: AxisKind, preferred: Placement) -> Result<Self, PlacementError> {
        if !kind.supports(preferred) {
            return Err(PlacementError::UnsupportedPlacement {
                kind,
                placement: preferred,
            });
        }
        Ok(Self::new_unchecked(kind, preferred))
    }

    pub(crate) const fn new_unchecked(kind: AxisKind, preferred: Placement) -> Self {
        Self { kind, preferred }
    }

    pub fn kind(&self) -> AxisKind {
        self.kind
    }

    pub fn preferred(&self) -> Placement {
        self.preferred
    }

    /// Every placement on the axis, clamped and scored, best first.
    pub fn candidates(&self, span: &AxisSpan) -> Vec<AxisCandidate> {
        let raw = |placement| {
            self.kind.raw_position(
                placement,
                span.parent_start,
                span.parent_length,
                span.child_length,
                span.gap,
            )
        };
        let preferred_position = raw(self.preferred);

        let mut results: Vec<AxisCandidate> = self
            .kind
            .placements()
            .iter()
            .map(|&placement| {
                let suggested = raw(placement);
                let position = adjust_position(suggested, span.child_length, span.viewport_length);
                AxisCandidate {
                    placement,
                    position,
                    adjustment: (suggested - position).abs(),
                    deviation: (preferred_position - position).abs(),
                    overlap: overlapping_length(
                        span.parent_start,
                        span.parent_length,
                        position,
                        span.child_length,
                    ),
                }
            })
            .collect();

        let overlap_sign = if self.kind.avoid_overlap() { 1.0 } else { -1.0 };
        // Stable sort: full ties keep the axis evaluation order.
        results.sort_by(|a, b| {
            let a_adjusted = a.adjustment > 0.0;
            let b_adjusted = b.adjustment > 0.0;
            a_adjusted
                .cmp(&b_adjusted)
                .then_with(|| float_cmp(a.overlap * overlap_sign, b.overlap * overlap_sign))
                .then_with(|| float_cmp(a.deviation, b.deviation))
                .then_with(|| float_cmp(a.adjustment, b.adjustment))
        });
        results
    }

    /// Winning clamped coordinate for this axis.
    pub fn resolve(&self, span: &AxisSpan) -> f32 {
        let candidates = self.candidates(span);
        let best = candidates[0];
        log::trace!(
            target: "placement",
            "{} axis prefers {}: chose {} at {} (adjustment {}, overlap {})",
            self.kind,
            self.preferred,
            best.placement,
            best.position,
            best.adjustment,
            best.overlap
        );
        best.position
    }
}

pub(crate) fn float_cmp(a: f32, b: f32) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
