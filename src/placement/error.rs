use thiserror::Error;

use super::axis::{AxisKind, Placement};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// The strategy name is not one of the known placements.
    #[error("invalid strategy {name:?}; expected one of: {}", .valid.join(", "))]
    InvalidStrategy {
        name: String,
        valid: Vec<&'static str>,
    },

    #[error("placement `{placement}` is not defined on the {kind} axis")]
    UnsupportedPlacement { kind: AxisKind, placement: Placement },
}

impl PlacementError {
    pub(crate) fn invalid_strategy(name: &str) -> Self {
        PlacementError::InvalidStrategy {
            name: name.to_string(),
            valid: super::StrategyName::ALL
                .iter()
                .map(|strategy| strategy.as_str())
                .collect(),
        }
    }
}
