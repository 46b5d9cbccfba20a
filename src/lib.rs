#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod placement;
pub mod placement_dump;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, PlacementConfig, load_config};
pub use ir::{Dimension, Offset, Position, Rect};
pub use placement::{
    PlacementError, PlacementOptions, StrategyName, calculate_child_position,
    calculate_child_position_with, calculate_child_position_within,
};
pub use placement_dump::PlacementReport;
