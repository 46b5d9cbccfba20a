use crate::ir::{Dimension, Position, Rect};
use crate::placement::{
    AxisCandidate, AxisResolver, Direction, PlacementOptions, PositionChoice, Strategy,
    StrategyName,
};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Everything the placement algorithm considered for one call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementReport {
    pub strategy: StrategyName,
    pub parent: Rect,
    pub child: Dimension,
    pub viewport: Dimension,
    pub gap: f32,
    pub horizontal: AxisDump,
    pub vertical: AxisDump,
    pub choices: Vec<PositionChoice>,
    pub position: Position,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisDump {
    pub kind: String,
    pub preferred: String,
    pub candidates: Vec<AxisCandidate>,
}

impl AxisDump {
    fn from_resolver(
        resolver: &AxisResolver,
        direction: Direction,
        parent: &Rect,
        child: Dimension,
        viewport: Dimension,
        options: &PlacementOptions,
    ) -> Self {
        let span = Strategy::span(direction, parent, child, viewport, options);
        AxisDump {
            kind: resolver.kind().to_string(),
            preferred: resolver.preferred().to_string(),
            candidates: resolver.candidates(&span),
        }
    }
}

impl PlacementReport {
    pub fn explain(
        strategy: StrategyName,
        parent: &Rect,
        child: Dimension,
        viewport: Dimension,
        options: &PlacementOptions,
    ) -> Self {
        let resolved = strategy.strategy();
        let choices = resolved.choices(parent, child, viewport, options);
        let position = choices
            .first()
            .map(|choice| choice.position)
            .unwrap_or_default();
        PlacementReport {
            strategy,
            parent: *parent,
            child,
            viewport,
            gap: options.gap,
            horizontal: AxisDump::from_resolver(
                &resolved.horizontal,
                Direction::Horizontal,
                parent,
                child,
                viewport,
                options,
            ),
            vertical: AxisDump::from_resolver(
                &resolved.vertical,
                Direction::Vertical,
                parent,
                child,
                viewport,
                options,
            ),
            choices,
            position,
        }
    }
}

pub fn write_placement_report(path: &Path, report: &PlacementReport) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}
