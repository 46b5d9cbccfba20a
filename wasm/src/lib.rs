use popover_placement::{Dimension, PlacementOptions, Rect, calculate_child_position};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PositionRequest {
    parent: Rect,
    child: Dimension,
    viewport: Dimension,
    gap: Option<f32>,
}

fn position_json(strategy: &str, request_json: &str) -> Result<String, String> {
    let request: PositionRequest =
        serde_json::from_str(request_json).map_err(|error| error.to_string())?;
    let options = PlacementOptions {
        gap: request.gap.unwrap_or_default(),
    };
    let position = calculate_child_position(
        strategy,
        &request.parent,
        request.child,
        request.viewport,
        &options,
    )
    .map_err(|error| error.to_string())?;
    serde_json::to_string(&position).map_err(|error| error.to_string())
}

/// Resolve a child position from a JSON request of
/// `{parent, child, viewport, gap?}`; returns `{"left": .., "top": ..}`.
#[wasm_bindgen]
pub fn calculate_child_position_json(strategy: &str, request_json: &str) -> Result<String, JsValue> {
    position_json(strategy, request_json).map_err(|error| JsValue::from_str(&error))
}

#[cfg(test)]
mod tests {
    use popover_placement::Position;

    use crate::position_json;

    #[test]
    fn resolves_bottom_request() {
        let json = position_json(
            "bottom",
            r#"{
                "parent": {"top": 0, "left": 0, "width": 100, "height": 20},
                "child": {"width": 50, "height": 200},
                "viewport": {"width": 300, "height": 220}
            }"#,
        )
        .expect("bottom request should resolve");

        let position: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(position, Position::new(25.0, 20.0));
    }

    #[test]
    fn reports_unknown_strategy() {
        let err = position_json(
            "sideways",
            r#"{
                "parent": {"top": 0, "left": 0, "width": 1, "height": 1},
                "child": {"width": 1, "height": 1},
                "viewport": {"width": 10, "height": 10}
            }"#,
        )
        .unwrap_err();
        assert!(err.contains("sideways"));
    }
}
