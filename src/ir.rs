use serde::{Deserialize, Serialize};

/// Size of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimension {
    pub width: f32,
    pub height: f32,
}

impl Dimension {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Top-left corner of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub top: f32,
    pub left: f32,
}

/// Full bounding box of an anchor element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn from_parts(offset: Offset, dimension: Dimension) -> Self {
        Self {
            top: offset.top,
            left: offset.left,
            width: dimension.width,
            height: dimension.height,
        }
    }

    pub fn offset(&self) -> Offset {
        Offset {
            top: self.top,
            left: self.left,
        }
    }

    pub fn dimension(&self) -> Dimension {
        Dimension {
            width: self.width,
            height: self.height,
        }
    }

    /// Area shared with `other`, zero when the rectangles are disjoint.
    pub fn overlap_area(&self, other: &Rect) -> f32 {
        crate::placement::overlapping_length(self.left, self.width, other.left, other.width)
            * crate::placement::overlapping_length(self.top, self.height, other.top, other.height)
    }
}

/// Resolved top-left position of the floating child.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub left: f32,
    pub top: f32,
}

impl Position {
    pub fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }

    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
        }
    }

    pub fn to_rect(self, child: Dimension) -> Rect {
        Rect {
            top: self.top,
            left: self.left,
            width: child.width,
            height: child.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_round_trips_parts() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(Rect::from_parts(rect.offset(), rect.dimension()), rect);
    }

    #[test]
    fn overlap_area_of_contained_rect() {
        let outer = Rect::new(0.0, 0.0, 20.0, 20.0);
        let inner = Rect::new(5.0, 5.0, 5.0, 5.0);
        assert_eq!(outer.overlap_area(&inner), 25.0);
        assert_eq!(inner.overlap_area(&outer), 25.0);
    }

    #[test]
    fn overlap_area_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 10.0, 10.0);
        assert_eq!(a.overlap_area(&b), 0.0);
    }

    #[test]
    fn position_to_rect_overlaps_parent() {
        let parent = Rect::new(10.0, 10.0, 20.0, 20.0);
        let child = Position::new(25.0, 0.0).to_rect(Dimension::new(10.0, 15.0));
        assert_eq!(child, Rect::new(0.0, 25.0, 10.0, 15.0));
        // 5 wide (25..30) by 5 tall (10..15).
        assert_eq!(parent.overlap_area(&child), 25.0);
    }

    #[test]
    fn rect_deserializes_from_ui_json() {
        let rect: Rect =
            serde_json::from_str(r#"{"top": 1, "left": 2, "width": 3, "height": 4}"#).unwrap();
        assert_eq!(rect, Rect::new(1.0, 2.0, 3.0, 4.0));
    }
}
