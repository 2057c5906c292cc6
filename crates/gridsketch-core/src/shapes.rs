//! Finished shape records handed off to persistence.

use crate::attrs::Attributes;
use crate::id::ShapeId;
use kurbo::{BezPath, Circle as KurboCircle, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// Geometry of a committed shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    /// Closed polygon; vertices in the order they were placed.
    Polygon { vertices: Vec<Point> },
    /// Circle with a snapped center and free radius.
    Circle { center: Point, radius: f64 },
}

impl Geometry {
    /// Bounding box in canvas coordinates.
    pub fn bounds(&self) -> Rect {
        match self {
            Geometry::Polygon { vertices } => match vertices.split_first() {
                None => Rect::ZERO,
                Some((first, rest)) => rest
                    .iter()
                    .fold(Rect::from_points(*first, *first), |acc, p| acc.union_pt(*p)),
            },
            Geometry::Circle { center, radius } => Rect::new(
                center.x - radius,
                center.y - radius,
                center.x + radius,
                center.y + radius,
            ),
        }
    }

    /// Path representation for rendering.
    pub fn to_path(&self) -> BezPath {
        match self {
            Geometry::Polygon { vertices } => {
                let mut path = BezPath::new();
                if let Some((first, rest)) = vertices.split_first() {
                    path.move_to(*first);
                    for p in rest {
                        path.line_to(*p);
                    }
                    path.close_path();
                }
                path
            }
            Geometry::Circle { center, radius } => {
                KurboCircle::new(*center, *radius).to_path(0.1)
            }
        }
    }
}

/// The immutable record of a completed shape.
///
/// Built by a drawing tool at commit time and forwarded unchanged to the
/// persistence callback. Degenerate geometry (a two-vertex "polygon", a
/// radius-zero circle) is still a valid descriptor; rejecting it is the
/// persistence layer's call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDescriptor {
    /// Unique identifier within the session.
    pub id: ShapeId,
    /// Committed geometry.
    pub geometry: Geometry,
    /// Constant attributes merged in by the tool that produced the shape.
    pub attributes: Attributes,
}

/// SVG-style `points` attribute value for a polygon vertex list.
pub fn polygon_points_attr(vertices: &[Point]) -> String {
    vertices
        .iter()
        .map(|p| format!("{} {}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_polygon_bounds() {
        let geometry = Geometry::Polygon {
            vertices: vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(20.0, 5.0),
            ],
        };
        let bounds = geometry.bounds();
        assert_eq!(bounds, Rect::new(0.0, 0.0, 20.0, 10.0));
    }

    #[test]
    fn test_circle_bounds() {
        let geometry = Geometry::Circle {
            center: Point::new(10.0, 10.0),
            radius: 5.0,
        };
        assert_eq!(geometry.bounds(), Rect::new(5.0, 5.0, 15.0, 15.0));
    }

    #[test]
    fn test_polygon_path_is_closed() {
        let geometry = Geometry::Polygon {
            vertices: vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
            ],
        };
        let path = geometry.to_path();
        assert!(matches!(
            path.elements().last(),
            Some(kurbo::PathEl::ClosePath)
        ));
    }

    #[test]
    fn test_points_attr_format() {
        let points = [Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
        assert_eq!(polygon_points_attr(&points), "0 0 10 10");
    }

    #[test]
    fn test_descriptor_serde_round_trip() {
        let descriptor = ShapeDescriptor {
            id: Uuid::from_u128(7),
            geometry: Geometry::Circle {
                center: Point::new(10.0, 10.0),
                radius: 5.0,
            },
            attributes: crate::attrs::Attributes::new().with("fill", "lime"),
        };
        let json = serde_json::to_string(&descriptor).unwrap();
        let back: ShapeDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(descriptor, back);
    }
}
