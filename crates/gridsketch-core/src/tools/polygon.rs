//! Polygon drawing tool.

use super::{DraftTool, DrawContext};
use crate::attrs::Attributes;
use crate::shapes::{polygon_points_attr, Geometry, ShapeDescriptor};
use crate::snap::VertexKey;
use crate::surface::{DrawableHandle, DrawableKind, GridSurface};
use kurbo::Point;

/// Builds a closed polygon out of a chain of clicked segments.
///
/// Each click snaps to the grid and either opens a new in-progress segment
/// or finalizes the current one. The draft is a chain of independently
/// drawable line segments rather than one polyline, so a move event only
/// touches the in-progress segment and closure falls out of a vertex-key
/// membership test, with no intersection geometry.
///
/// Closure: a click whose snapped point revisits any previously placed
/// vertex finishes the shape. All segment drawables are removed, one
/// polygon drawable replaces them, and the descriptor lists the visited
/// vertices in the order they were placed.
#[derive(Debug, Default)]
pub struct PolygonTool {
    constant_attributes: Attributes,
    /// In-progress segment pending its endpoint. At most one.
    active_segment: Option<DrawableHandle>,
    /// Segments whose endpoints are fixed, in click order.
    finalized_segments: Vec<DrawableHandle>,
    /// Vertices placed so far, in insertion order.
    visited: Vec<VertexKey>,
}

impl PolygonTool {
    /// Create a polygon tool with no constant attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a polygon tool whose shapes all carry `attributes`.
    pub fn with_attributes(attributes: Attributes) -> Self {
        Self {
            constant_attributes: attributes,
            ..Self::default()
        }
    }

    fn remove_all_segments(&mut self, surface: &mut dyn GridSurface) {
        if let Some(segment) = self.active_segment.take() {
            surface.remove_drawable(segment);
        }
        for segment in self.finalized_segments.drain(..) {
            surface.remove_drawable(segment);
        }
    }

    /// Open a fresh in-progress segment, degenerate at `start` until the
    /// pointer stretches it.
    fn start_segment(&mut self, ctx: &mut DrawContext<'_>, start: Point) {
        let attributes = Attributes::new()
            .with("x1", start.x)
            .with("y1", start.y)
            .with("x2", start.x)
            .with("y2", start.y)
            .with("stroke", "black");
        self.active_segment = Some(ctx.surface.create_drawable(DrawableKind::Line, attributes));
    }

    fn close_polygon(&mut self, ctx: &mut DrawContext<'_>) -> ShapeDescriptor {
        let vertices: Vec<Point> = self.visited.iter().map(VertexKey::point).collect();
        self.remove_all_segments(ctx.surface);
        self.visited.clear();

        let id = ctx.ids.next_id();
        let drawable_attributes = Attributes::new()
            .with("id", id.to_string())
            .with("points", polygon_points_attr(&vertices))
            .merged(&self.constant_attributes);
        ctx.surface
            .create_drawable(DrawableKind::Polygon, drawable_attributes);

        log::debug!("polygon closed with {} vertices", vertices.len());
        ShapeDescriptor {
            id,
            geometry: Geometry::Polygon { vertices },
            attributes: self.constant_attributes.clone(),
        }
    }
}

impl DraftTool for PolygonTool {
    fn on_click(&mut self, ctx: &mut DrawContext<'_>, point: Point) -> Option<ShapeDescriptor> {
        let snapped = ctx.snap(point);
        let key = VertexKey::new(snapped);

        if let Some(segment) = self.active_segment.take() {
            // Pin the in-progress endpoint to the snapped click.
            let endpoint = Attributes::new()
                .with("x2", snapped.x)
                .with("y2", snapped.y);
            ctx.surface.update_drawable(segment, endpoint);
            self.finalized_segments.push(segment);

            // Membership is tested against previously placed vertices
            // only; this click's key is not yet in the list.
            if self.visited.contains(&key) {
                return Some(self.close_polygon(ctx));
            }
        }

        self.visited.push(key);
        self.start_segment(ctx, snapped);
        None
    }

    fn on_move(&mut self, ctx: &mut DrawContext<'_>, point: Point) {
        // Preview follows the raw pointer; snapping happens on click.
        if let Some(segment) = self.active_segment {
            let endpoint = Attributes::new().with("x2", point.x).with("y2", point.y);
            ctx.surface.update_drawable(segment, endpoint);
        }
    }

    fn cancel(&mut self, ctx: &mut DrawContext<'_>) {
        if self.is_active() {
            log::debug!("polygon draft cancelled");
        }
        self.remove_all_segments(ctx.surface);
        self.visited.clear();
    }

    fn is_active(&self) -> bool {
        self.active_segment.is_some() || !self.finalized_segments.is_empty()
    }

    fn set_constant_attributes(&mut self, attributes: Attributes) {
        self.constant_attributes = attributes;
    }
}
