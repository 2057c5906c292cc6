//! Circle drawing tool.

use super::{DraftTool, DrawContext};
use crate::attrs::Attributes;
use crate::id::ShapeId;
use crate::shapes::{Geometry, ShapeDescriptor};
use crate::surface::{DrawableHandle, DrawableKind};
use kurbo::Point;

/// The circle being sized between the center click and the radius click.
#[derive(Debug)]
struct SizingCircle {
    id: ShapeId,
    handle: DrawableHandle,
    center: Point,
}

/// Draws a circle from a snapped center click and a drag-defined radius.
///
/// The radius is the Euclidean distance from the center to the raw pointer
/// position; only the center snaps to the grid. When the constant
/// attributes carry a numeric `r`, a single click commits the circle at
/// that fixed radius and the sizing step never happens.
#[derive(Debug, Default)]
pub struct CircleTool {
    constant_attributes: Attributes,
    sizing: Option<SizingCircle>,
}

impl CircleTool {
    /// Create a circle tool with no constant attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a circle tool whose shapes all carry `attributes`.
    pub fn with_attributes(attributes: Attributes) -> Self {
        Self {
            constant_attributes: attributes,
            sizing: None,
        }
    }

    fn descriptor(&self, id: ShapeId, center: Point, radius: f64) -> ShapeDescriptor {
        ShapeDescriptor {
            id,
            geometry: Geometry::Circle { center, radius },
            attributes: self.constant_attributes.clone(),
        }
    }
}

impl DraftTool for CircleTool {
    fn on_click(&mut self, ctx: &mut DrawContext<'_>, point: Point) -> Option<ShapeDescriptor> {
        if let Some(circle) = self.sizing.take() {
            // Second click fixes the radius at the raw pointer distance.
            let radius = circle.center.distance(point);
            ctx.surface
                .update_drawable(circle.handle, Attributes::new().with("r", radius));
            log::debug!("circle committed with radius {radius}");
            return Some(self.descriptor(circle.id, circle.center, radius));
        }

        let center = ctx.snap(point);
        let id = ctx.ids.next_id();
        // Constant attributes are merged last, so a fixed `r` overrides
        // the initial zero radius.
        let attributes = Attributes::new()
            .with("id", id.to_string())
            .with("cx", center.x)
            .with("cy", center.y)
            .with("r", 0.0)
            .merged(&self.constant_attributes);
        let handle = ctx.surface.create_drawable(DrawableKind::Circle, attributes);

        if let Some(radius) = self.constant_attributes.number("r") {
            // Fixed-radius shortcut: nothing left to size.
            log::debug!("circle committed at fixed radius {radius}");
            return Some(self.descriptor(id, center, radius));
        }

        self.sizing = Some(SizingCircle { id, handle, center });
        None
    }

    fn on_move(&mut self, ctx: &mut DrawContext<'_>, point: Point) {
        if let Some(circle) = &self.sizing {
            let radius = circle.center.distance(point);
            ctx.surface
                .update_drawable(circle.handle, Attributes::new().with("r", radius));
        }
    }

    fn cancel(&mut self, ctx: &mut DrawContext<'_>) {
        if let Some(circle) = self.sizing.take() {
            log::debug!("circle draft cancelled");
            ctx.surface.remove_drawable(circle.handle);
        }
    }

    fn is_active(&self) -> bool {
        self.sizing.is_some()
    }

    fn set_constant_attributes(&mut self, attributes: Attributes) {
        self.constant_attributes = attributes;
    }
}
