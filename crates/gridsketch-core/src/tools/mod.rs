//! Drawing tools: per-shape state machines driven by pointer events.

mod circle;
mod polygon;

pub use circle::CircleTool;
pub use polygon::PolygonTool;

use crate::attrs::Attributes;
use crate::id::IdGenerator;
use crate::shapes::ShapeDescriptor;
use crate::snap::snap_to_grid;
use crate::surface::GridSurface;
use kurbo::Point;

/// Per-event context handed to a tool by the session.
///
/// Borrows the surface the tool draws on and the id source for committed
/// shapes. Tools never hold these across events; state that must survive
/// between events lives in the tool's own draft fields.
pub struct DrawContext<'a> {
    pub surface: &'a mut dyn GridSurface,
    pub ids: &'a mut dyn IdGenerator,
}

impl DrawContext<'_> {
    /// Snap a raw pointer position to the surface's grid.
    pub fn snap(&self, point: Point) -> Point {
        snap_to_grid(point, self.surface.grid_spacing())
    }
}

/// Lifecycle every drawing tool implements.
///
/// A tool owns at most one draft at a time. The draft exists from the
/// first click of a new shape until commit or cancel; both ways out remove
/// every preview drawable the draft put on the surface.
pub trait DraftTool {
    /// Advance the draft by one click. Returns the finished descriptor
    /// when this click completed the shape.
    fn on_click(&mut self, ctx: &mut DrawContext<'_>, point: Point) -> Option<ShapeDescriptor>;

    /// Update the preview of the in-progress element. Never finalizes and
    /// never touches committed state; no-op without an active draft.
    fn on_move(&mut self, ctx: &mut DrawContext<'_>, point: Point);

    /// Discard the draft and its preview drawables. Idempotent.
    fn cancel(&mut self, ctx: &mut DrawContext<'_>);

    /// Whether a draft is in progress.
    fn is_active(&self) -> bool;

    /// Replace the constant attributes merged into every shape this tool
    /// produces from now on.
    fn set_constant_attributes(&mut self, attributes: Attributes);
}

/// The tools a session can activate.
#[derive(Debug)]
pub enum Tool {
    Polygon(PolygonTool),
    Circle(CircleTool),
}

impl Tool {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Polygon(_) => "polygon",
            Tool::Circle(_) => "circle",
        }
    }
}

impl DraftTool for Tool {
    fn on_click(&mut self, ctx: &mut DrawContext<'_>, point: Point) -> Option<ShapeDescriptor> {
        match self {
            Tool::Polygon(tool) => tool.on_click(ctx, point),
            Tool::Circle(tool) => tool.on_click(ctx, point),
        }
    }

    fn on_move(&mut self, ctx: &mut DrawContext<'_>, point: Point) {
        match self {
            Tool::Polygon(tool) => tool.on_move(ctx, point),
            Tool::Circle(tool) => tool.on_move(ctx, point),
        }
    }

    fn cancel(&mut self, ctx: &mut DrawContext<'_>) {
        match self {
            Tool::Polygon(tool) => tool.cancel(ctx),
            Tool::Circle(tool) => tool.cancel(ctx),
        }
    }

    fn is_active(&self) -> bool {
        match self {
            Tool::Polygon(tool) => tool.is_active(),
            Tool::Circle(tool) => tool.is_active(),
        }
    }

    fn set_constant_attributes(&mut self, attributes: Attributes) {
        match self {
            Tool::Polygon(tool) => tool.set_constant_attributes(attributes),
            Tool::Circle(tool) => tool.set_constant_attributes(attributes),
        }
    }
}

impl From<PolygonTool> for Tool {
    fn from(tool: PolygonTool) -> Self {
        Tool::Polygon(tool)
    }
}

impl From<CircleTool> for Tool {
    fn from(tool: CircleTool) -> Self {
        Tool::Circle(tool)
    }
}
