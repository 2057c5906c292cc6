//! GridSketch Core Library
//!
//! Platform-agnostic drawing state machines for the GridSketch dot-grid
//! editor: pointer gestures in, committed shape descriptors out.

pub mod attrs;
pub mod id;
pub mod session;
pub mod shapes;
pub mod snap;
pub mod surface;
pub mod tools;

pub use attrs::Attributes;
pub use id::{IdGenerator, SequentialIds, ShapeId, UuidIds};
pub use session::{DrawSession, SessionError};
pub use shapes::{Geometry, ShapeDescriptor};
pub use snap::{snap_to_grid, VertexKey};
pub use surface::{DrawableHandle, DrawableKind, GridSurface, MemorySurface};
pub use tools::{CircleTool, DraftTool, DrawContext, PolygonTool, Tool};
