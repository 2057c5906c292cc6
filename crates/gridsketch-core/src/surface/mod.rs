//! Drawing surface abstraction.

mod memory;

pub use memory::{Drawable, MemorySurface};

use crate::attrs::Attributes;
use serde::{Deserialize, Serialize};

/// Kind of drawable element a surface knows how to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawableKind {
    Line,
    Circle,
    Polygon,
}

/// Opaque handle to a drawable issued by a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrawableHandle(u64);

impl DrawableHandle {
    /// Wrap a surface-internal id. Only surface implementations should
    /// mint handles.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The surface-internal id.
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Surface the drawing tools issue their commands to.
///
/// Implementations can target SVG, a GPU scene graph, or plain memory
/// ([`MemorySurface`]); the tools only ever create, update and remove
/// drawables through this trait and read the grid spacing.
pub trait GridSurface {
    /// Quantization unit of the dot grid. Always positive.
    fn grid_spacing(&self) -> f64;

    /// Create a drawable and return its handle.
    fn create_drawable(&mut self, kind: DrawableKind, attributes: Attributes) -> DrawableHandle;

    /// Merge the given attribute keys into an existing drawable,
    /// overwriting on conflict.
    fn update_drawable(&mut self, handle: DrawableHandle, attributes: Attributes);

    /// Remove a drawable. Callers track their own handles and must not
    /// remove the same handle twice.
    fn remove_drawable(&mut self, handle: DrawableHandle);
}
