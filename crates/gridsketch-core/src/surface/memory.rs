//! In-memory surface implementation.

use super::{DrawableHandle, DrawableKind, GridSurface};
use crate::attrs::Attributes;
use std::collections::BTreeMap;

/// A retained drawable on a [`MemorySurface`].
#[derive(Debug, Clone)]
pub struct Drawable {
    pub kind: DrawableKind,
    pub attributes: Attributes,
}

/// Surface that retains drawables in memory.
///
/// The reference implementation of [`GridSurface`], used by the tests and
/// usable headless. Also owns the background dot grid: one dot per grid
/// intersection over a rectangular extent, kept apart from the shape
/// drawables so previews and commits never disturb it.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    spacing: f64,
    next_handle: u64,
    drawables: BTreeMap<u64, Drawable>,
    grid_dots: Vec<kurbo::Point>,
}

impl MemorySurface {
    /// Create a surface with the given grid spacing and no dot grid.
    pub fn new(spacing: f64) -> Self {
        assert!(spacing > 0.0, "grid spacing must be positive");
        Self {
            spacing,
            next_handle: 0,
            drawables: BTreeMap::new(),
            grid_dots: Vec::new(),
        }
    }

    /// Rebuild the background dot grid to cover `width` x `height`,
    /// discarding any previous dots. Dots sit on every grid intersection
    /// from the origin up to and including the extent.
    pub fn regenerate_dot_grid(&mut self, width: f64, height: f64) {
        self.grid_dots.clear();
        let mut y = 0.0;
        while y <= height {
            let mut x = 0.0;
            while x <= width {
                self.grid_dots.push(kurbo::Point::new(x, y));
                x += self.spacing;
            }
            y += self.spacing;
        }
        log::debug!(
            "dot grid regenerated: {} dots at spacing {}",
            self.grid_dots.len(),
            self.spacing
        );
    }

    /// Change the grid spacing and rebuild the dot grid for the extent.
    pub fn set_grid(&mut self, spacing: f64, width: f64, height: f64) {
        assert!(spacing > 0.0, "grid spacing must be positive");
        self.spacing = spacing;
        self.regenerate_dot_grid(width, height);
    }

    /// Number of background grid dots.
    pub fn dot_count(&self) -> usize {
        self.grid_dots.len()
    }

    /// Background grid dot positions.
    pub fn dots(&self) -> &[kurbo::Point] {
        &self.grid_dots
    }

    /// Number of shape drawables (grid dots excluded).
    pub fn drawable_count(&self) -> usize {
        self.drawables.len()
    }

    /// Look up a drawable by handle.
    pub fn drawable(&self, handle: DrawableHandle) -> Option<&Drawable> {
        self.drawables.get(&handle.raw())
    }

    /// Iterate over shape drawables in creation order.
    pub fn drawables(&self) -> impl Iterator<Item = (DrawableHandle, &Drawable)> {
        self.drawables
            .iter()
            .map(|(raw, d)| (DrawableHandle::from_raw(*raw), d))
    }

    /// Count drawables of one kind.
    pub fn count_of(&self, kind: DrawableKind) -> usize {
        self.drawables.values().filter(|d| d.kind == kind).count()
    }
}

impl GridSurface for MemorySurface {
    fn grid_spacing(&self) -> f64 {
        self.spacing
    }

    fn create_drawable(&mut self, kind: DrawableKind, attributes: Attributes) -> DrawableHandle {
        let handle = DrawableHandle::from_raw(self.next_handle);
        self.next_handle += 1;
        self.drawables.insert(handle.raw(), Drawable { kind, attributes });
        handle
    }

    fn update_drawable(&mut self, handle: DrawableHandle, attributes: Attributes) {
        match self.drawables.get_mut(&handle.raw()) {
            Some(drawable) => drawable.attributes.merge(&attributes),
            None => {
                log::warn!("update of unknown drawable handle {}", handle.raw());
                debug_assert!(false, "update of unknown drawable handle");
            }
        }
    }

    fn remove_drawable(&mut self, handle: DrawableHandle) {
        if self.drawables.remove(&handle.raw()).is_none() {
            log::warn!("remove of unknown drawable handle {}", handle.raw());
            debug_assert!(false, "remove of unknown drawable handle");
        }
    }
}
