//! Draw session: routes pointer events to the active tool.

use crate::id::{IdGenerator, UuidIds};
use crate::shapes::ShapeDescriptor;
use crate::surface::GridSurface;
use crate::tools::{DraftTool, DrawContext, Tool};
use kurbo::Point;
use thiserror::Error;

/// Session-level contract violations.
///
/// These indicate a wiring bug in the host, not a user action, so they
/// surface as errors instead of silently dropping the event.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("pointer event delivered with no active tool")]
    NoActiveTool,
}

/// Callback receiving each finished shape.
pub type ShapeFinishedFn = Box<dyn FnMut(ShapeDescriptor)>;

/// Owns the surface and at most one active drawing tool.
///
/// The host wires its two pointer event sources to
/// [`pointer_click`](Self::pointer_click) and
/// [`pointer_move`](Self::pointer_move) once for the session's lifetime;
/// activating a tool only swaps the dispatch target. Every shape a tool commits is forwarded unchanged to the
/// persistence callback, exactly once per shape and never for cancelled
/// drafts.
pub struct DrawSession<S: GridSurface> {
    surface: S,
    ids: Box<dyn IdGenerator>,
    active: Option<Tool>,
    on_shape_finished: ShapeFinishedFn,
}

impl<S: GridSurface> DrawSession<S> {
    /// Create a session with UUIDv4 shape identifiers.
    pub fn new(surface: S, on_shape_finished: impl FnMut(ShapeDescriptor) + 'static) -> Self {
        Self {
            surface,
            ids: Box::new(UuidIds),
            active: None,
            on_shape_finished: Box::new(on_shape_finished),
        }
    }

    /// Swap in a different identifier scheme.
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Make `tool` the active tool.
    ///
    /// Whatever the current tool had in progress is cancelled first:
    /// switching tools always abandons unfinished work, it never carries
    /// over, and the abandoned draft's drawables are removed before the
    /// new tool can touch the surface.
    pub fn activate(&mut self, tool: impl Into<Tool>) {
        self.cancel();
        let tool = tool.into();
        log::debug!("tool activated: {}", tool.name());
        self.active = Some(tool);
    }

    /// Abandon the active tool's draft, keeping the tool installed.
    pub fn cancel(&mut self) {
        if let Some(tool) = &mut self.active {
            let mut ctx = DrawContext {
                surface: &mut self.surface,
                ids: &mut *self.ids,
            };
            tool.cancel(&mut ctx);
        }
    }

    /// Deliver a pointer click to the active tool.
    pub fn pointer_click(&mut self, point: Point) -> Result<(), SessionError> {
        let tool = self.active.as_mut().ok_or(SessionError::NoActiveTool)?;
        let mut ctx = DrawContext {
            surface: &mut self.surface,
            ids: &mut *self.ids,
        };
        if let Some(descriptor) = tool.on_click(&mut ctx, point) {
            log::debug!("shape finished: {}", descriptor.id);
            (self.on_shape_finished)(descriptor);
        }
        Ok(())
    }

    /// Deliver a pointer move to the active tool.
    pub fn pointer_move(&mut self, point: Point) -> Result<(), SessionError> {
        let tool = self.active.as_mut().ok_or(SessionError::NoActiveTool)?;
        let mut ctx = DrawContext {
            surface: &mut self.surface,
            ids: &mut *self.ids,
        };
        tool.on_move(&mut ctx, point);
        Ok(())
    }

    /// The active tool, if any.
    pub fn active_tool(&self) -> Option<&Tool> {
        self.active.as_ref()
    }

    /// The surface this session draws on.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, for hosts that manage the dot grid.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::Attributes;
    use crate::id::SequentialIds;
    use crate::shapes::Geometry;
    use crate::surface::{DrawableKind, MemorySurface};
    use crate::tools::{CircleTool, PolygonTool};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn session_with_log() -> (
        DrawSession<MemorySurface>,
        Rc<RefCell<Vec<ShapeDescriptor>>>,
    ) {
        let _ = env_logger::builder().is_test(true).try_init();
        let finished = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&finished);
        let session = DrawSession::new(MemorySurface::new(10.0), move |descriptor| {
            sink.borrow_mut().push(descriptor)
        })
        .with_id_generator(SequentialIds::new());
        (session, finished)
    }

    #[test]
    fn test_pointer_event_without_tool_is_an_error() {
        let (mut session, _) = session_with_log();
        assert_eq!(
            session.pointer_click(Point::new(0.0, 0.0)),
            Err(SessionError::NoActiveTool)
        );
        assert_eq!(
            session.pointer_move(Point::new(0.0, 0.0)),
            Err(SessionError::NoActiveTool)
        );
    }

    #[test]
    fn test_polygon_end_to_end() {
        let (mut session, finished) = session_with_log();
        session.activate(PolygonTool::new());

        // Worked example from the dot-grid editor: spacing 10, four
        // clicks, the last one revisits the snapped first vertex.
        for (x, y) in [(1.0, 1.0), (9.0, 12.0), (21.0, 19.0), (1.0, 1.0)] {
            session.pointer_move(Point::new(x - 0.5, y + 0.5)).unwrap();
            session.pointer_click(Point::new(x, y)).unwrap();
        }

        let finished = finished.borrow();
        assert_eq!(finished.len(), 1);
        assert_eq!(
            finished[0].geometry,
            Geometry::Polygon {
                vertices: vec![
                    Point::new(0.0, 0.0),
                    Point::new(10.0, 10.0),
                    Point::new(20.0, 20.0),
                ],
            }
        );
        assert_eq!(session.surface().count_of(DrawableKind::Line), 0);
        assert_eq!(session.surface().count_of(DrawableKind::Polygon), 1);
    }

    #[test]
    fn test_tool_switch_abandons_draft_without_persisting() {
        let (mut session, finished) = session_with_log();
        session.activate(PolygonTool::new());
        session.pointer_click(Point::new(0.0, 0.0)).unwrap();
        session.pointer_click(Point::new(10.0, 0.0)).unwrap();
        assert!(session.surface().drawable_count() > 0);

        session.activate(CircleTool::new());
        assert_eq!(session.surface().drawable_count(), 0);
        assert!(finished.borrow().is_empty());

        // The new tool starts clean on the same surface.
        session.pointer_click(Point::new(30.0, 30.0)).unwrap();
        session.pointer_click(Point::new(33.0, 34.0)).unwrap();
        assert_eq!(finished.borrow().len(), 1);
    }

    #[test]
    fn test_session_cancel_keeps_tool_installed() {
        let (mut session, finished) = session_with_log();
        session.activate(CircleTool::new());
        session.pointer_click(Point::new(10.0, 10.0)).unwrap();

        session.cancel();
        assert_eq!(session.surface().drawable_count(), 0);
        assert!(finished.borrow().is_empty());
        assert!(session.active_tool().is_some());

        // Still usable after the cancel.
        session.pointer_click(Point::new(0.0, 0.0)).unwrap();
        session.pointer_click(Point::new(3.0, 4.0)).unwrap();
        assert_eq!(finished.borrow().len(), 1);
    }

    #[test]
    fn test_sequential_ids_assign_in_commit_order() {
        let (mut session, finished) = session_with_log();
        session.activate(CircleTool::with_attributes(
            Attributes::new().with("r", 5.0),
        ));
        session.pointer_click(Point::new(0.0, 0.0)).unwrap();
        session.pointer_click(Point::new(50.0, 50.0)).unwrap();

        let finished = finished.borrow();
        assert_eq!(finished.len(), 2);
        assert_ne!(finished[0].id, finished[1].id);
        assert!(finished[0].id < finished[1].id);
    }

    #[test]
    fn test_moves_alone_never_persist() {
        let (mut session, finished) = session_with_log();
        session.activate(PolygonTool::new());
        for i in 0..50 {
            session.pointer_move(Point::new(i as f64, i as f64)).unwrap();
        }
        assert!(finished.borrow().is_empty());
        assert_eq!(session.surface().drawable_count(), 0);
    }
}
