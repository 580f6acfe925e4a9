//! Drag-to-select gesture tracking.
//!
//! The tracker only remembers pointer positions. Each call receives the view
//! model generation to pick against, so a rebuild mid-gesture simply means the
//! caller passes the old generation until the gesture ends.

use tracing::debug;

use crate::picking::DragArea;
use crate::types::{PixelRect, Point};
use crate::view_model::ShapeViewModel;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum BrushState {
    #[default]
    Idle,
    Dragging { start: Point, current: Point },
}

/// Pointer-down / move / up state machine for brushing.
#[derive(Debug, Clone, Default)]
pub struct BrushTracker {
    state: BrushState,
}

impl BrushTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer down: start a gesture, discarding any unfinished one.
    pub fn begin(&mut self, point: Point) {
        self.state = BrushState::Dragging {
            start: point,
            current: point,
        };
    }

    /// Pointer move; ignored while idle.
    pub fn update(&mut self, point: Point) {
        if let BrushState::Dragging { current, .. } = &mut self.state {
            *current = point;
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, BrushState::Dragging { .. })
    }

    /// Corners of the gesture in progress.
    pub fn bound(&self) -> Option<[Point; 2]> {
        match self.state {
            BrushState::Idle => None,
            BrushState::Dragging { start, current } => Some([start, current]),
        }
    }

    /// Highlight rectangle for the gesture in progress.
    pub fn preview(&self, model: &ShapeViewModel) -> Option<PixelRect> {
        model.pick_drag_shape(self.bound()?)
    }

    /// Pointer up: end the gesture and report the brushed area.
    ///
    /// A gesture that never moved is a click and reports nothing. Otherwise
    /// `on_brush_end` receives the drag area, which is also returned.
    pub fn finish<F>(&mut self, model: &ShapeViewModel, point: Point, on_brush_end: F) -> Option<DragArea>
    where
        F: FnOnce(&DragArea),
    {
        let BrushState::Dragging { start, .. } = std::mem::take(&mut self.state) else {
            return None;
        };
        if start == point {
            return None;
        }
        let area = model.pick_drag_area([start, point]);
        debug!(
            cells = area.cells.len(),
            columns = area.x.len(),
            rows = area.y.len(),
            "brush end"
        );
        on_brush_end(&area);
        Some(area)
    }

    /// Abandon the gesture in progress.
    pub fn cancel(&mut self) {
        self.state = BrushState::Idle;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn click_without_movement_reports_nothing() {
        let model = ShapeViewModel::empty();
        let mut brush = BrushTracker::new();
        brush.begin(Point::new(5.0, 5.0));
        let mut called = false;
        assert!(brush
            .finish(&model, Point::new(5.0, 5.0), |_| called = true)
            .is_none());
        assert!(!called);
        assert!(!brush.is_dragging());
    }

    #[test]
    fn update_is_ignored_while_idle() {
        let mut brush = BrushTracker::new();
        brush.update(Point::new(1.0, 1.0));
        assert!(brush.bound().is_none());

        brush.begin(Point::new(0.0, 0.0));
        brush.update(Point::new(3.0, 4.0));
        assert_eq!(brush.bound(), Some([Point::new(0.0, 0.0), Point::new(3.0, 4.0)]));
        brush.cancel();
        assert!(!brush.is_dragging());
    }
}
