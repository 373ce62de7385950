use crate::scale::percentage_to_threshold;
use crate::threshold::{count_matching, FilterMode};
use serde::{Deserialize, Serialize};

/// Horizontal extent of the plotting area, supplied by the rendering layer
/// with every pointer event. The core never queries layout itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdState {
    pub value: f64,
    pub mode: FilterMode,
    pub count: u64,
    pub dragging: bool,
}

type ChangeCallback = Box<dyn FnMut(f64, u64)>;

/// Owns the active threshold and converts pointer positions into threshold
/// values and match counts. Two states: idle and dragging. While dragging,
/// the event loop is expected to route every pointer move here regardless of
/// position (global capture); pointer-up anywhere ends the drag.
pub struct DragController {
    sorted: Vec<f64>,
    min: f64,
    max: f64,
    log_scale: bool,
    state: ThresholdState,
    on_change: Option<ChangeCallback>,
    disposed: bool,
}

impl DragController {
    /// `sorted` must be ascending (as produced by the distribution builder).
    /// The threshold starts at `initial_threshold`, or the range midpoint.
    pub fn new(
        sorted: Vec<f64>,
        log_scale: bool,
        initial_threshold: Option<f64>,
        mode: FilterMode,
    ) -> Self {
        let (min, max) = match (sorted.first(), sorted.last()) {
            (Some(&lo), Some(&hi)) => (lo, hi),
            _ => (0.0, 0.0),
        };
        let value = initial_threshold.unwrap_or((min + max) / 2.0);
        let count = count_matching(&sorted, mode, value);
        Self {
            sorted,
            min,
            max,
            log_scale,
            state: ThresholdState { value, mode, count, dragging: false },
            on_change: None,
            disposed: false,
        }
    }

    /// Registers the callback invoked synchronously with `(threshold, count)`
    /// on every pointer move while dragging.
    pub fn on_change(&mut self, cb: impl FnMut(f64, u64) + 'static) {
        self.on_change = Some(Box::new(cb));
    }

    pub fn state(&self) -> &ThresholdState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.dragging
    }

    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn log_scale(&self) -> bool {
        self.log_scale
    }

    pub fn set_log_scale(&mut self, log_scale: bool) {
        self.log_scale = log_scale;
    }

    /// Idle -> Dragging. Returns false when already dragging or disposed, so
    /// no second handle can begin a concurrent drag.
    pub fn start(&mut self) -> bool {
        if self.disposed || self.state.dragging {
            return false;
        }
        self.state.dragging = true;
        true
    }

    /// Processes a pointer move at horizontal position `x`. No-op unless
    /// dragging. The position is clamped into the plot area, mapped to a
    /// threshold value, and the match count is recomputed; the change
    /// callback observes the pair before this returns.
    pub fn handle_move(&mut self, x: f64, area: PlotArea) -> Option<(f64, u64)> {
        if !self.state.dragging {
            return None;
        }
        let fraction = if area.width > 0.0 {
            ((x - area.left) / area.width).clamp(0.0, 1.0)
        } else if x >= area.left {
            // zero-width area: clamp instead of dividing
            1.0
        } else {
            0.0
        };
        let value = percentage_to_threshold(self.min, self.max, fraction * 100.0, self.log_scale);
        self.state.value = value;
        self.state.count = count_matching(&self.sorted, self.state.mode, value);
        let count = self.state.count;
        if let Some(cb) = self.on_change.as_mut() {
            cb(value, count);
        }
        Some((value, count))
    }

    /// Dragging -> Idle. Pointer-up may occur anywhere.
    pub fn stop(&mut self) {
        self.state.dragging = false;
    }

    /// Ends any active drag and drops the change callback; no notification
    /// is delivered after this returns.
    pub fn dispose(&mut self) {
        self.state.dragging = false;
        self.on_change = None;
        self.disposed = true;
    }

    pub fn set_mode(&mut self, mode: FilterMode) {
        self.state.mode = mode;
        self.state.count = count_matching(&self.sorted, mode, self.state.value);
    }

    pub fn set_value(&mut self, value: f64) {
        self.state.value = value;
        self.state.count = count_matching(&self.sorted, self.state.mode, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn controller() -> DragController {
        let values: Vec<f64> = (0..=100).map(|i| i as f64).collect();
        DragController::new(values, false, None, FilterMode::Lte)
    }

    const AREA: PlotArea = PlotArea { left: 10.0, width: 200.0 };

    #[test]
    fn initial_threshold_defaults_to_midpoint() {
        let c = controller();
        assert_eq!(c.state().value, 50.0);
        assert_eq!(c.state().count, 51); // 0..=50
        assert!(!c.is_dragging());
    }

    #[test]
    fn move_without_start_is_ignored() {
        let mut c = controller();
        assert!(c.handle_move(100.0, AREA).is_none());
        assert_eq!(c.state().value, 50.0);
    }

    #[test]
    fn drag_session_reports_before_release() {
        let mut c = controller();
        let seen: Rc<RefCell<Vec<(f64, u64)>>> = Rc::default();
        let sink = Rc::clone(&seen);
        c.on_change(move |v, n| sink.borrow_mut().push((v, n)));

        assert!(c.start());
        // 60% across the plot area of a [0, 100] linear range
        let (value, count) = c.handle_move(10.0 + 120.0, AREA).unwrap();
        assert!((value - 60.0).abs() < 1e-9);
        assert_eq!(count, 61);
        assert_eq!(seen.borrow().as_slice(), &[(value, count)]);
        assert!(c.is_dragging());
        c.stop();
        assert!(!c.is_dragging());
        assert_eq!(c.state().value, value);
    }

    #[test]
    fn second_start_is_rejected_while_dragging() {
        let mut c = controller();
        assert!(c.start());
        assert!(!c.start());
    }

    #[test]
    fn positions_outside_area_are_clamped() {
        let mut c = controller();
        c.start();
        let (v, _) = c.handle_move(-500.0, AREA).unwrap();
        assert_eq!(v, 0.0);
        let (v, _) = c.handle_move(5000.0, AREA).unwrap();
        assert_eq!(v, 100.0);
    }

    #[test]
    fn zero_width_area_clamps() {
        let mut c = controller();
        c.start();
        let degenerate = PlotArea { left: 10.0, width: 0.0 };
        let (v, _) = c.handle_move(37.0, degenerate).unwrap();
        assert_eq!(v, 100.0); // at/right of the left edge
        let (v, _) = c.handle_move(3.0, degenerate).unwrap();
        assert_eq!(v, 0.0);
    }

    #[test]
    fn log_scale_drag_maps_geometrically() {
        let values: Vec<f64> = vec![1.0, 10.0, 100.0];
        let mut c = DragController::new(values, true, None, FilterMode::Lte);
        c.start();
        let (v, count) = c.handle_move(10.0 + 100.0, AREA).unwrap(); // midpoint
        assert!((v - 10.0).abs() < 1e-9);
        assert_eq!(count, 2);
    }

    #[test]
    fn mode_change_recomputes_count() {
        let mut c = controller();
        c.set_mode(FilterMode::Gt);
        assert_eq!(c.state().count, 50); // 51..=100
        c.set_value(0.0);
        assert_eq!(c.state().count, 100);
    }

    #[test]
    fn empty_input_counts_zero_everywhere() {
        let mut c = DragController::new(Vec::new(), false, None, FilterMode::Lte);
        assert_eq!(c.state().count, 0);
        c.start();
        let (v, count) = c.handle_move(100.0, AREA).unwrap();
        assert_eq!(v, 0.0); // degenerate range resolves to min
        assert_eq!(count, 0);
    }

    #[test]
    fn dispose_silences_and_blocks_restart() {
        let mut c = controller();
        let seen: Rc<RefCell<Vec<(f64, u64)>>> = Rc::default();
        let sink = Rc::clone(&seen);
        c.on_change(move |v, n| sink.borrow_mut().push((v, n)));
        c.start();
        c.dispose();
        assert!(!c.is_dragging());
        assert!(!c.start());
        assert!(c.handle_move(100.0, AREA).is_none());
        assert!(seen.borrow().is_empty());
    }
}
