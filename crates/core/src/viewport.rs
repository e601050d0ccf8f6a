//! Viewport transform engine: pan and zoom-to-cursor over the board layer.
//!
//! [`ViewportController`] owns the only mutable state in the system — the
//! layer's scale and offset plus a transient drag anchor — and applies
//! gesture transitions deterministically. It never draws; each operation
//! reports whether the frontend should repaint.

use serde::{Deserialize, Serialize};
use tabula_protocol::LayerTransform;

/// Tunable viewport constants. `Default` matches the stock board viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportConfig {
    pub initial_scale: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Scale change applied per wheel notch.
    pub zoom_step: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            initial_scale: 1.0,
            min_scale: 0.1,
            max_scale: 10.0,
            zoom_step: 0.1,
        }
    }
}

/// A normalized, device-independent input event.
///
/// Input adapters translate platform pointer/wheel events into these;
/// coordinates are client-space (whatever space the adapter renders in).
/// `notches` is positive to zoom in, negative to zoom out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    PanStart { x: f64, y: f64 },
    PanMove { x: f64, y: f64 },
    PanEnd,
    Zoom { x: f64, y: f64, notches: f64 },
}

/// Anchor of an in-progress pan: the last observed cursor position.
#[derive(Debug, Clone, Copy)]
struct DragAnchor {
    last_x: f64,
    last_y: f64,
}

/// Owns the viewport state and applies pan/zoom gesture transitions.
///
/// Two orthogonal pieces of state: the persistent `{scale, offset}` value
/// and a transient drag mode (`idle` / `dragging`, encoded as
/// `Option<DragAnchor>`). Zoom is valid in either mode and does not affect
/// drag mode.
///
/// Invariant: `min_scale <= scale <= max_scale` after every transition.
#[derive(Debug, Clone)]
pub struct ViewportController {
    config: ViewportConfig,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    drag: Option<DragAnchor>,
}

impl ViewportController {
    pub fn new(config: ViewportConfig) -> Self {
        Self {
            scale: config.initial_scale.clamp(config.min_scale, config.max_scale),
            offset_x: 0.0,
            offset_y: 0.0,
            drag: None,
            config,
        }
    }

    /// Dispatch a normalized gesture. Returns `true` when the operation
    /// requests a repaint — at most once per input event.
    pub fn handle(&mut self, event: GestureEvent) -> bool {
        match event {
            GestureEvent::PanStart { x, y } => self.begin_pan(x, y),
            GestureEvent::PanMove { x, y } => self.pan(x, y),
            GestureEvent::PanEnd => self.end_pan(),
            GestureEvent::Zoom { x, y, notches } => self.zoom(x, y, notches),
        }
    }

    /// Open a drag session anchored at the given cursor position.
    ///
    /// Idempotent: calling again before [`Self::end_pan`] just resets the
    /// anchor. Never changes the viewport state itself.
    pub fn begin_pan(&mut self, x: f64, y: f64) -> bool {
        self.drag = Some(DragAnchor {
            last_x: x,
            last_y: y,
        });
        false
    }

    /// Translate the offset by the cursor's movement since the previous
    /// `pan`/`begin_pan` call, then re-anchor at the new position.
    ///
    /// The delta is relative to the immediately preceding position, not
    /// the drag origin, so many small moves compose to the same offset as
    /// one large move. A `pan` with no active session is a no-op: the
    /// controller does not trust callers to sequence gestures correctly.
    pub fn pan(&mut self, x: f64, y: f64) -> bool {
        let Some(anchor) = self.drag.as_mut() else {
            return false;
        };
        self.offset_x += x - anchor.last_x;
        self.offset_y += y - anchor.last_y;
        anchor.last_x = x;
        anchor.last_y = y;
        true
    }

    /// Close the drag session. Safe to call when idle.
    pub fn end_pan(&mut self) -> bool {
        self.drag = None;
        false
    }

    /// Zoom about the cursor position by `notches * zoom_step`.
    ///
    /// The world point under the cursor stays at the same client position
    /// under the new transform. The clamped case is deliberately not
    /// special-cased: at a scale bound the ratio is 1 and the offset
    /// update degenerates to a no-op, keeping behavior continuous at the
    /// bounds.
    pub fn zoom(&mut self, x: f64, y: f64, notches: f64) -> bool {
        let old_scale = self.scale;
        let new_scale = (old_scale + notches * self.config.zoom_step)
            .clamp(self.config.min_scale, self.config.max_scale);

        let ratio = new_scale / old_scale;
        self.offset_x = (self.offset_x - x) * ratio + x;
        self.offset_y = (self.offset_y - y) * ratio + y;
        self.scale = new_scale;
        true
    }

    /// Restore the configured initial scale and a zero offset. Drag mode
    /// is untouched — it is orthogonal to the viewport value.
    pub fn reset(&mut self) -> bool {
        self.scale = self
            .config
            .initial_scale
            .clamp(self.config.min_scale, self.config.max_scale);
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        true
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// The `setTransform` payload for the current state.
    pub fn transform(&self) -> LayerTransform {
        LayerTransform::new(self.scale, self.offset_x, self.offset_y)
    }
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(ViewportConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_protocol::Point;

    fn controller_with_step(zoom_step: f64) -> ViewportController {
        ViewportController::new(ViewportConfig {
            zoom_step,
            ..ViewportConfig::default()
        })
    }

    #[test]
    fn starts_at_configured_defaults() {
        let vc = ViewportController::default();
        assert_eq!(vc.scale(), 1.0);
        assert_eq!(vc.offset(), (0.0, 0.0));
        assert!(!vc.is_dragging());
    }

    #[test]
    fn zoom_scale_follows_clamped_step() {
        let mut vc = ViewportController::default();
        assert!(vc.zoom(0.0, 0.0, 1.0));
        assert!((vc.scale() - 1.1).abs() < 1e-12);

        vc.zoom(0.0, 0.0, -4.0);
        assert!((vc.scale() - 0.7).abs() < 1e-12);

        // A huge zoom-in lands exactly on the max bound.
        vc.zoom(0.0, 0.0, 1000.0);
        assert_eq!(vc.scale(), 10.0);
    }

    #[test]
    fn zoom_concrete_example() {
        // Step magnitude 1.0: one notch doubles the scale from 1 to 2.
        let mut vc = controller_with_step(1.0);
        vc.zoom(100.0, 100.0, 1.0);

        assert_eq!(vc.scale(), 2.0);
        assert_eq!(vc.offset(), (-100.0, -100.0));
    }

    #[test]
    fn zoom_keeps_cursor_world_point_fixed() {
        let mut vc = ViewportController::default();
        // Arbitrary prior state from earlier gestures.
        vc.begin_pan(0.0, 0.0);
        vc.pan(33.0, -12.0);
        vc.end_pan();
        vc.zoom(200.0, 150.0, 3.0);

        let cursor = Point::new(140.0, 95.0);
        let world_before = vc.transform().invert(cursor);
        vc.zoom(cursor.x, cursor.y, 2.0);
        let world_after = vc.transform().invert(cursor);

        assert!((world_before.x - world_after.x).abs() < 1e-9);
        assert!((world_before.y - world_after.y).abs() < 1e-9);
    }

    #[test]
    fn pan_accumulates_relative_deltas() {
        let mut vc = ViewportController::default();
        vc.begin_pan(50.0, 50.0);

        assert!(vc.pan(60.0, 55.0));
        assert_eq!(vc.offset(), (10.0, 5.0));

        // No movement: offsets unchanged.
        vc.pan(60.0, 55.0);
        assert_eq!(vc.offset(), (10.0, 5.0));

        vc.end_pan();

        // Stray move after release is ignored.
        assert!(!vc.pan(70.0, 70.0));
        assert_eq!(vc.offset(), (10.0, 5.0));
    }

    #[test]
    fn pan_without_begin_is_noop() {
        let mut vc = ViewportController::default();
        assert!(!vc.pan(10.0, 10.0));
        assert_eq!(vc.offset(), (0.0, 0.0));
    }

    #[test]
    fn small_pans_compose_like_one_big_pan() {
        let mut split = ViewportController::default();
        split.begin_pan(0.0, 0.0);
        split.pan(5.0, 0.0);
        split.pan(10.0, 0.0);

        let mut single = ViewportController::default();
        single.begin_pan(0.0, 0.0);
        single.pan(10.0, 0.0);

        assert_eq!(split.offset(), single.offset());
    }

    #[test]
    fn begin_pan_again_resets_the_anchor() {
        let mut vc = ViewportController::default();
        vc.begin_pan(0.0, 0.0);
        vc.begin_pan(100.0, 100.0);
        vc.pan(101.0, 100.0);
        // Only the movement since the second anchor counts.
        assert_eq!(vc.offset(), (1.0, 0.0));
    }

    #[test]
    fn zoom_out_clamps_at_min_scale_exactly() {
        let mut vc = ViewportController::default();
        for _ in 0..50 {
            vc.zoom(40.0, 30.0, -1.0);
        }
        assert_eq!(vc.scale(), vc.config().min_scale);

        // Further zoom-out: scale pinned, ratio is 1, offset unchanged.
        let offset = vc.offset();
        assert!(vc.zoom(40.0, 30.0, -1.0));
        assert_eq!(vc.scale(), vc.config().min_scale);
        assert_eq!(vc.offset(), offset);
    }

    #[test]
    fn end_pan_when_idle_is_safe() {
        let mut vc = ViewportController::default();
        assert!(!vc.end_pan());
        assert!(!vc.end_pan());
        assert_eq!(vc.scale(), 1.0);
        assert_eq!(vc.offset(), (0.0, 0.0));
    }

    #[test]
    fn zoom_is_valid_while_dragging() {
        let mut vc = ViewportController::default();
        vc.begin_pan(10.0, 10.0);
        vc.zoom(10.0, 10.0, 1.0);
        assert!(vc.is_dragging());
        assert!(vc.pan(20.0, 10.0));
    }

    #[test]
    fn handle_dispatches_gestures() {
        let mut vc = ViewportController::default();
        assert!(!vc.handle(GestureEvent::PanStart { x: 0.0, y: 0.0 }));
        assert!(vc.handle(GestureEvent::PanMove { x: 4.0, y: 2.0 }));
        assert!(!vc.handle(GestureEvent::PanEnd));
        assert!(vc.handle(GestureEvent::Zoom {
            x: 0.0,
            y: 0.0,
            notches: 1.0
        }));
        assert_eq!(vc.offset(), (4.0, 2.0));
        assert!((vc.scale() - 1.1).abs() < 1e-12);
    }

    #[test]
    fn reset_restores_initial_view() {
        let mut vc = ViewportController::default();
        vc.zoom(70.0, 20.0, 5.0);
        vc.begin_pan(0.0, 0.0);
        vc.pan(15.0, 15.0);

        assert!(vc.reset());
        assert_eq!(vc.scale(), 1.0);
        assert_eq!(vc.offset(), (0.0, 0.0));
        // Drag mode is orthogonal and survives a reset.
        assert!(vc.is_dragging());
    }

    #[test]
    fn transform_matches_state() {
        let mut vc = ViewportController::default();
        vc.zoom(100.0, 100.0, 2.0);
        let tf = vc.transform();
        assert_eq!(tf.scale, vc.scale());
        assert_eq!((tf.offset_x, tf.offset_y), vc.offset());
    }
}
