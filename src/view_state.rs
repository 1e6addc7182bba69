// src/view_state.rs
//
// Interaction state for the panorama viewer, kept free of DOM types so the
// clamp/reset/delta behavior is testable with plain `cargo test`. The
// component layer translates browser events into calls on `ViewState`.

/// Vertical look angle is clamped to this symmetric range so the projected
/// image can never flip upside down.
pub const PITCH_LIMIT: f32 = 45.0;

pub const ZOOM_MIN: f32 = 0.5;
pub const ZOOM_MAX: f32 = 2.5;
/// Applied by the explicit zoom-in/zoom-out controls.
pub const ZOOM_STEP: f32 = 0.25;
/// Converts wheel `delta_y` units into zoom units (one 100-unit notch = 0.3).
pub const ZOOM_WHEEL_SCALE: f32 = 0.003;
/// Degrees of yaw added per auto-rotate tick.
pub const AUTO_ROTATE_STEP: f32 = 0.05;

/// Which semantics a drag has: rotating the view or translating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    Rotate,
    Move,
}

/// Lifecycle of the panorama asset for the current mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Horizontal look angle in degrees. Unbounded; CSS rotation is periodic.
    pub yaw: f32,
    /// Vertical look angle in degrees, always within `±PITCH_LIMIT`.
    pub pitch: f32,
    /// Translation offsets in pixels, accumulated in Move mode.
    pub pan_x: f32,
    pub pan_y: f32,
    /// Scale multiplier, always within `[ZOOM_MIN, ZOOM_MAX]`.
    pub zoom: f32,
    pub dragging: bool,
    last_pointer: (f32, f32),
    pub mode: ControlMode,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl ViewState {
    pub fn new(initial_zoom: f32) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: initial_zoom.clamp(ZOOM_MIN, ZOOM_MAX),
            dragging: false,
            last_pointer: (0.0, 0.0),
            mode: ControlMode::Rotate,
        }
    }

    /// Records the drag anchor. Does not yet move anything.
    pub fn begin_drag(&mut self, x: f32, y: f32) {
        self.dragging = true;
        self.last_pointer = (x, y);
    }

    /// Applies one pointer sample. Deltas are taken against the previous
    /// sample, not the drag origin, so rotation speed stays consistent over
    /// a long drag. Returns whether any state changed.
    pub fn drag_to(&mut self, x: f32, y: f32, sensitivity: f32) -> bool {
        if !self.dragging {
            return false;
        }
        let (lx, ly) = self.last_pointer;
        let dx = (x - lx) * sensitivity;
        let dy = (y - ly) * sensitivity;
        match self.mode {
            ControlMode::Rotate => {
                self.yaw += dx;
                self.pitch = (self.pitch + dy).clamp(-PITCH_LIMIT, PITCH_LIMIT);
            }
            ControlMode::Move => {
                self.pan_x += dx;
                self.pan_y += dy;
            }
        }
        self.last_pointer = (x, y);
        true
    }

    /// No inertia: releasing the pointer stops all motion immediately.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub fn wheel_zoom(&mut self, delta_y: f32) {
        self.set_zoom(self.zoom - delta_y * ZOOM_WHEEL_SCALE);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Restores the neutral view in one atomic update. Control mode and any
    /// in-progress drag anchor are left alone.
    pub fn reset(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
        self.zoom = 1.0;
    }

    pub fn set_mode(&mut self, mode: ControlMode) {
        self.mode = mode;
    }

    /// Advances the idle rotation by one tick. Suppressed mid-drag so the
    /// user's anchor point does not slide under the pointer.
    pub fn auto_rotate_tick(&mut self) -> bool {
        if self.dragging {
            return false;
        }
        self.yaw += AUTO_ROTATE_STEP;
        true
    }

    /// Composes the surface transform in fixed order: translate, rotate-Y,
    /// rotate-X (sign inverted so dragging down looks down), scale.
    pub fn transform_style(&self) -> String {
        format!(
            "transform: translate({}px, {}px) rotateY({}deg) rotateX({}deg) scale({});",
            self.pan_x, self.pan_y, self.yaw, -self.pitch, self.zoom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_stays_clamped_under_any_drag() {
        let mut view = ViewState::new(1.0);
        view.begin_drag(0.0, 0.0);
        for i in 1..200 {
            view.drag_to(0.0, (i * 50) as f32, 1.0);
        }
        assert_eq!(view.pitch, PITCH_LIMIT);
        for i in 1..400 {
            view.drag_to(0.0, -(i as f32) * 50.0, 1.0);
        }
        assert_eq!(view.pitch, -PITCH_LIMIT);
        assert!(view.pitch.abs() <= PITCH_LIMIT);
    }

    #[test]
    fn drag_deltas_are_relative_to_previous_sample() {
        let mut view = ViewState::new(1.0);
        view.begin_drag(100.0, 100.0);
        assert!(view.drag_to(130.0, 115.0, 0.3));
        assert!((view.yaw - 9.0).abs() < 1e-5);
        assert!((view.pitch - 4.5).abs() < 1e-5);
        // A second sample measures against (130, 115), not the origin.
        view.drag_to(130.0, 115.0, 0.3);
        assert!((view.yaw - 9.0).abs() < 1e-5);
    }

    #[test]
    fn drag_without_begin_is_ignored() {
        let mut view = ViewState::new(1.0);
        assert!(!view.drag_to(500.0, 500.0, 1.0));
        assert_eq!(view.yaw, 0.0);
        assert_eq!(view.pitch, 0.0);
    }

    #[test]
    fn begin_drag_does_not_move_the_view() {
        let mut view = ViewState::new(1.0);
        view.begin_drag(42.0, 17.0);
        assert_eq!(view.yaw, 0.0);
        assert_eq!(view.pitch, 0.0);
        assert_eq!(view.pan_x, 0.0);
        assert!(view.dragging);
    }

    #[test]
    fn move_mode_pans_without_rotating() {
        let mut view = ViewState::new(1.0);
        view.set_mode(ControlMode::Move);
        view.begin_drag(0.0, 0.0);
        view.drag_to(10.0, -20.0, 1.0);
        assert_eq!(view.pan_x, 10.0);
        assert_eq!(view.pan_y, -20.0);
        assert_eq!(view.yaw, 0.0);
        assert_eq!(view.pitch, 0.0);
    }

    #[test]
    fn rotate_mode_never_touches_pan() {
        let mut view = ViewState::new(1.0);
        view.begin_drag(0.0, 0.0);
        view.drag_to(35.0, 12.0, 0.5);
        assert_eq!(view.pan_x, 0.0);
        assert_eq!(view.pan_y, 0.0);
    }

    #[test]
    fn wheel_zoom_saturates_at_max() {
        let mut view = ViewState::new(1.0);
        // Five notches of +0.3 each would overshoot 2.5 without the clamp.
        for _ in 0..5 {
            view.wheel_zoom(-100.0);
        }
        assert_eq!(view.zoom, ZOOM_MAX);
    }

    #[test]
    fn zoom_steps_saturate_at_both_ends() {
        let mut view = ViewState::new(1.0);
        for _ in 0..20 {
            view.zoom_in();
        }
        assert_eq!(view.zoom, ZOOM_MAX);
        for _ in 0..20 {
            view.zoom_out();
        }
        assert_eq!(view.zoom, ZOOM_MIN);
    }

    #[test]
    fn initial_zoom_is_clamped() {
        assert_eq!(ViewState::new(100.0).zoom, ZOOM_MAX);
        assert_eq!(ViewState::new(0.0).zoom, ZOOM_MIN);
    }

    #[test]
    fn reset_restores_neutral_exactly() {
        let mut view = ViewState::new(2.0);
        view.set_mode(ControlMode::Move);
        view.begin_drag(0.0, 0.0);
        view.drag_to(300.0, 150.0, 1.0);
        view.set_mode(ControlMode::Rotate);
        view.drag_to(512.0, 640.0, 0.7);
        view.wheel_zoom(250.0);
        view.reset();
        assert_eq!(view.yaw, 0.0);
        assert_eq!(view.pitch, 0.0);
        assert_eq!(view.pan_x, 0.0);
        assert_eq!(view.pan_y, 0.0);
        assert_eq!(view.zoom, 1.0);
    }

    #[test]
    fn auto_rotate_advances_yaw_only_while_idle() {
        let mut view = ViewState::new(1.0);
        assert!(view.auto_rotate_tick());
        assert_eq!(view.yaw, AUTO_ROTATE_STEP);
        view.begin_drag(0.0, 0.0);
        assert!(!view.auto_rotate_tick());
        assert_eq!(view.yaw, AUTO_ROTATE_STEP);
    }

    #[test]
    fn transform_orders_translate_rotate_scale() {
        let mut view = ViewState::new(1.0);
        view.set_mode(ControlMode::Move);
        view.begin_drag(0.0, 0.0);
        view.drag_to(5.0, 6.0, 1.0);
        view.set_mode(ControlMode::Rotate);
        view.begin_drag(0.0, 0.0);
        view.drag_to(10.0, 4.0, 1.0);
        let style = view.transform_style();
        let translate = style.find("translate").unwrap();
        let rotate_y = style.find("rotateY").unwrap();
        let rotate_x = style.find("rotateX").unwrap();
        let scale = style.find("scale").unwrap();
        assert!(translate < rotate_y && rotate_y < rotate_x && rotate_x < scale);
        // Pitch is applied with its sign inverted.
        assert!(style.contains("rotateX(-4deg)"));
    }
}
