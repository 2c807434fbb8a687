// Pointer tracking: raw target, low-pass smoothed position, and the linear
// influence fade after the last movement.

use super::constants::{POINTER_DECAY_MS, POINTER_LERP, POINTER_WORLD_SCALE};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub current: Vec2,
    pub target: Vec2,
    pub last_move_ms: Option<f64>,
}

/// Values handed to the motion model each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerUniform {
    pub offset: Vec2,
    pub influence: f32,
}

impl PointerState {
    pub fn on_move(&mut self, target: Vec2, now_ms: f64) {
        self.target = target;
        self.last_move_ms = Some(now_ms);
    }

    /// Pointer left the container: aim back at the center, keep the fade running.
    pub fn on_leave(&mut self) {
        self.target = Vec2::ZERO;
    }

    /// One frame of first-order smoothing toward the target.
    pub fn smooth(&mut self) {
        self.current += (self.target - self.current) * POINTER_LERP;
    }

    /// 1.0 at the moment of a move, fading linearly to exactly 0.0 after
    /// `POINTER_DECAY_MS`. Zero before any move.
    pub fn decay(&self, now_ms: f64) -> f32 {
        match self.last_move_ms {
            Some(t) => {
                let elapsed = (now_ms - t).max(0.0);
                (1.0 - elapsed / POINTER_DECAY_MS).clamp(0.0, 1.0) as f32
            }
            None => 0.0,
        }
    }

    pub fn uniform(&self, now_ms: f64, influence: f32) -> PointerUniform {
        let decay = self.decay(now_ms);
        if decay == 0.0 {
            return PointerUniform::default();
        }
        PointerUniform {
            offset: self.current * POINTER_WORLD_SCALE * decay,
            influence: influence * decay,
        }
    }
}

/// Map client coordinates into container space: x in [-1, 1] left to right,
/// y in [-1, 1] bottom to top. `None` for a zero-sized container.
pub fn normalize_client(
    client_x: f32,
    client_y: f32,
    left: f32,
    top: f32,
    width: f32,
    height: f32,
) -> Option<Vec2> {
    if !(width > 0.0 && height > 0.0) {
        return None;
    }
    let x = ((client_x - left) / width) * 2.0 - 1.0;
    let y = -((client_y - top) / height) * 2.0 + 1.0;
    (x.is_finite() && y.is_finite()).then_some(Vec2::new(x, y))
}
