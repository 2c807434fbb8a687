// Render-time motion model. Logical particle positions stay authoritative
// for recycling; the drift and pointer nudge below only shape what is drawn.
// `shaders/particles.wgsl` applies the camera and sprite falloff on top.

use super::constants::*;
use super::particles::Particle;
use super::pointer::PointerUniform;
use glam::{Vec2, Vec3};

/// GLSL/WGSL `smoothstep`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Gentle per-axis sinusoidal drift; every term reads the logical position.
pub fn drift(position: Vec3, time: f32) -> Vec3 {
    let p = position;
    Vec3::new(
        p.x + (time * DRIFT_X.0 + p.z * DRIFT_X_SPATIAL).cos() * DRIFT_X.1,
        p.y + (time * DRIFT_Y.0 + p.x * DRIFT_Y_SPATIAL).sin() * DRIFT_Y.1,
        p.z + (time * DRIFT_Z.0 + p.y * DRIFT_Z_SPATIAL).sin() * DRIFT_Z.1,
    )
}

/// XY nudge toward the pointer, full strength near it and none past `POINTER_REACH`.
pub fn pointer_displacement(position: Vec3, pointer: PointerUniform) -> Vec2 {
    if pointer.influence == 0.0 {
        return Vec2::ZERO;
    }
    let delta = pointer.offset - position.truncate() * POINTER_PROJECTION;
    let strength = 1.0 - smoothstep(0.0, POINTER_REACH, delta.length());
    delta * pointer.influence * strength
}

/// Distance fade times the decorative pulse.
pub fn visual_alpha(apparent: Vec3, logical: Vec3, time: f32) -> f32 {
    let fade = 1.0 - smoothstep(FADE_START, FADE_END, apparent.length());
    let pulse = PULSE_BASE + PULSE_AMPLITUDE * (time * PULSE_RATE + logical.x + logical.y).sin();
    fade * pulse
}

/// Soft circular edge inside a sprite; `r` is the distance from the sprite
/// center in sprite units (0.5 = edge). Zero outside the circle.
pub fn sprite_alpha(r: f32) -> f32 {
    if r > 0.5 {
        return 0.0;
    }
    1.0 - smoothstep(0.0, 0.5, r)
}

/// Perspective-correct sprite diameter in physical pixels.
pub fn point_size_px(size: f32, depth: f32, alpha: f32, pixel_ratio: f32) -> f32 {
    size * (POINT_SCALE / depth.max(1e-3)) * (SIZE_ALPHA_BASE + SIZE_ALPHA_BOOST * alpha) * pixel_ratio
}

/// Per-instance data uploaded to the GPU each frame.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 3],
    pub alpha: f32,
}

pub fn sprite_for(particle: &Particle, time: f32, pointer: PointerUniform) -> SpriteInstance {
    let drifted = drift(particle.position, time);
    let nudge = pointer_displacement(drifted, pointer);
    let apparent = drifted + nudge.extend(0.0);
    SpriteInstance {
        position: apparent.to_array(),
        size: particle.size,
        color: particle.color.to_array(),
        alpha: visual_alpha(apparent, particle.position, time),
    }
}
