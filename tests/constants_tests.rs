// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn shells_sit_inside_the_recycle_radius() {
    assert!(SPAWN_SHELL_INNER < SPAWN_SHELL_OUTER);
    assert!(RESPAWN_SHELL_INNER < RESPAWN_SHELL_OUTER);
    assert!(SPAWN_SHELL_OUTER < RECYCLE_RADIUS);
    assert!(RESPAWN_SHELL_OUTER < RECYCLE_RADIUS);
    assert!(RESPAWN_SHELL_INNER > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fade_band_ends_before_recycling() {
    assert!(FADE_START < FADE_END);
    assert!(FADE_END < RECYCLE_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pulse_stays_in_unit_range() {
    assert!(PULSE_BASE - PULSE_AMPLITUDE >= 0.0);
    assert!(PULSE_BASE + PULSE_AMPLITUDE <= 1.0);
    assert!(SIZE_ALPHA_BASE + SIZE_ALPHA_BOOST <= 1.0 + f32::EPSILON);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pointer_tuning_is_sane() {
    assert!(POINTER_LERP > 0.0 && POINTER_LERP <= 1.0);
    assert!(POINTER_DECAY_MS > 0.0);
    assert!(POINTER_REACH > 0.0);
    assert!(POINTER_WORLD_SCALE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_sits_outside_the_spawn_shell_planes() {
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZNEAR < CAMERA_ZFAR);
    assert!(CAMERA_Z > CAMERA_ZNEAR);
    assert!(CAMERA_FOVY_DEG > 0.0 && CAMERA_FOVY_DEG < 180.0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn defaults_are_valid() {
    assert!(DEFAULT_PARTICLE_COUNT <= MAX_PARTICLES);
    assert!(!DEFAULT_PALETTE.is_empty());
    assert!(DEFAULT_SPEED > 0.0);
    assert!(DEFAULT_BASE_SIZE > 0.0);
    assert!(MAX_FRAME_DT_SEC > 0.0);
}
