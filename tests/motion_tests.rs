// Host-side tests for the render-time motion model and sprite appearance.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod config {
    include!("../src/core/config.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}
mod pointer {
    include!("../src/core/pointer.rs");
}
mod motion {
    include!("../src/core/motion.rs");
}
mod field {
    include!("../src/core/field.rs");
}

use config::*;
use constants::*;
use field::*;
use glam::{Vec2, Vec3};
use motion::*;
use pointer::*;

const DT: f32 = 1.0 / 60.0;
const FRAME_MS: f64 = 1000.0 / 60.0;

#[test]
fn smoothstep_matches_the_shader_builtin() {
    assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
    assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
    assert!((smoothstep(6.0, 12.0, 9.0) - 0.5).abs() < 1e-6);
    let mut prev = 0.0;
    for i in 0..=100 {
        let v = smoothstep(0.0, 3.0, i as f32 * 0.03);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn drift_stays_within_its_amplitudes() {
    for i in 0..500 {
        let t = i as f32 * 0.37;
        let p = Vec3::new((i as f32).sin() * 7.0, (i as f32).cos() * 5.0, i as f32 * 0.01);
        let d = drift(p, t) - p;
        assert!(d.x.abs() <= DRIFT_X.1 + 1e-4);
        assert!(d.y.abs() <= DRIFT_Y.1 + 1e-4);
        assert!(d.z.abs() <= DRIFT_Z.1 + 1e-4);
    }
}

#[test]
fn drift_at_time_zero_from_origin() {
    let d = drift(Vec3::ZERO, 0.0);
    // cos(0) on x, sin(0) on y and z
    assert!((d - Vec3::new(DRIFT_X.1, 0.0, 0.0)).length() < 1e-6);
}

#[test]
fn pointer_nudge_is_zero_without_influence() {
    let p = Vec3::new(1.0, 2.0, 3.0);
    let none = PointerUniform {
        offset: Vec2::new(3.0, 3.0),
        influence: 0.0,
    };
    assert_eq!(pointer_displacement(p, none), Vec2::ZERO);
}

#[test]
fn pointer_nudge_falls_off_with_distance() {
    let p = Vec3::ZERO;
    let near = pointer_displacement(
        p,
        PointerUniform {
            offset: Vec2::new(0.5, 0.0),
            influence: 0.2,
        },
    );
    assert!(near.x > 0.0, "particles are pulled toward the pointer");
    let far = pointer_displacement(
        p,
        PointerUniform {
            offset: Vec2::new(POINTER_REACH + 0.1, 0.0),
            influence: 0.2,
        },
    );
    assert_eq!(far, Vec2::ZERO);
}

#[test]
fn alpha_fades_with_distance_and_stays_bounded() {
    let t = 1.3;
    let inside = visual_alpha(Vec3::new(2.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0), t);
    let outside = visual_alpha(Vec3::new(0.0, 0.0, 12.5), Vec3::new(0.0, 0.0, 12.5), t);
    assert!(inside > 0.0 && inside <= 1.0);
    assert_eq!(outside, 0.0);
    for i in 0..200 {
        let r = i as f32 * 0.1;
        let p = Vec3::new(r, 0.0, 0.0);
        let a = visual_alpha(p, p, i as f32 * 0.05);
        assert!(a >= 0.0 && a <= 1.0 + 1e-6);
    }
}

#[test]
fn sprite_edge_is_soft_and_circular() {
    assert_eq!(sprite_alpha(0.0), 1.0);
    assert_eq!(sprite_alpha(0.5), 0.0);
    assert_eq!(sprite_alpha(0.7), 0.0);
    assert!(sprite_alpha(0.1) > sprite_alpha(0.3));
}

#[test]
fn point_size_shrinks_with_depth_and_grows_with_alpha() {
    let near = point_size_px(2.0, 2.0, 0.5, 1.0);
    let far = point_size_px(2.0, 8.0, 0.5, 1.0);
    assert!((near / far - 4.0).abs() < 1e-4);
    assert!(point_size_px(2.0, 4.0, 1.0, 1.0) > point_size_px(2.0, 4.0, 0.0, 1.0));
    assert!((point_size_px(2.0, 4.0, 0.5, 2.0) / point_size_px(2.0, 4.0, 0.5, 1.0) - 2.0).abs() < 1e-5);
}

#[test]
fn pointer_contribution_is_gone_after_the_fade() {
    let mut touched = ParticleField::with_seed(ParticleConfig::default(), 5);
    let mut untouched = ParticleField::with_seed(ParticleConfig::default(), 5);
    let mut now = 0.0;
    touched.frame(DT, now);
    untouched.frame(DT, now);
    touched.pointer_moved(Vec2::new(0.6, 0.4), now);

    let mut saw_influence = false;
    let mut last = FrameOutput::default();
    let mut last_untouched = FrameOutput::default();
    while now < 2_100.0 {
        now += FRAME_MS;
        last = touched.frame(DT, now);
        last_untouched = untouched.frame(DT, now);
        if last.pointer.influence > 0.0 {
            saw_influence = true;
        }
    }
    assert!(saw_influence);
    assert_eq!(last.pointer, PointerUniform::default());

    let mut sprites = Vec::new();
    let mut baseline = Vec::new();
    touched.write_sprites(&last, &mut sprites);
    untouched.write_sprites(&last_untouched, &mut baseline);
    assert_eq!(sprites, baseline);
}

#[test]
fn pointer_influence_builds_up_right_after_a_move() {
    let mut field = ParticleField::with_seed(ParticleConfig::default(), 5);
    field.pointer_moved(Vec2::new(1.0, 1.0), 0.0);
    let mut prev = 0.0;
    // smoothing grows faster than the fade shrinks over the first frames
    for i in 1..=10 {
        let out = field.frame(DT, i as f64 * FRAME_MS);
        let magnitude = out.pointer.offset.length();
        assert!(magnitude >= prev);
        prev = magnitude;
    }
}

#[test]
fn sprites_carry_particle_color_and_size() {
    let mut field = ParticleField::with_seed(ParticleConfig::default(), 8);
    let out = field.frame(DT, FRAME_MS);
    let mut sprites = Vec::new();
    field.write_sprites(&out, &mut sprites);
    assert_eq!(sprites.len(), field.len());
    for (s, p) in sprites.iter().zip(field.particles()) {
        assert_eq!(s.color, p.color.to_array());
        assert_eq!(s.size, p.size);
        assert!((0.0..=1.0).contains(&s.alpha));
    }
    assert_eq!(std::mem::size_of::<SpriteInstance>(), 32);
}
