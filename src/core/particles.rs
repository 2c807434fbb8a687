// Particle records and the spawn function. Spawning is the only place that
// draws random numbers; everything downstream is deterministic given time and
// pointer input.

use super::config::{ParticleConfig, Rgb};
use super::constants::{
    RESPAWN_SHELL_INNER, RESPAWN_SHELL_OUTER, SIZE_FLOOR, SPAWN_SHELL_INNER, SPAWN_SHELL_OUTER,
    VELOCITY_SPREAD,
};
use glam::Vec3;
use rand::seq::SliceRandom;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    /// Units per frame; fixed until the particle is respawned.
    pub velocity: Vec3,
    pub color: Rgb,
    pub size: f32,
}

/// Spherical shell `inner <= r <= outer` that positions are sampled from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shell {
    pub inner: f32,
    pub outer: f32,
}

impl Shell {
    /// Shell used when the field is first populated.
    pub const INITIAL: Shell = Shell {
        inner: SPAWN_SHELL_INNER,
        outer: SPAWN_SHELL_OUTER,
    };
    /// Shell used when a particle drifts out of bounds.
    pub const RESPAWN: Shell = Shell {
        inner: RESPAWN_SHELL_INNER,
        outer: RESPAWN_SHELL_OUTER,
    };

    pub fn contains_radius(&self, r: f32) -> bool {
        // small slack for f32 rounding in the spherical -> cartesian conversion
        r >= self.inner - 1e-4 && r <= self.outer + 1e-4
    }
}

/// Uniformly distributed direction scaled to a radius drawn from `shell`.
pub fn sample_shell<R: Rng + ?Sized>(rng: &mut R, shell: Shell) -> Vec3 {
    let radius = shell.inner + rng.gen::<f32>() * (shell.outer - shell.inner);
    let theta = rng.gen::<f32>() * TAU;
    // acos of a uniform [-1, 1] value keeps the directions uniform over the sphere
    let phi = (rng.gen::<f32>() * 2.0 - 1.0).clamp(-1.0, 1.0).acos();
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

pub fn sample_velocity<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let mut axis = || (rng.gen::<f32>() - 0.5) * VELOCITY_SPREAD;
    Vec3::new(axis(), axis(), axis())
}

/// Create a particle inside `shell` with a fresh velocity, palette color and size.
pub fn spawn<R: Rng + ?Sized>(rng: &mut R, config: &ParticleConfig, shell: Shell) -> Particle {
    let position = sample_shell(rng, shell);
    let velocity = sample_velocity(rng);
    let color = config
        .palette
        .choose(rng)
        .copied()
        .unwrap_or(Rgb::new(1.0, 1.0, 1.0));
    let size = SIZE_FLOOR + rng.gen::<f32>() * config.base_size;
    Particle {
        position,
        velocity,
        color,
        size,
    }
}
