// The simulated particle field: fixed-size particle set, clock, rigid-body
// rotation and pointer state, advanced once per display frame.

use super::config::ParticleConfig;
use super::constants::{MAX_FRAME_DT_SEC, RECYCLE_RADIUS, ROTATION_RATE_X, ROTATION_RATE_Y};
use super::motion::{sprite_for, SpriteInstance};
use super::particles::{spawn, Particle, Shell};
use super::pointer::{PointerState, PointerUniform};
use glam::{Mat4, Vec2};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Monotonic simulation time in seconds, scaled by the speed multiplier.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulationClock {
    elapsed: f64,
}

impl SimulationClock {
    pub fn advance(&mut self, dt_sec: f32, speed: f32) {
        let dt = dt_sec.clamp(0.0, MAX_FRAME_DT_SEC);
        self.elapsed += (dt * speed.max(0.0)) as f64;
    }

    pub fn seconds(&self) -> f32 {
        self.elapsed as f32
    }
}

/// Per-frame outputs consumed by the renderer.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameOutput {
    pub time: f32,
    pub pointer: PointerUniform,
    pub recycled: usize,
}

pub struct ParticleField {
    config: ParticleConfig,
    particles: Vec<Particle>,
    clock: SimulationClock,
    rotation: Vec2,
    pointer: PointerState,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: ParticleConfig, rng: StdRng) -> Self {
        let mut rng = rng;
        let particles = (0..config.particle_count)
            .map(|_| spawn(&mut rng, &config, Shell::INITIAL))
            .collect();
        Self {
            config,
            particles,
            clock: SimulationClock::default(),
            rotation: Vec2::ZERO,
            pointer: PointerState::default(),
            rng,
        }
    }

    pub fn with_seed(config: ParticleConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn time(&self) -> f32 {
        self.clock.seconds()
    }

    /// Euler angles (x, y) of the field's rigid-body rotation.
    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.rotation.x) * Mat4::from_rotation_y(self.rotation.y)
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn pointer_moved(&mut self, target: Vec2, now_ms: f64) {
        self.pointer.on_move(target, now_ms);
    }

    pub fn pointer_left(&mut self) {
        self.pointer.on_leave();
    }

    /// Advance one display frame. `dt_sec` is the wall-clock time since the
    /// previous frame, `now_ms` the timestamp used for the pointer fade.
    pub fn frame(&mut self, dt_sec: f32, now_ms: f64) -> FrameOutput {
        self.clock.advance(dt_sec, self.config.speed);
        self.pointer.smooth();
        let pointer = self.pointer.uniform(now_ms, self.config.pointer_influence);
        let recycled = self.step_particles();
        self.rotation += Vec2::new(ROTATION_RATE_X, ROTATION_RATE_Y);
        FrameOutput {
            time: self.clock.seconds(),
            pointer,
            recycled,
        }
    }

    fn step_particles(&mut self) -> usize {
        let mut recycled = 0;
        for p in &mut self.particles {
            p.position += p.velocity;
            if p.position.length() > RECYCLE_RADIUS {
                *p = spawn(&mut self.rng, &self.config, Shell::RESPAWN);
                recycled += 1;
            }
        }
        recycled
    }

    /// Fill `out` with one sprite per particle for the given frame output.
    pub fn write_sprites(&self, frame: &FrameOutput, out: &mut Vec<SpriteInstance>) {
        out.clear();
        out.extend(
            self.particles
                .iter()
                .map(|p| sprite_for(p, frame.time, frame.pointer)),
        );
    }
}
