// Simulation and appearance tuning constants shared by the core and the renderer.

// Spawn shells (world units)
pub const SPAWN_SHELL_INNER: f32 = 3.0;
pub const SPAWN_SHELL_OUTER: f32 = 8.0;
pub const RESPAWN_SHELL_INNER: f32 = 1.0;
pub const RESPAWN_SHELL_OUTER: f32 = 5.0;

// Particles further than this from the origin are recycled
pub const RECYCLE_RADIUS: f32 = 15.0;

// Per-axis velocity is sampled from [-VELOCITY_SPREAD / 2, VELOCITY_SPREAD / 2) units per frame
pub const VELOCITY_SPREAD: f32 = 0.01;

// Sprite size range is [SIZE_FLOOR, SIZE_FLOOR + base_size)
pub const SIZE_FLOOR: f32 = 1.5;

// Rigid-body rotation of the whole field, radians per frame
pub const ROTATION_RATE_X: f32 = 0.0005;
pub const ROTATION_RATE_Y: f32 = 0.001;

// Clamp on wall-clock frame delta so a backgrounded tab does not jump the clock
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Pointer smoothing and decay
pub const POINTER_LERP: f32 = 0.1; // fraction of remaining distance per frame
pub const POINTER_DECAY_MS: f64 = 2000.0;
pub const POINTER_WORLD_SCALE: f32 = 8.0; // normalized pointer -> uniform offset
pub const POINTER_REACH: f32 = 3.0; // no influence beyond this distance
pub const POINTER_PROJECTION: f32 = 0.05; // particle xy -> pointer space

// Drift (frequency, amplitude) per axis
pub const DRIFT_Y: (f32, f32) = (0.3, 0.3);
pub const DRIFT_X: (f32, f32) = (0.2, 0.2);
pub const DRIFT_Z: (f32, f32) = (0.1, 0.1);
pub const DRIFT_Y_SPATIAL: f32 = 0.05;
pub const DRIFT_X_SPATIAL: f32 = 0.05;
pub const DRIFT_Z_SPATIAL: f32 = 0.03;

// Alpha shaping
pub const FADE_START: f32 = 6.0;
pub const FADE_END: f32 = 12.0;
pub const PULSE_BASE: f32 = 0.7;
pub const PULSE_AMPLITUDE: f32 = 0.3;
pub const PULSE_RATE: f32 = 2.0;

// Perspective point sizing: pixels = size * (POINT_SCALE / depth) * (0.8 + 0.2 * alpha)
pub const POINT_SCALE: f32 = 250.0;
pub const SIZE_ALPHA_BASE: f32 = 0.8;
pub const SIZE_ALPHA_BOOST: f32 = 0.2;

// Camera
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Rendering surface
pub const MAX_PIXEL_RATIO: f64 = 2.0;
// wgpu default `max_texture_dimension_2d`; used until a device reports its own
pub const DEFAULT_MAX_SURFACE_DIMENSION: u32 = 8192;

// Configuration limits
pub const MAX_PARTICLES: usize = 20_000;

// Defaults
pub const DEFAULT_PARTICLE_COUNT: usize = 100;
pub const DEFAULT_PALETTE: [&str; 3] = ["#E49B0F", "#FF9FFC", "#B19EEF"];
pub const DEFAULT_POINTER_INFLUENCE: f32 = 0.2;
pub const DEFAULT_SPEED: f32 = 0.5;
pub const DEFAULT_BASE_SIZE: f32 = 2.0;
