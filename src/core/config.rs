// Particle field configuration: defaults, validation, and parsing from
// string attributes (the DOM `data-*` attributes in the browser).

use super::constants::{
    DEFAULT_BASE_SIZE, DEFAULT_PALETTE, DEFAULT_PARTICLE_COUNT, DEFAULT_POINTER_INFLUENCE,
    DEFAULT_SPEED, MAX_PARTICLES,
};

pub const ATTR_PARTICLE_COUNT: &str = "data-particle-count";
pub const ATTR_COLORS: &str = "data-colors";
pub const ATTR_POINTER_INFLUENCE: &str = "data-mouse-influence";
pub const ATTR_SPEED: &str = "data-speed";
pub const ATTR_SIZE: &str = "data-size";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid color {0:?}: expected #RRGGBB or #RGB")]
    InvalidColor(String),
    #[error("invalid value {value:?} for {key}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key} = {value} is out of range")]
    OutOfRange { key: &'static str, value: f64 },
    #[error("color palette is empty")]
    EmptyPalette,
}

/// sRGB-encoded 0..1 RGB color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `#RGB` (leading `#` optional, surrounding whitespace ignored).
    pub fn from_hex(text: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor(text.to_string());
        let hex = text.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        let (r, g, b) = match hex.len() {
            6 => (channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?),
            3 => {
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                (r * 17, g * 17, b * 17)
            }
            _ => return Err(invalid()),
        };
        Ok(Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
        ))
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// Immutable settings for one mounted particle field.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub particle_count: usize,
    pub palette: Vec<Rgb>,
    pub pointer_influence: f32,
    pub speed: f32,
    pub base_size: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            palette: default_palette(),
            pointer_influence: DEFAULT_POINTER_INFLUENCE,
            speed: DEFAULT_SPEED,
            base_size: DEFAULT_BASE_SIZE,
        }
    }
}

pub fn default_palette() -> Vec<Rgb> {
    DEFAULT_PALETTE
        .iter()
        .filter_map(|hex| Rgb::from_hex(hex).ok())
        .collect()
}

pub fn parse_palette(text: &str) -> Result<Vec<Rgb>, ConfigError> {
    let palette = text
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Rgb::from_hex)
        .collect::<Result<Vec<_>, _>>()?;
    if palette.is_empty() {
        return Err(ConfigError::EmptyPalette);
    }
    Ok(palette)
}

fn parse_f32(key: &'static str, text: &str) -> Result<f32, ConfigError> {
    text.trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConfigError::InvalidNumber {
            key,
            value: text.to_string(),
        })
}

fn parse_count(text: &str) -> Result<usize, ConfigError> {
    text.trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::InvalidNumber {
            key: ATTR_PARTICLE_COUNT,
            value: text.to_string(),
        })
}

impl ParticleConfig {
    /// Check the ranges every consumer relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count > MAX_PARTICLES {
            return Err(ConfigError::OutOfRange {
                key: ATTR_PARTICLE_COUNT,
                value: self.particle_count as f64,
            });
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        let non_negative = [
            (ATTR_POINTER_INFLUENCE, self.pointer_influence),
            (ATTR_SPEED, self.speed),
            (ATTR_SIZE, self.base_size),
        ];
        for (key, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange {
                    key,
                    value: value as f64,
                });
            }
        }
        Ok(())
    }

    /// Build a config from string attributes. Missing attributes keep their
    /// defaults; invalid ones are logged and replaced by the default.
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(text) = lookup(ATTR_PARTICLE_COUNT) {
            match parse_count(&text) {
                Ok(n) if n <= MAX_PARTICLES => config.particle_count = n,
                Ok(n) => {
                    log::warn!(
                        "[config] {} = {} exceeds {}, clamping",
                        ATTR_PARTICLE_COUNT,
                        n,
                        MAX_PARTICLES
                    );
                    config.particle_count = MAX_PARTICLES;
                }
                Err(e) => log::warn!("[config] {}", e),
            }
        }
        if let Some(text) = lookup(ATTR_COLORS) {
            match parse_palette(&text) {
                Ok(p) => config.palette = p,
                Err(e) => log::warn!("[config] {}", e),
            }
        }

        let floats: [(&'static str, &mut f32); 3] = [
            (ATTR_POINTER_INFLUENCE, &mut config.pointer_influence),
            (ATTR_SPEED, &mut config.speed),
            (ATTR_SIZE, &mut config.base_size),
        ];
        for (key, slot) in floats {
            let Some(text) = lookup(key) else { continue };
            match parse_f32(key, &text) {
                Ok(v) if v >= 0.0 => *slot = v,
                Ok(v) => log::warn!(
                    "[config] {}",
                    ConfigError::OutOfRange {
                        key,
                        value: v as f64
                    }
                ),
                Err(e) => log::warn!("[config] {}", e),
            }
        }

        config
    }
}
