// Camera and viewport math shared by the renderer and the resize path.
// No platform types here so it can be exercised on the host.

use super::constants::{
    CAMERA_FOVY_DEG, CAMERA_Z, CAMERA_ZFAR, CAMERA_ZNEAR, MAX_PIXEL_RATIO,
};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn set_viewport(&mut self, viewport: &Viewport) {
        self.aspect = viewport.aspect();
    }
}

/// Measured container size in CSS pixels plus the (capped) device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: f64,
    pub css_height: f64,
    pub pixel_ratio: f64,
}

impl Viewport {
    /// `None` while the container has no measurable area.
    pub fn measure(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Option<Self> {
        if !(css_width.is_finite() && css_height.is_finite()) {
            return None;
        }
        if css_width <= 0.0 || css_height <= 0.0 {
            return None;
        }
        let pixel_ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio.min(MAX_PIXEL_RATIO)
        } else {
            1.0
        };
        Some(Self {
            css_width,
            css_height,
            pixel_ratio,
        })
    }

    /// Backing-store size in physical pixels, never zero.
    pub fn physical_size(&self) -> (u32, u32) {
        let w = (self.css_width * self.pixel_ratio).round().max(1.0) as u32;
        let h = (self.css_height * self.pixel_ratio).round().max(1.0) as u32;
        (w, h)
    }

    /// Uniform downscale keeping the backing store within `max_dimension`
    /// on both axes; 1.0 when it already fits.
    pub fn surface_scale(&self, max_dimension: u32) -> f64 {
        let (w, h) = self.physical_size();
        let longest = w.max(h) as f64;
        let limit = max_dimension.max(1) as f64;
        if longest <= limit {
            1.0
        } else {
            limit / longest
        }
    }

    /// Physical size clamped to the device texture limit, aspect preserved.
    pub fn surface_size(&self, max_dimension: u32) -> (u32, u32) {
        let (w, h) = self.physical_size();
        let scale = self.surface_scale(max_dimension);
        if scale >= 1.0 {
            return (w, h);
        }
        let limit = max_dimension.max(1);
        let fit = |v: u32| ((v as f64 * scale).floor() as u32).clamp(1, limit);
        (fit(w), fit(h))
    }

    /// Device pixels per CSS pixel actually drawn, after any clamp.
    pub fn surface_pixel_ratio(&self, max_dimension: u32) -> f64 {
        self.pixel_ratio * self.surface_scale(max_dimension)
    }

    pub fn aspect(&self) -> f32 {
        (self.css_width / self.css_height) as f32
    }
}
