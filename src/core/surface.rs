// Drawing-surface bookkeeping: the last measured viewport and whether GPU
// initialisation may start. Kept free of browser and wgpu types so the
// zero-size mount and late-init rules can be tested on the host.

use super::camera::Viewport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GpuPhase {
    NotStarted,
    Pending,
    Ready,
    Unavailable,
    Released,
}

#[derive(Clone, Copy, Debug)]
pub struct SurfaceTracker {
    phase: GpuPhase,
    viewport: Option<Viewport>,
}

impl Default for SurfaceTracker {
    fn default() -> Self {
        Self {
            phase: GpuPhase::NotStarted,
            viewport: None,
        }
    }
}

impl SurfaceTracker {
    pub fn phase(&self) -> GpuPhase {
        self.phase
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Record a container measurement. Returns the new viewport when the
    /// surface has to follow it; `None` for zero-size, unchanged or released.
    pub fn measured(&mut self, viewport: Option<Viewport>) -> Option<Viewport> {
        if self.phase == GpuPhase::Released {
            return None;
        }
        let viewport = viewport?;
        if self.viewport == Some(viewport) {
            return None;
        }
        self.viewport = Some(viewport);
        Some(viewport)
    }

    /// A measured surface with no GPU init attempted yet.
    pub fn wants_init(&self) -> bool {
        self.phase == GpuPhase::NotStarted && self.viewport.is_some()
    }

    /// Claim the single GPU init. Returns the viewport to create the
    /// surface with, or `None` if init must not start.
    pub fn begin_init(&mut self) -> Option<Viewport> {
        if !self.wants_init() {
            return None;
        }
        self.phase = GpuPhase::Pending;
        self.viewport
    }

    /// Record the outcome of an init. Returns `false` when the result must
    /// be discarded because the surface was released meanwhile.
    pub fn finish_init(&mut self, ok: bool) -> bool {
        if self.phase != GpuPhase::Pending {
            return false;
        }
        self.phase = if ok {
            GpuPhase::Ready
        } else {
            GpuPhase::Unavailable
        };
        true
    }

    pub fn release(&mut self) {
        self.phase = GpuPhase::Released;
    }
}
