use crate::core::constants::DEFAULT_MAX_SURFACE_DIMENSION;
use crate::core::{FrameId, FrameScheduler, Lifecycle, ParticleField, SpriteInstance, SurfaceTracker};
use crate::dom;
use crate::render::GpuState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct FrameContext {
    pub field: ParticleField,
    pub gpu: Option<GpuState>,
    pub surface: SurfaceTracker,
    pub container: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    origin: Instant,
    last_instant: Instant,
    sprites: Vec<SpriteInstance>,
}

impl FrameContext {
    pub fn new(
        field: ParticleField,
        container: web::HtmlElement,
        canvas: web::HtmlCanvasElement,
    ) -> Self {
        let now = Instant::now();
        let capacity = field.len();
        Self {
            field,
            gpu: None,
            surface: SurfaceTracker::default(),
            container,
            canvas,
            origin: now,
            last_instant: now,
            sprites: Vec::with_capacity(capacity),
        }
    }

    /// Milliseconds since mount; the time base for pointer fade.
    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let out = self.field.frame(dt_sec, self.now_ms());

        if let Some(gpu) = &mut self.gpu {
            self.field.write_sprites(&out, &mut self.sprites);
            if let Err(e) = gpu.render(&self.sprites, self.field.model_matrix()) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    /// Re-measure the container. Returns `true` when a GPU surface should be
    /// created now that the container has a size.
    pub fn on_resize(&mut self) -> bool {
        if let Some(viewport) = self.surface.measured(dom::measure(&self.container)) {
            log::debug!(
                "[resize] {}x{} css @{}x",
                viewport.css_width,
                viewport.css_height,
                viewport.pixel_ratio
            );
            let max_dimension = self
                .gpu
                .as_ref()
                .map_or(DEFAULT_MAX_SURFACE_DIMENSION, GpuState::max_dimension);
            dom::sync_canvas_backing_size(&self.canvas, viewport.surface_size(max_dimension));
            if let Some(gpu) = &mut self.gpu {
                gpu.resize(viewport);
            }
        }
        self.surface.wants_init()
    }

    /// Drop GPU resources and the canvas. Any GPU init still in flight
    /// discards its result.
    pub fn release(&mut self) {
        self.surface.release();
        if let Some(gpu) = self.gpu.take() {
            gpu.dispose();
        }
        dom::remove_canvas(&self.canvas);
    }
}

/// Start GPU initialisation for a measured container. A context that cannot
/// get a WebGPU device stays in a no-op state.
pub fn request_gpu(ctx: &Rc<RefCell<FrameContext>>) {
    let (canvas, viewport, capacity) = {
        let mut c = ctx.borrow_mut();
        let Some(viewport) = c.surface.begin_init() else {
            return;
        };
        (c.canvas.clone(), viewport, c.field.len())
    };
    let weak = Rc::downgrade(ctx);
    spawn_local(async move {
        let result = GpuState::new(&canvas, viewport, capacity).await;
        let Some(ctx) = weak.upgrade() else {
            if let Ok(gpu) = result {
                gpu.dispose();
            }
            return;
        };
        let mut c = ctx.borrow_mut();
        if !c.surface.finish_init(result.is_ok()) {
            if let Ok(gpu) = result {
                gpu.dispose();
            }
            return;
        }
        match result {
            Ok(mut gpu) => {
                // the container may have been resized while the device was pending
                if let Some(latest) = c.surface.viewport() {
                    if latest != gpu.viewport() {
                        gpu.resize(latest);
                    }
                }
                let size = gpu.viewport().surface_size(gpu.max_dimension());
                dom::sync_canvas_backing_size(&c.canvas, size);
                c.gpu = Some(gpu);
            }
            Err(e) => {
                log::warn!("WebGPU unavailable, particles disabled: {:?}", e);
            }
        }
    });
}

/// `requestAnimationFrame` bound to the loop's tick closure.
pub struct RafScheduler {
    tick: Tick,
}

impl RafScheduler {
    pub fn new(tick: Tick) -> Self {
        Self { tick }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameId> {
        let window = web::window()?;
        let tick = self.tick.borrow();
        let callback = tick.as_ref()?;
        window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&mut self, id: FrameId) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(id);
        }
    }
}

pub fn start_loop(ctx: Rc<RefCell<FrameContext>>, lifecycle: Rc<RefCell<Lifecycle>>) -> Tick {
    let tick: Tick = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let lifecycle_tick = lifecycle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !lifecycle_tick.borrow_mut().frame_loop.begin_frame() {
            return;
        }
        ctx.borrow_mut().frame();
        let mut scheduler = RafScheduler::new(tick_clone.clone());
        lifecycle_tick
            .borrow_mut()
            .frame_loop
            .schedule_next(&mut scheduler);
    }) as Box<dyn FnMut()>));
    let mut scheduler = RafScheduler::new(tick.clone());
    lifecycle.borrow_mut().frame_loop.start(&mut scheduler);
    tick
}
