#![cfg(target_arch = "wasm32")]
use crate::core::{Lifecycle, ParticleField};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod core;
mod dom;
mod events;
mod frame;
mod render;

/// One-time runtime setup (panic hook, console logger). Safe to call from
/// any number of entry points; only the first call does anything.
#[wasm_bindgen]
pub fn init_runtime() {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return;
    }
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("water-particles runtime ready");
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    init_runtime();
    Ok(())
}

/// Handle to a mounted particle field. Dropping it (or calling `unmount`)
/// releases everything it attached to the page.
#[wasm_bindgen]
pub struct WaterParticles {
    ctx: Rc<RefCell<frame::FrameContext>>,
    lifecycle: Rc<RefCell<Lifecycle>>,
    tick: frame::Tick,
}

#[wasm_bindgen]
impl WaterParticles {
    #[wasm_bindgen(js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.ctx.borrow().field.len()
    }

    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        !self.lifecycle.borrow().is_torn_down()
    }

    /// Stop the frame loop, detach listeners and observers, release GPU
    /// resources and remove the canvas. Idempotent.
    pub fn unmount(&mut self) {
        let mut scheduler = frame::RafScheduler::new(self.tick.clone());
        if !self.lifecycle.borrow_mut().teardown(&mut scheduler) {
            return;
        }
        // drops the rAF closure and with it the closure's Rc cycle
        self.tick.borrow_mut().take();
        self.ctx.borrow_mut().release();
        log::info!("[unmount] particle field released");
    }
}

impl Drop for WaterParticles {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Mount a particle field inside `container`, configured from its `data-*`
/// attributes.
#[wasm_bindgen]
pub fn mount(container: web::HtmlElement) -> Result<WaterParticles, JsValue> {
    init_runtime();
    mount_inner(container).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

#[wasm_bindgen(js_name = mountById)]
pub fn mount_by_id(id: &str) -> Result<WaterParticles, JsValue> {
    init_runtime();
    let container = dom::window_document()
        .and_then(|d| d.get_element_by_id(id))
        .ok_or_else(|| JsValue::from_str(&format!("missing #{}", id)))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| JsValue::from_str(&format!("{:?}", e)))?;
    mount(container)
}

fn mount_inner(container: web::HtmlElement) -> anyhow::Result<WaterParticles> {
    let config = dom::read_config(&container);
    config.validate()?;
    let field = ParticleField::new(config, StdRng::from_entropy());
    log::info!(
        "[mount] particles={} palette={} influence={:.2} speed={:.2} size={:.2}",
        field.len(),
        field.config().palette.len(),
        field.config().pointer_influence,
        field.config().speed,
        field.config().base_size
    );

    let canvas = dom::create_canvas(&container)?;
    let ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        field,
        container.clone(),
        canvas.clone(),
    )));
    let lifecycle = Rc::new(RefCell::new(Lifecycle::default()));

    let wired = wire_subscriptions(&container, &ctx, &lifecycle);
    if let Err(e) = wired {
        let mut c = ctx.borrow_mut();
        c.release();
        drop(c);
        lifecycle.borrow_mut().subscriptions.detach_all();
        return Err(e);
    }

    if ctx.borrow_mut().on_resize() {
        frame::request_gpu(&ctx);
    } else {
        log::info!("[mount] container has no size yet; rendering deferred");
    }

    let tick = frame::start_loop(ctx.clone(), lifecycle.clone());
    Ok(WaterParticles {
        ctx,
        lifecycle,
        tick,
    })
}

fn wire_subscriptions(
    container: &web::HtmlElement,
    ctx: &Rc<RefCell<frame::FrameContext>>,
    lifecycle: &Rc<RefCell<Lifecycle>>,
) -> anyhow::Result<()> {
    let [on_move, on_leave] = events::wire_pointer(container, ctx)?;
    let mut lc = lifecycle.borrow_mut();
    lc.subscriptions.push(on_move);
    lc.subscriptions.push(on_leave);
    lc.subscriptions.push(events::wire_resize(container, ctx)?);
    Ok(())
}
