use crate::core::Subscription;
use crate::frame::{self, FrameContext};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// ResizeObserver on the container; disconnects on `detach`.
pub struct ResizeWatch {
    observer: web::ResizeObserver,
    closure: Option<Closure<dyn FnMut(js_sys::Array)>>,
}

impl Subscription for ResizeWatch {
    fn detach(&mut self) {
        if let Some(closure) = self.closure.take() {
            self.observer.disconnect();
            drop(closure);
        }
    }
}

impl Drop for ResizeWatch {
    fn drop(&mut self) {
        self.detach();
    }
}

pub fn wire_resize(
    container: &web::HtmlElement,
    ctx: &Rc<RefCell<FrameContext>>,
) -> anyhow::Result<ResizeWatch> {
    let ctx_resize = Rc::downgrade(ctx);
    let closure = Closure::wrap(Box::new(move |_entries: js_sys::Array| {
        let Some(ctx) = ctx_resize.upgrade() else {
            return;
        };
        let needs_gpu = ctx.borrow_mut().on_resize();
        if needs_gpu {
            frame::request_gpu(&ctx);
        }
    }) as Box<dyn FnMut(_)>);
    let observer = web::ResizeObserver::new(closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("ResizeObserver: {:?}", e))?;
    observer.observe(container);
    Ok(ResizeWatch {
        observer,
        closure: Some(closure),
    })
}
