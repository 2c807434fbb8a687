use crate::core::{normalize_client, Subscription};
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A DOM event listener that removes itself on `detach`.
pub struct PointerListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Option<Closure<dyn FnMut(web::PointerEvent)>>,
}

impl PointerListener {
    pub fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::PointerEvent) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", kind, e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure: Some(closure),
        })
    }
}

impl Subscription for PointerListener {
    fn detach(&mut self) {
        if let Some(closure) = self.closure.take() {
            _ = self
                .target
                .remove_event_listener_with_callback(self.kind, closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for PointerListener {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Pointer moves only update the pointer target and timestamp; the frame loop
/// does everything else.
pub fn wire_pointer(
    container: &web::HtmlElement,
    ctx: &Rc<RefCell<FrameContext>>,
) -> anyhow::Result<[PointerListener; 2]> {
    let target: &web::EventTarget = container.as_ref();

    let move_ctx = ctx.clone();
    let move_container = container.clone();
    let on_move = PointerListener::attach(target, "pointermove", move |ev: web::PointerEvent| {
        let rect = move_container.get_bounding_client_rect();
        let Some(pos) = normalize_client(
            ev.client_x() as f32,
            ev.client_y() as f32,
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        ) else {
            return;
        };
        let mut c = move_ctx.borrow_mut();
        let now_ms = c.now_ms();
        c.field.pointer_moved(pos, now_ms);
    })?;

    let leave_ctx = ctx.clone();
    let on_leave = PointerListener::attach(target, "pointerleave", move |_ev: web::PointerEvent| {
        leave_ctx.borrow_mut().field.pointer_left();
    })?;

    Ok([on_move, on_leave])
}
