// Frame-loop and teardown bookkeeping, kept free of browser types so the
// cancellation rules can be tested with mock schedulers.

pub type FrameId = i32;

/// Host display-refresh scheduler (`requestAnimationFrame` in the browser).
pub trait FrameScheduler {
    fn request_frame(&mut self) -> Option<FrameId>;
    fn cancel_frame(&mut self, id: FrameId);
}

/// Something attached to the host that must be detached on teardown
/// (event listeners, resize observers).
pub trait Subscription {
    fn detach(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

/// Self-rescheduling frame loop: each frame schedules the next one from
/// inside its own callback, until `stop`.
#[derive(Debug)]
pub struct FrameLoop {
    state: LoopState,
    pending: Option<FrameId>,
    frames_run: u64,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self {
            state: LoopState::Idle,
            pending: None,
            frames_run: 0,
        }
    }
}

impl FrameLoop {
    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn pending(&self) -> Option<FrameId> {
        self.pending
    }

    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    /// Schedule the first frame. Only valid from `Idle`.
    pub fn start(&mut self, scheduler: &mut impl FrameScheduler) -> bool {
        if self.state != LoopState::Idle {
            return false;
        }
        self.state = LoopState::Running;
        self.pending = scheduler.request_frame();
        true
    }

    /// Called at the top of a frame callback. Returns `false` if the loop was
    /// stopped, in which case the callback must not touch any state.
    pub fn begin_frame(&mut self) -> bool {
        self.pending = None;
        if self.state != LoopState::Running {
            return false;
        }
        self.frames_run += 1;
        true
    }

    /// Called at the end of a frame callback.
    pub fn schedule_next(&mut self, scheduler: &mut impl FrameScheduler) {
        if self.state == LoopState::Running && self.pending.is_none() {
            self.pending = scheduler.request_frame();
        }
    }

    /// Cancel the pending frame and refuse further scheduling. Idempotent.
    pub fn stop(&mut self, scheduler: &mut impl FrameScheduler) {
        if let Some(id) = self.pending.take() {
            scheduler.cancel_frame(id);
        }
        self.state = LoopState::Stopped;
    }
}

#[derive(Default)]
pub struct Subscriptions {
    items: Vec<Box<dyn Subscription>>,
}

impl Subscriptions {
    pub fn push(&mut self, sub: impl Subscription + 'static) {
        self.items.push(Box::new(sub));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Detach everything; a second call finds nothing left to detach.
    pub fn detach_all(&mut self) {
        for mut sub in self.items.drain(..) {
            sub.detach();
        }
    }
}

/// Everything a mounted field must release, torn down in one step.
#[derive(Default)]
pub struct Lifecycle {
    pub frame_loop: FrameLoop,
    pub subscriptions: Subscriptions,
    torn_down: bool,
}

impl Lifecycle {
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Stop the loop and detach all subscriptions. Returns `true` only for
    /// the call that actually performed the teardown.
    pub fn teardown(&mut self, scheduler: &mut impl FrameScheduler) -> bool {
        if self.torn_down {
            return false;
        }
        self.torn_down = true;
        self.frame_loop.stop(scheduler);
        self.subscriptions.detach_all();
        true
    }
}
