// Host-side tests for frame-loop scheduling and teardown.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/core/lifecycle.rs");
}

use lifecycle::*;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Default)]
struct MockScheduler {
    next_id: FrameId,
    pending: Vec<FrameId>,
    cancelled: Vec<FrameId>,
    requests: usize,
}

impl FrameScheduler for MockScheduler {
    fn request_frame(&mut self) -> Option<FrameId> {
        self.next_id += 1;
        self.requests += 1;
        self.pending.push(self.next_id);
        Some(self.next_id)
    }

    fn cancel_frame(&mut self, id: FrameId) {
        self.pending.retain(|&p| p != id);
        self.cancelled.push(id);
    }
}

impl MockScheduler {
    /// Fire every pending callback once, the way the browser would on the
    /// next refresh. Returns how many frame bodies actually ran.
    fn fire(&mut self, frame_loop: &mut FrameLoop) -> usize {
        let due: Vec<FrameId> = self.pending.drain(..).collect();
        let mut ran = 0;
        for _ in due {
            if frame_loop.begin_frame() {
                ran += 1;
                frame_loop.schedule_next(self);
            }
        }
        ran
    }
}

struct CountingSub(Rc<Cell<u32>>);

impl Subscription for CountingSub {
    fn detach(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn loop_reschedules_itself_every_frame() {
    let mut sched = MockScheduler::default();
    let mut frame_loop = FrameLoop::default();
    assert_eq!(frame_loop.state(), LoopState::Idle);
    assert!(frame_loop.start(&mut sched));
    assert_eq!(frame_loop.state(), LoopState::Running);

    for _ in 0..5 {
        assert_eq!(sched.fire(&mut frame_loop), 1);
        assert_eq!(sched.pending.len(), 1);
    }
    assert_eq!(frame_loop.frames_run(), 5);
    assert_eq!(sched.requests, 6);
}

#[test]
fn start_only_works_once() {
    let mut sched = MockScheduler::default();
    let mut frame_loop = FrameLoop::default();
    assert!(frame_loop.start(&mut sched));
    assert!(!frame_loop.start(&mut sched));
    assert_eq!(sched.requests, 1);
}

#[test]
fn stop_cancels_the_pending_frame() {
    let mut sched = MockScheduler::default();
    let mut frame_loop = FrameLoop::default();
    frame_loop.start(&mut sched);
    sched.fire(&mut frame_loop);
    let pending = frame_loop.pending().unwrap();

    frame_loop.stop(&mut sched);
    assert_eq!(frame_loop.state(), LoopState::Stopped);
    assert_eq!(sched.cancelled, vec![pending]);
    assert!(sched.pending.is_empty());
    assert_eq!(sched.fire(&mut frame_loop), 0);
}

#[test]
fn a_stale_callback_after_stop_does_nothing() {
    let mut sched = MockScheduler::default();
    let mut frame_loop = FrameLoop::default();
    frame_loop.start(&mut sched);
    frame_loop.stop(&mut sched);

    // the browser may still deliver a callback it had already queued
    assert!(!frame_loop.begin_frame());
    frame_loop.schedule_next(&mut sched);
    assert_eq!(frame_loop.frames_run(), 0);
    assert_eq!(sched.requests, 1);
}

#[test]
fn unmount_before_the_first_frame_runs_nothing() {
    let mut sched = MockScheduler::default();
    let mut lc = Lifecycle::default();
    lc.frame_loop.start(&mut sched);
    assert!(lc.teardown(&mut sched));
    assert_eq!(sched.fire(&mut lc.frame_loop), 0);
    assert_eq!(lc.frame_loop.frames_run(), 0);
}

#[test]
fn teardown_is_idempotent() {
    let detached = Rc::new(Cell::new(0));
    let mut sched = MockScheduler::default();
    let mut lc = Lifecycle::default();
    lc.subscriptions.push(CountingSub(detached.clone()));
    lc.subscriptions.push(CountingSub(detached.clone()));
    lc.subscriptions.push(CountingSub(detached.clone()));
    assert_eq!(lc.subscriptions.len(), 3);
    lc.frame_loop.start(&mut sched);

    assert!(!lc.is_torn_down());
    assert!(lc.teardown(&mut sched));
    assert!(lc.is_torn_down());
    assert_eq!(detached.get(), 3);
    assert!(lc.subscriptions.is_empty());
    assert_eq!(sched.cancelled.len(), 1);

    assert!(!lc.teardown(&mut sched));
    assert_eq!(detached.get(), 3);
    assert_eq!(sched.cancelled.len(), 1);
}

#[test]
fn detach_all_twice_detaches_once() {
    let detached = Rc::new(Cell::new(0));
    let mut subs = Subscriptions::default();
    subs.push(CountingSub(detached.clone()));
    subs.detach_all();
    subs.detach_all();
    assert_eq!(detached.get(), 1);
}

#[test]
fn teardown_without_a_started_loop() {
    let mut sched = MockScheduler::default();
    let mut lc = Lifecycle::default();
    assert!(lc.teardown(&mut sched));
    assert!(sched.cancelled.is_empty());
    assert_eq!(lc.frame_loop.state(), LoopState::Stopped);
    // a late start after teardown must not schedule anything
    assert!(!lc.frame_loop.start(&mut sched));
    assert_eq!(sched.requests, 0);
}
