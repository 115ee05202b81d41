//! One-shot deferred callbacks.
//!
//! The browser scheduler hands tasks to `setTimeout` through gloo-timers and
//! forgets the handle: once scheduled, a task always fires. `ManualScheduler`
//! queues tasks so tests decide when time passes.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::cell::RefCell;
use std::rc::Rc;

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    /// Run `task` once after `delay_ms`.
    fn defer(&self, delay_ms: u32, task: Task);
}

/// `setTimeout`-backed scheduler.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn defer(&self, delay_ms: u32, task: Task) {
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::callback::Timeout::new(delay_ms, task).forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            // No event loop off-browser: run immediately.
            let _ = delay_ms;
            task();
        }
    }
}

/// Test scheduler holding tasks until `advance` is called.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    pending: Rc<RefCell<Vec<(u32, Task)>>>,
}

impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Delays of queued tasks, in scheduling order.
    pub fn delays(&self) -> Vec<u32> {
        self.pending.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    /// Run every queued task whose delay is at most `elapsed_ms`.
    pub fn advance(&self, elapsed_ms: u32) -> usize {
        let due = {
            let mut pending = self.pending.borrow_mut();
            let (due, keep): (Vec<_>, Vec<_>) = pending.drain(..).partition(|(delay, _)| *delay <= elapsed_ms);
            *pending = keep;
            due
        };
        let ran = due.len();
        for (_, task) in due {
            task();
        }
        ran
    }
}

impl Scheduler for ManualScheduler {
    fn defer(&self, delay_ms: u32, task: Task) {
        self.pending.borrow_mut().push((delay_ms, task));
    }
}
