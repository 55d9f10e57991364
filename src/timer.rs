//! Timer seam shared by the controllers.
//!
//! Every timer is handed out as a [`TimerHandle`]; dropping the handle cancels
//! the timer, so a controller that owns its handles cannot be called back
//! after it has been torn down.

use std::time::Duration;

use gloo_timers::callback::{Interval, Timeout};

/// Cancels its timer when dropped.
#[must_use = "dropping a TimerHandle cancels the timer"]
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

pub trait Scheduler {
    /// Runs `task` once after `delay`.
    fn once(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerHandle;

    /// Runs `task` every `period`, first run one period from now.
    fn every(&self, period: Duration, task: Box<dyn FnMut()>) -> TimerHandle;
}

/// Browser timers backed by `setTimeout` / `setInterval`.
#[derive(Clone, Copy, Default)]
pub struct BrowserScheduler;

fn millis(duration: Duration) -> u32 {
    duration.as_millis().min(u32::MAX as u128) as u32
}

impl Scheduler for BrowserScheduler {
    fn once(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerHandle {
        let timeout = Timeout::new(millis(delay), task);
        TimerHandle::new(move || drop(timeout))
    }

    fn every(&self, period: Duration, task: Box<dyn FnMut()>) -> TimerHandle {
        let interval = Interval::new(millis(period), task);
        TimerHandle::new(move || drop(interval))
    }
}

#[cfg(test)]
pub mod manual {
    //! Virtual clock for driving controllers in tests.

    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    use super::{Scheduler, TimerHandle};

    enum Task {
        Once(Box<dyn FnOnce()>),
        Every(Box<dyn FnMut()>, u64),
    }

    struct Pending {
        id: u64,
        due: u64,
        cancelled: Rc<Cell<bool>>,
        task: Task,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        next_id: u64,
        pending: Vec<Pending>,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now_ms(&self) -> u64 {
            self.clock.borrow().now
        }

        /// Number of timers that are still scheduled.
        pub fn live_timers(&self) -> usize {
            self.clock
                .borrow()
                .pending
                .iter()
                .filter(|p| !p.cancelled.get())
                .count()
        }

        pub fn advance(&self, by: Duration) {
            let target = self.now_ms() + by.as_millis() as u64;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    clock.pending.retain(|p| !p.cancelled.get());
                    let index = clock
                        .pending
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.due <= target)
                        .min_by_key(|(_, p)| (p.due, p.id))
                        .map(|(i, _)| i);
                    match index {
                        Some(i) => {
                            let pending = clock.pending.remove(i);
                            clock.now = pending.due;
                            pending
                        }
                        None => {
                            clock.now = target;
                            break;
                        }
                    }
                };

                match next.task {
                    Task::Once(task) => task(),
                    Task::Every(mut task, period) => {
                        task();
                        if !next.cancelled.get() {
                            self.clock.borrow_mut().pending.push(Pending {
                                id: next.id,
                                due: next.due + period,
                                cancelled: next.cancelled,
                                task: Task::Every(task, period),
                            });
                        }
                    }
                }
            }
        }

        fn push(&self, delay: Duration, task: Task) -> TimerHandle {
            let cancelled = Rc::new(Cell::new(false));
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + delay.as_millis() as u64;
            clock.pending.push(Pending {
                id,
                due,
                cancelled: cancelled.clone(),
                task,
            });
            TimerHandle::new(move || cancelled.set(true))
        }
    }

    impl Scheduler for ManualScheduler {
        fn once(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerHandle {
            self.push(delay, Task::Once(task))
        }

        fn every(&self, period: Duration, task: Box<dyn FnMut()>) -> TimerHandle {
            let period_ms = (period.as_millis() as u64).max(1);
            self.push(period, Task::Every(task, period_ms))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::manual::ManualScheduler;
    use super::Scheduler;

    #[test]
    fn once_fires_at_its_deadline_only() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let _handle = scheduler.once(
            Duration::from_millis(300),
            Box::new(move || counter.set(counter.get() + 1)),
        );

        scheduler.advance(Duration::from_millis(299));
        assert_eq!(fired.get(), 0);
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(fired.get(), 1);
        scheduler.advance(Duration::from_secs(10));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn every_repeats_on_period_boundaries() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let _handle = scheduler.every(
            Duration::from_millis(100),
            Box::new(move || counter.set(counter.get() + 1)),
        );

        scheduler.advance(Duration::from_millis(350));
        assert_eq!(fired.get(), 3);
        assert_eq!(scheduler.now_ms(), 350);
    }

    #[test]
    fn dropping_handle_cancels() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let handle = scheduler.once(Duration::from_millis(10), Box::new(move || flag.set(true)));
        assert_eq!(scheduler.live_timers(), 1);

        drop(handle);
        assert_eq!(scheduler.live_timers(), 0);
        scheduler.advance(Duration::from_millis(50));
        assert!(!fired.get());
    }
}
