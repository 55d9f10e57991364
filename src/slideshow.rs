//! Auto-advancing image rotator for the homepage hero.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use log::debug;
use thiserror::Error;

use crate::timer::{Scheduler, TimerHandle};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

impl ImageRef {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("slideshow needs at least one image")]
    NoImages,
    #[error("slideshow period must be greater than zero")]
    ZeroPeriod,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("slide {index} does not exist, slideshow has {len} images")]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

pub struct SlideshowTicker {
    images: Vec<ImageRef>,
    active: Rc<Cell<usize>>,
    timer: Option<TimerHandle>,
}

impl SlideshowTicker {
    /// Starts rotating `images`, advancing once per `period`.
    /// `on_advance` receives the new index after every automatic step.
    pub fn start(
        images: Vec<ImageRef>,
        period: Duration,
        scheduler: &dyn Scheduler,
        on_advance: impl Fn(usize) + 'static,
    ) -> Result<Self, ConfigurationError> {
        if images.is_empty() {
            return Err(ConfigurationError::NoImages);
        }
        if period.is_zero() {
            return Err(ConfigurationError::ZeroPeriod);
        }

        let len = images.len();
        let active = Rc::new(Cell::new(0));
        let timer = {
            let active = Rc::downgrade(&active);
            scheduler.every(
                period,
                Box::new(move || {
                    if let Some(active) = active.upgrade() {
                        let next = (active.get() + 1) % len;
                        active.set(next);
                        on_advance(next);
                    }
                }),
            )
        };
        debug!("slideshow started with {} images every {:?}", len, period);

        Ok(Self {
            images,
            active,
            timer: Some(timer),
        })
    }

    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    pub fn active_index(&self) -> usize {
        self.active.get()
    }

    pub fn active_image(&self) -> &ImageRef {
        &self.images[self.active.get()]
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Jumps to `index` without shifting the automatic advance schedule.
    pub fn select_index(&self, index: usize) -> Result<(), IndexOutOfRange> {
        let len = self.images.len();
        if index >= len {
            return Err(IndexOutOfRange { index, len });
        }
        self.active.set(index);
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
            debug!("slideshow stopped");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::timer::manual::ManualScheduler;

    fn four_images() -> Vec<ImageRef> {
        ["A", "B", "C", "D"]
            .into_iter()
            .map(|name| ImageRef::new(format!("/images/{name}.jpg"), name))
            .collect()
    }

    #[test]
    fn empty_image_set_is_rejected() {
        let scheduler = ManualScheduler::new();
        let result = SlideshowTicker::start(Vec::new(), Duration::from_secs(5), &scheduler, |_| {});
        assert_eq!(result.err(), Some(ConfigurationError::NoImages));
        assert_eq!(scheduler.live_timers(), 0);
    }

    #[test]
    fn zero_period_is_rejected() {
        let scheduler = ManualScheduler::new();
        let result = SlideshowTicker::start(four_images(), Duration::ZERO, &scheduler, |_| {});
        assert_eq!(result.err(), Some(ConfigurationError::ZeroPeriod));
    }

    #[test]
    fn advances_once_per_period_and_wraps() {
        let scheduler = ManualScheduler::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let ticker = SlideshowTicker::start(
            four_images(),
            Duration::from_millis(5000),
            &scheduler,
            move |i| sink.borrow_mut().push(i),
        )
        .unwrap();

        assert_eq!(ticker.active_index(), 0);
        scheduler.advance(Duration::from_millis(4999));
        assert_eq!(ticker.active_index(), 0);
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(ticker.active_index(), 1);
        assert_eq!(ticker.active_image().alt, "B");

        scheduler.advance(Duration::from_millis(15000));
        assert_eq!(ticker.active_index(), 0);
        assert_eq!(*seen.borrow(), vec![1, 2, 3, 0]);
    }

    #[test]
    fn selection_keeps_the_tick_phase() {
        let scheduler = ManualScheduler::new();
        let ticker = SlideshowTicker::start(
            four_images(),
            Duration::from_millis(5000),
            &scheduler,
            |_| {},
        )
        .unwrap();

        scheduler.advance(Duration::from_millis(3000));
        ticker.select_index(2).unwrap();
        assert_eq!(ticker.active_index(), 2);

        scheduler.advance(Duration::from_millis(1999));
        assert_eq!(ticker.active_index(), 2);
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(ticker.active_index(), 3);
    }

    #[test]
    fn out_of_range_selection_changes_nothing() {
        let scheduler = ManualScheduler::new();
        let ticker =
            SlideshowTicker::start(four_images(), Duration::from_secs(5), &scheduler, |_| {})
                .unwrap();
        assert_eq!(
            ticker.select_index(4),
            Err(IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(ticker.active_index(), 0);
    }

    #[test]
    fn stop_is_idempotent_and_drop_cancels() {
        let scheduler = ManualScheduler::new();
        let mut ticker =
            SlideshowTicker::start(four_images(), Duration::from_secs(5), &scheduler, |_| {})
                .unwrap();
        ticker.stop();
        ticker.stop();
        assert!(!ticker.is_running());
        scheduler.advance(Duration::from_secs(20));
        assert_eq!(ticker.active_index(), 0);

        let running =
            SlideshowTicker::start(four_images(), Duration::from_secs(5), &scheduler, |_| {})
                .unwrap();
        assert_eq!(scheduler.live_timers(), 1);
        drop(running);
        assert_eq!(scheduler.live_timers(), 0);
    }
}
