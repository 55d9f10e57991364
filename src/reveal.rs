//! Scroll-triggered reveal tracking.
//!
//! A region starts hidden and flips to revealed the first time it overlaps the
//! margin-adjusted viewport. The decision is made by [`RevealController`];
//! where the overlap information comes from is abstracted behind
//! [`VisibilitySource`] so the same logic runs against `IntersectionObserver`
//! in the browser and against a hand-driven source in tests.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, warn};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Per-edge offsets in CSS pixels. Negative values shrink the test area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootMargin {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl RootMargin {
    pub const fn uniform(px: i32) -> Self {
        Self {
            top: px,
            right: px,
            bottom: px,
            left: px,
        }
    }

    pub fn apply(&self, viewport: Rect) -> Rect {
        Rect {
            x: viewport.x - self.left as f64,
            y: viewport.y - self.top as f64,
            width: viewport.width + (self.left + self.right) as f64,
            height: viewport.height + (self.top + self.bottom) as f64,
        }
    }

    /// `rootMargin` string understood by `IntersectionObserver`.
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::uniform(-100)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub trigger_once: bool,
    pub root_margin: RootMargin,
    /// Fraction of the region that must be visible. `0.0` means any overlap.
    pub threshold: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            trigger_once: true,
            root_margin: RootMargin::default(),
            threshold: 0.0,
        }
    }
}

/// Whether `region` overlaps the viewport once `options.root_margin` is applied.
///
/// Reference geometry for the `rootMargin` and `threshold` that
/// [`crate::hooks::IntersectionSource`] hands to `IntersectionObserver`. The
/// browser computes the same overlap natively, so only hosts without an
/// observer and the tests drive this directly.
pub fn intersects(region: Rect, viewport: Rect, options: &RevealOptions) -> bool {
    let area = options.root_margin.apply(viewport);
    let overlap_w = region.right().min(area.right()) - region.x.max(area.x);
    let overlap_h = region.bottom().min(area.bottom()) - region.y.max(area.y);

    let region_area = region.width * region.height;
    if region_area <= 0.0 {
        return overlap_w >= 0.0 && overlap_h >= 0.0;
    }
    if overlap_w <= 0.0 || overlap_h <= 0.0 {
        return false;
    }
    (overlap_w * overlap_h) / region_area >= options.threshold
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealUpdate {
    Unchanged,
    Revealed,
    Hidden,
}

#[derive(Debug)]
pub struct RevealController {
    options: RevealOptions,
    revealed: bool,
    tracking: bool,
}

impl RevealController {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            revealed: false,
            tracking: true,
        }
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    pub fn on_visibility(&mut self, visible: bool) -> RevealUpdate {
        if !self.tracking {
            return RevealUpdate::Unchanged;
        }
        match (visible, self.revealed) {
            (true, false) => {
                self.revealed = true;
                if self.options.trigger_once {
                    self.tracking = false;
                }
                RevealUpdate::Revealed
            }
            (false, true) => {
                self.revealed = false;
                RevealUpdate::Hidden
            }
            _ => RevealUpdate::Unchanged,
        }
    }

    /// Feeds raw layout instead of observer entries, using [`intersects`].
    pub fn on_geometry(&mut self, region: Rect, viewport: Rect) -> RevealUpdate {
        let visible = intersects(region, viewport, &self.options);
        self.on_visibility(visible)
    }

    /// The host cannot report visibility: show the content for good.
    pub fn on_unavailable(&mut self) -> RevealUpdate {
        self.tracking = false;
        if self.revealed {
            RevealUpdate::Unchanged
        } else {
            self.revealed = true;
            RevealUpdate::Revealed
        }
    }
}

#[derive(Debug, Error)]
#[error("visibility observation unavailable: {0}")]
pub struct ObservationUnavailable(pub String);

/// Live registration with a [`VisibilitySource`]. Stops on drop.
pub struct Subscription {
    stop: Box<dyn Fn()>,
}

impl Subscription {
    /// `stop` may be called more than once and must tolerate that.
    pub fn new(stop: impl Fn() + 'static) -> Self {
        Self {
            stop: Box::new(stop),
        }
    }

    pub fn stop(&self) {
        (self.stop)();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        (self.stop)();
    }
}

pub trait VisibilitySource {
    type Region;

    fn subscribe(
        &self,
        region: &Self::Region,
        options: &RevealOptions,
        on_change: Box<dyn FnMut(bool)>,
    ) -> Result<Subscription, ObservationUnavailable>;
}

/// A region registered for reveal tracking.
pub struct RegionWatch {
    controller: Rc<RefCell<RevealController>>,
    subscription: Rc<RefCell<Option<Subscription>>>,
}

impl RegionWatch {
    /// Registers `region` and calls `on_change` whenever the reveal signal flips.
    pub fn observe<V: VisibilitySource>(
        source: &V,
        region: &V::Region,
        options: RevealOptions,
        on_change: impl Fn(bool) + 'static,
    ) -> Self {
        let controller = Rc::new(RefCell::new(RevealController::new(options.clone())));
        let subscription: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let on_change: Rc<dyn Fn(bool)> = Rc::new(on_change);

        let callback = {
            let controller = Rc::downgrade(&controller);
            let subscription = Rc::downgrade(&subscription);
            let on_change = on_change.clone();
            Box::new(move |visible: bool| {
                handle_visibility(&controller, &subscription, on_change.as_ref(), visible)
            })
        };

        match source.subscribe(region, &options, callback) {
            Ok(sub) => {
                if !controller.borrow().is_tracking() {
                    sub.stop();
                }
                *subscription.borrow_mut() = Some(sub);
            }
            Err(err) => {
                warn!("{}, revealing region immediately", err);
                let update = controller.borrow_mut().on_unavailable();
                if update == RevealUpdate::Revealed {
                    on_change(true);
                }
            }
        }

        Self {
            controller,
            subscription,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.controller.borrow().is_revealed()
    }

    pub fn is_tracking(&self) -> bool {
        self.controller.borrow().is_tracking()
    }
}

fn handle_visibility(
    controller: &Weak<RefCell<RevealController>>,
    subscription: &Weak<RefCell<Option<Subscription>>>,
    on_change: &dyn Fn(bool),
    visible: bool,
) {
    let Some(controller) = controller.upgrade() else {
        return;
    };
    let (update, tracking) = {
        let mut controller = controller.borrow_mut();
        (controller.on_visibility(visible), controller.is_tracking())
    };

    if !tracking {
        if let Some(slot) = subscription.upgrade() {
            if let Ok(slot) = slot.try_borrow() {
                if let Some(sub) = slot.as_ref() {
                    sub.stop();
                }
            }
        }
    }

    match update {
        RevealUpdate::Revealed => {
            debug!("region revealed");
            on_change(true);
        }
        RevealUpdate::Hidden => on_change(false),
        RevealUpdate::Unchanged => {}
    }
}

#[cfg(test)]
pub mod manual {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::{ObservationUnavailable, RevealOptions, Subscription, VisibilitySource};

    struct Listener {
        active: Rc<Cell<bool>>,
        callback: Box<dyn FnMut(bool)>,
    }

    /// Visibility source driven by the test.
    #[derive(Clone, Default)]
    pub struct ManualVisibility {
        listeners: Rc<RefCell<Vec<Listener>>>,
        unavailable: bool,
    }

    impl ManualVisibility {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn unavailable() -> Self {
            Self {
                unavailable: true,
                ..Self::default()
            }
        }

        pub fn emit(&self, visible: bool) {
            let mut listeners = self.listeners.borrow_mut();
            for listener in listeners.iter_mut() {
                if listener.active.get() {
                    (listener.callback)(visible);
                }
            }
        }

        pub fn active_count(&self) -> usize {
            self.listeners
                .borrow()
                .iter()
                .filter(|l| l.active.get())
                .count()
        }
    }

    impl VisibilitySource for ManualVisibility {
        type Region = ();

        fn subscribe(
            &self,
            _region: &(),
            _options: &RevealOptions,
            on_change: Box<dyn FnMut(bool)>,
        ) -> Result<Subscription, ObservationUnavailable> {
            if self.unavailable {
                return Err(ObservationUnavailable("no observer in test host".into()));
            }
            let active = Rc::new(Cell::new(true));
            self.listeners.borrow_mut().push(Listener {
                active: active.clone(),
                callback: on_change,
            });
            Ok(Subscription::new(move || active.set(false)))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::manual::ManualVisibility;
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, impl Fn(bool) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |v| sink.borrow_mut().push(v))
    }

    #[test]
    fn region_reveals_once_and_stops_tracking() {
        let source = ManualVisibility::new();
        let (seen, on_change) = recorder();
        let watch = RegionWatch::observe(&source, &(), RevealOptions::default(), on_change);

        assert!(!watch.is_revealed());
        source.emit(false);
        assert!(!watch.is_revealed());

        source.emit(true);
        assert!(watch.is_revealed());
        assert!(!watch.is_tracking());
        assert_eq!(source.active_count(), 0);

        source.emit(false);
        source.emit(true);
        assert!(watch.is_revealed());
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn unavailable_observer_reveals_without_scrolling() {
        let source = ManualVisibility::unavailable();
        let (seen, on_change) = recorder();
        let watch = RegionWatch::observe(&source, &(), RevealOptions::default(), on_change);

        assert!(watch.is_revealed());
        assert!(!watch.is_tracking());
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn repeatable_reveal_follows_visibility() {
        let source = ManualVisibility::new();
        let (seen, on_change) = recorder();
        let options = RevealOptions {
            trigger_once: false,
            ..RevealOptions::default()
        };
        let watch = RegionWatch::observe(&source, &(), options, on_change);

        source.emit(true);
        source.emit(false);
        source.emit(true);
        assert!(watch.is_revealed());
        assert!(watch.is_tracking());
        assert_eq!(*seen.borrow(), vec![true, false, true]);
    }

    #[test]
    fn sibling_regions_are_independent() {
        let first_source = ManualVisibility::new();
        let second_source = ManualVisibility::new();
        let first = RegionWatch::observe(&first_source, &(), RevealOptions::default(), |_| {});
        let second = RegionWatch::observe(&second_source, &(), RevealOptions::default(), |_| {});

        first_source.emit(true);
        assert!(first.is_revealed());
        assert!(!second.is_revealed());
        assert_eq!(second_source.active_count(), 1);
    }

    #[test]
    fn dropping_watch_releases_subscription() {
        let source = ManualVisibility::new();
        let (seen, on_change) = recorder();
        let watch = RegionWatch::observe(&source, &(), RevealOptions::default(), on_change);
        assert_eq!(source.active_count(), 1);

        drop(watch);
        assert_eq!(source.active_count(), 0);
        source.emit(true);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn negative_margin_delays_reveal_near_the_fold() {
        let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
        let options = RevealOptions::default();

        let peeking = Rect::new(0.0, 750.0, 1280.0, 400.0);
        assert!(!intersects(peeking, viewport, &options));

        let entered = Rect::new(0.0, 650.0, 1280.0, 400.0);
        assert!(intersects(entered, viewport, &options));

        let mut controller = RevealController::new(options);
        assert_eq!(controller.on_geometry(peeking, viewport), RevealUpdate::Unchanged);
        assert_eq!(controller.on_geometry(entered, viewport), RevealUpdate::Revealed);
        assert_eq!(controller.on_geometry(peeking, viewport), RevealUpdate::Unchanged);
        assert!(controller.is_revealed());
    }

    #[test]
    fn threshold_requires_visible_fraction() {
        let viewport = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let options = RevealOptions {
            threshold: 0.5,
            root_margin: RootMargin::uniform(0),
            ..RevealOptions::default()
        };
        let quarter = Rect::new(0.0, 900.0, 1000.0, 400.0);
        let most = Rect::new(0.0, 500.0, 1000.0, 400.0);
        assert!(!intersects(quarter, viewport, &options));
        assert!(intersects(most, viewport, &options));
    }

    #[test]
    fn root_margin_renders_as_css() {
        assert_eq!(RootMargin::default().to_css(), "-100px -100px -100px -100px");
    }
}
