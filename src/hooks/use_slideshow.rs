use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use log::{error, warn};
use yew::prelude::*;

use crate::slideshow::{ImageRef, SlideshowTicker};
use crate::timer::BrowserScheduler;

#[derive(Clone)]
pub struct UseSlideshowHandle {
    ticker: Rc<RefCell<Option<SlideshowTicker>>>,
    update: UseForceUpdateHandle,
}

impl UseSlideshowHandle {
    /// `None` when the slideshow could not start.
    pub fn images(&self) -> Option<Vec<ImageRef>> {
        self.ticker.borrow().as_ref().map(|t| t.images().to_vec())
    }

    pub fn active_index(&self) -> usize {
        self.ticker
            .borrow()
            .as_ref()
            .map_or(0, SlideshowTicker::active_index)
    }

    pub fn select(&self, index: usize) {
        if let Some(ticker) = self.ticker.borrow().as_ref() {
            if let Err(e) = ticker.select_index(index) {
                warn!("{}", e);
                return;
            }
        }
        self.update.force_update();
    }
}

/// Rotates `images` every `period` until the calling component unmounts.
#[hook]
pub fn use_slideshow(images: Vec<ImageRef>, period: Duration) -> UseSlideshowHandle {
    let update = use_force_update();

    let ticker = {
        let update = update.clone();
        use_mut_ref(move || {
            match SlideshowTicker::start(images, period, &BrowserScheduler, move |_| {
                update.force_update()
            }) {
                Ok(ticker) => Some(ticker),
                Err(e) => {
                    error!("hero slideshow disabled: {}", e);
                    None
                }
            }
        })
    };

    UseSlideshowHandle { ticker, update }
}
