use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::reveal::{
    ObservationUnavailable, RegionWatch, RevealOptions, Subscription, VisibilitySource,
};

/// `IntersectionObserver` backed visibility.
pub struct IntersectionSource;

impl VisibilitySource for IntersectionSource {
    type Region = Element;

    fn subscribe(
        &self,
        region: &Element,
        options: &RevealOptions,
        mut on_change: Box<dyn FnMut(bool)>,
    ) -> Result<Subscription, ObservationUnavailable> {
        let window = web_sys::window()
            .ok_or_else(|| ObservationUnavailable("no window".to_string()))?;
        let supported = Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false);
        if !supported {
            return Err(ObservationUnavailable(
                "IntersectionObserver is not supported".to_string(),
            ));
        }

        let threshold = options.threshold;
        let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let visible =
                    entry.is_intersecting() && entry.intersection_ratio() >= threshold;
                on_change(visible);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&options.root_margin.to_css());
        init.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| ObservationUnavailable(format!("{:?}", e)))?;
        observer.observe(region);

        Ok(Subscription::new(move || {
            // keeps the JS callback alive for as long as the observer
            let _ = &callback;
            observer.disconnect();
        }))
    }
}

/// Returns whether the element behind `node` has been revealed.
#[hook]
pub fn use_reveal(node: NodeRef, options: RevealOptions) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let watch = match node.cast::<Element>() {
                    Some(element) => {
                        let setter = revealed.setter();
                        Some(RegionWatch::observe(
                            &IntersectionSource,
                            &element,
                            options,
                            move |visible| setter.set(visible),
                        ))
                    }
                    None => {
                        warn!("reveal region is not mounted, showing it");
                        revealed.set(true);
                        None
                    }
                };
                move || drop(watch)
            },
            node,
        );
    }

    *revealed
}
