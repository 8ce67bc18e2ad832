use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config;
use crate::error::DomError;
use crate::subscription::Subscription;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Watch {
    Continue,
    Stop,
}

/// Reports every intersection change of `element` to `on_change` until it
/// answers `Watch::Stop` or the returned subscription is dropped.
pub fn watch(
    element: &Element,
    mut on_change: impl FnMut(bool) -> Watch + 'static,
) -> Result<Subscription, DomError> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if on_change(entry.is_intersecting()) == Watch::Stop {
                observer.disconnect();
                break;
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::VIEWPORT_THRESHOLD));
    options.set_root_margin(config::VIEWPORT_ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(DomError::js("creating intersection observer"))?;
    observer.observe(element);

    Ok(Subscription::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}
