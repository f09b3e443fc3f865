use crate::dom::DomElement;
use js_sys::Array;
use stickyheader_core::{
    meets_threshold, ObserveError, ObserverOptions, VisibilityCallback, VisibilityObserver,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Watches one element with the browser's `IntersectionObserver`.
#[derive(Default)]
pub struct IntersectionWatcher {
    active: Option<ActiveObserver>,
}

/// Observer plus the closure it calls. On drop, queued entries are taken and
/// the observer disconnected before the closure is freed, so a notification
/// task already scheduled finds nothing to deliver.
struct ActiveObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl Drop for ActiveObserver {
    fn drop(&mut self) {
        // disconnect() leaves pending entries queued
        let _ = self.observer.take_records();
        self.observer.disconnect();
    }
}

impl IntersectionWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the current global scope exposes `IntersectionObserver`.
    pub fn is_supported() -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
    }

    pub fn is_observing(&self) -> bool {
        self.active.is_some()
    }
}

impl VisibilityObserver<DomElement> for IntersectionWatcher {
    fn register(
        &mut self,
        target: &DomElement,
        options: &ObserverOptions,
        mut on_change: VisibilityCallback,
    ) -> Result<(), ObserveError> {
        if self.active.is_some() {
            return Err(ObserveError::AlreadyRegistered);
        }
        if !Self::is_supported() {
            return Err(ObserveError::Unsupported(
                "IntersectionObserver is not defined".to_string(),
            ));
        }

        let threshold = options.threshold;
        let callback = Closure::wrap(Box::new(
            move |entries: Array, _observer: IntersectionObserver| {
                // Entries arrive oldest first; each one is a state report
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_change(meets_threshold(
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                        threshold,
                    ));
                }
            },
        ) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&options.root_margin);
        init.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| ObserveError::Rejected(format!("{e:?}")))?;
        observer.observe(target.element());

        self.active = Some(ActiveObserver {
            observer,
            _callback: callback,
        });
        Ok(())
    }

    fn release(&mut self) {
        self.active = None;
    }
}
