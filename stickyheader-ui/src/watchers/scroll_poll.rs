//! Fallback watcher for browsers without `IntersectionObserver`.
//!
//! Samples the target's bounding box against the viewport on every scroll
//! and resize and reports only changes, so callers see the same delivery
//! pattern as the native observer: one report up front, then one per
//! boundary crossing.

use crate::dom::DomElement;
use std::cell::RefCell;
use std::rc::Rc;
use stickyheader_core::{
    is_intersecting, ChangeDetector, ObserveError, ObserverOptions, Rect, RootMargin,
    VisibilityCallback, VisibilityObserver,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, Event, Window};

const SAMPLE_EVENTS: [&str; 2] = ["scroll", "resize"];

#[derive(Default)]
pub struct ScrollPollWatcher {
    active: Option<ScrollListener>,
}

struct Sampler {
    window: Window,
    target: Element,
    margin: RootMargin,
    threshold: f64,
    detector: ChangeDetector<bool>,
    on_change: VisibilityCallback,
}

impl Sampler {
    fn sample(&mut self) {
        let visible = bounding_rect(&self.target).is_some_and(|target| {
            is_intersecting(
                &target,
                &viewport_rect(&self.window),
                &self.margin,
                self.threshold,
            )
        });
        if let Some(visible) = self.detector.sample(visible) {
            (self.on_change)(visible);
        }
    }
}

/// Attached window listeners. Detaches on drop.
struct ScrollListener {
    window: Window,
    handler: Closure<dyn FnMut(Event)>,
    attached: Vec<&'static str>,
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        for event in &self.attached {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.handler.as_ref().unchecked_ref());
        }
    }
}

impl ScrollPollWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_observing(&self) -> bool {
        self.active.is_some()
    }
}

impl VisibilityObserver<DomElement> for ScrollPollWatcher {
    fn register(
        &mut self,
        target: &DomElement,
        options: &ObserverOptions,
        on_change: VisibilityCallback,
    ) -> Result<(), ObserveError> {
        if self.active.is_some() {
            return Err(ObserveError::AlreadyRegistered);
        }
        let window =
            web_sys::window().ok_or_else(|| ObserveError::Unsupported("no window".to_string()))?;
        let margin = RootMargin::parse(&options.root_margin)
            .map_err(|e| ObserveError::Rejected(e.to_string()))?;

        let sampler = Rc::new(RefCell::new(Sampler {
            window: window.clone(),
            target: target.element().clone(),
            margin,
            threshold: options.threshold,
            detector: ChangeDetector::new(),
            on_change,
        }));

        let handler_sampler = Rc::clone(&sampler);
        let handler = Closure::wrap(Box::new(move |_: Event| {
            handler_sampler.borrow_mut().sample();
        }) as Box<dyn FnMut(Event)>);

        let mut listener = ScrollListener {
            window: window.clone(),
            handler,
            attached: Vec::with_capacity(SAMPLE_EVENTS.len()),
        };

        let listener_options = AddEventListenerOptions::new();
        listener_options.set_passive(true);
        for event in SAMPLE_EVENTS {
            // On failure the partially attached listener detaches on drop
            window
                .add_event_listener_with_callback_and_add_event_listener_options(
                    event,
                    listener.handler.as_ref().unchecked_ref(),
                    &listener_options,
                )
                .map_err(|e| ObserveError::Rejected(format!("{e:?}")))?;
            listener.attached.push(event);
        }

        // Initial report, as the native observer delivers on observe()
        sampler.borrow_mut().sample();

        self.active = Some(listener);
        Ok(())
    }

    fn release(&mut self) {
        self.active = None;
    }
}

/// `None` for elements without a layout box (`display: none`, detached),
/// which the native observer never reports as intersecting.
fn bounding_rect(element: &Element) -> Option<Rect> {
    if element.get_client_rects().length() == 0 {
        return None;
    }
    let rect = element.get_bounding_client_rect();
    Some(Rect::new(rect.x(), rect.y(), rect.width(), rect.height()))
}

fn viewport_rect(window: &Window) -> Rect {
    let dimension = |value: Result<JsValue, JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Rect::viewport(dimension(window.inner_width()), dimension(window.inner_height()))
}
