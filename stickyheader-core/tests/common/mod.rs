#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;
use stickyheader_core::{
    FlagTarget, ObserveError, ObserverOptions, PageLookup, VisibilityCallback, VisibilityObserver,
};

/// Element handle recording its class list and every write.
#[derive(Clone, Default)]
pub struct MockElement {
    inner: Rc<RefCell<ElementState>>,
}

#[derive(Default)]
struct ElementState {
    classes: BTreeSet<String>,
    writes: usize,
    name: String,
}

impl MockElement {
    pub fn named(name: &str) -> Self {
        let element = Self::default();
        element.inner.borrow_mut().name = name.to_string();
        element
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.inner.borrow().classes.contains(flag)
    }

    pub fn writes(&self) -> usize {
        self.inner.borrow().writes
    }

    pub fn name(&self) -> String {
        self.inner.borrow().name.clone()
    }
}

impl FlagTarget for MockElement {
    fn set_flag(&self, flag: &str, on: bool) {
        let mut state = self.inner.borrow_mut();
        state.writes += 1;
        if on {
            state.classes.insert(flag.to_string());
        } else {
            state.classes.remove(flag);
        }
    }
}

#[derive(Default)]
pub struct MockPage {
    elements: HashMap<String, MockElement>,
}

impl MockPage {
    pub fn with(mut self, selector: &str, element: &MockElement) -> Self {
        self.elements.insert(selector.to_string(), element.clone());
        self
    }
}

impl PageLookup for MockPage {
    type Element = MockElement;

    fn query(&self, selector: &str) -> Option<MockElement> {
        self.elements.get(selector).cloned()
    }
}

/// Observer whose events are fired by the test through a shared handle.
///
/// Deliberately keeps the callback after `release` so tests can check the
/// toggler ignores late deliveries on its own.
#[derive(Clone, Default)]
pub struct MockObserver {
    inner: Rc<RefCell<ObserverState>>,
}

#[derive(Default)]
struct ObserverState {
    callback: Option<VisibilityCallback>,
    target: Option<String>,
    options: Option<ObserverOptions>,
    registrations: usize,
    releases: usize,
    fail_with: Option<ObserveError>,
    initial: Option<bool>,
}

impl MockObserver {
    pub fn failing(error: ObserveError) -> Self {
        let observer = Self::default();
        observer.inner.borrow_mut().fail_with = Some(error);
        observer
    }

    /// Report `is_intersecting` synchronously during `register`.
    pub fn reporting_on_register(is_intersecting: bool) -> Self {
        let observer = Self::default();
        observer.inner.borrow_mut().initial = Some(is_intersecting);
        observer
    }

    pub fn fire(&self, is_intersecting: bool) {
        // Take the callback out so it can run without the state borrowed
        let callback = self.inner.borrow_mut().callback.take();
        if let Some(mut callback) = callback {
            callback(is_intersecting);
            self.inner.borrow_mut().callback = Some(callback);
        }
    }

    pub fn registrations(&self) -> usize {
        self.inner.borrow().registrations
    }

    pub fn releases(&self) -> usize {
        self.inner.borrow().releases
    }

    pub fn target(&self) -> Option<String> {
        self.inner.borrow().target.clone()
    }

    pub fn options(&self) -> Option<ObserverOptions> {
        self.inner.borrow().options.clone()
    }
}

impl VisibilityObserver<MockElement> for MockObserver {
    fn register(
        &mut self,
        target: &MockElement,
        options: &ObserverOptions,
        mut on_change: VisibilityCallback,
    ) -> Result<(), ObserveError> {
        let initial = {
            let mut state = self.inner.borrow_mut();
            if let Some(error) = state.fail_with.clone() {
                return Err(error);
            }
            state.registrations += 1;
            state.target = Some(target.name());
            state.options = Some(options.clone());
            state.initial
        };

        if let Some(is_intersecting) = initial {
            on_change(is_intersecting);
        }
        self.inner.borrow_mut().callback = Some(on_change);
        Ok(())
    }

    fn release(&mut self) {
        self.inner.borrow_mut().releases += 1;
    }
}

pub const TITLE: &str = ".first-entry .entry-header h1";
pub const HEADER: &str = ".header";

pub struct Fixture {
    pub title: MockElement,
    pub header: MockElement,
    pub observer: MockObserver,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            title: MockElement::named("title"),
            header: MockElement::named("header"),
            observer: MockObserver::default(),
        }
    }

    pub fn page(&self) -> MockPage {
        MockPage::default()
            .with(TITLE, &self.title)
            .with(HEADER, &self.header)
    }

    pub fn header_scrolled(&self) -> bool {
        self.header.has_flag("scrolled")
    }

    pub fn title_hidden(&self) -> bool {
        self.title.has_flag("hidden")
    }

    pub fn total_writes(&self) -> usize {
        self.title.writes() + self.header.writes()
    }
}
