//! Page-lifetime wiring: one toggler per page, torn down on `beforeunload`.

use crate::dom::{DocumentLookup, DomElement};
use crate::watchers::PageWatcher;
use std::cell::RefCell;
use stickyheader_core::{HeaderToggler, ToggleConfig, ToggleError, ToggleStart};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, Window};

pub type PageToggler = HeaderToggler<DomElement, PageWatcher>;

const UNLOAD_EVENT: &str = "beforeunload";

thread_local! {
    static INSTALLED: RefCell<Option<Installed>> = const { RefCell::new(None) };
}

struct Installed {
    toggler: PageToggler,
    _unload: Option<UnloadHook>,
}

/// `beforeunload` listener that stops the installed toggler.
struct UnloadHook {
    window: Window,
    handler: Closure<dyn FnMut(Event)>,
}

impl UnloadHook {
    fn attach(window: Window) -> Result<Self, JsValue> {
        let handler = Closure::wrap(Box::new(move |_: Event| {
            // Only stop here; the hook itself is dropped by uninstall_page
            INSTALLED.with(|slot| {
                if let Some(installed) = slot.borrow_mut().as_mut() {
                    installed.toggler.stop();
                }
            });
        }) as Box<dyn FnMut(Event)>);

        window.add_event_listener_with_callback(UNLOAD_EVENT, handler.as_ref().unchecked_ref())?;
        Ok(Self { window, handler })
    }
}

impl Drop for UnloadHook {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(UNLOAD_EVENT, self.handler.as_ref().unchecked_ref());
    }
}

/// Build and start a toggler against the current document, replacing any
/// previously installed one.
///
/// Missing elements (or no document at all) give `Ok(Inert)` and install
/// nothing. If the native observer refuses to start, retries once with
/// scroll polling.
pub fn install_page(config: ToggleConfig) -> Result<ToggleStart, ToggleError> {
    uninstall_page();

    let Some(window) = web_sys::window() else {
        log::debug!("No window, sticky header inert");
        return Ok(ToggleStart::Inert);
    };
    let Some(document) = window.document() else {
        log::debug!("No document, sticky header inert");
        return Ok(ToggleStart::Inert);
    };

    let lookup = DocumentLookup::new(document);
    let mut toggler = PageToggler::new(&lookup, PageWatcher::detect(), config);
    let outcome = match toggler.start() {
        Err(ToggleError::Observe(e)) if toggler.observer().is_native() => {
            log::warn!("IntersectionObserver failed ({e}), falling back to scroll polling");
            toggler.replace_observer(PageWatcher::scroll_poll());
            toggler.start()?
        }
        other => other?,
    };

    if outcome == ToggleStart::Inert {
        return Ok(outcome);
    }

    let unload = UnloadHook::attach(window)
        .map_err(|e| log::warn!("Failed to attach {UNLOAD_EVENT} listener: {e:?}"))
        .ok();

    INSTALLED.with(|slot| {
        *slot.borrow_mut() = Some(Installed {
            toggler,
            _unload: unload,
        });
    });
    Ok(outcome)
}

/// Stop and drop the installed toggler, if any.
pub fn uninstall_page() {
    let previous = INSTALLED.with(|slot| slot.borrow_mut().take());
    if let Some(mut installed) = previous {
        installed.toggler.stop();
        log::debug!("Sticky header uninstalled");
    }
}

/// Whether an installed toggler is currently watching the title.
pub fn is_installed() -> bool {
    INSTALLED.with(|slot| {
        slot.borrow()
            .as_ref()
            .is_some_and(|installed| installed.toggler.is_active())
    })
}
