//! Header/title flag toggler.
//!
//! Watches the title's viewport visibility and mirrors it onto two flags:
//! the header's flag and the title's flag are both raised while the title is
//! out of view and both cleared while it is visible. The two are only ever
//! written together, from one transition function.

use crate::config::ToggleConfig;
use crate::element::{FlagTarget, PageLookup};
use crate::error::ToggleError;
use crate::observer::{ObserverOptions, VisibilityObserver};
use crate::visibility::{ChangeDetector, TitleVisibility};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Outcome of [`HeaderToggler::start`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleStart {
    /// The title is being watched.
    Observing,
    /// The title or header is missing from the page; nothing happens.
    Inert,
}

/// State shared between the toggler and the observer callback.
struct FlagPair<E> {
    title: E,
    header: E,
    title_flag: String,
    header_flag: String,
    active: Cell<bool>,
    visibility: RefCell<ChangeDetector<TitleVisibility>>,
}

impl<E: FlagTarget> FlagPair<E> {
    fn on_visibility_change(&self, is_intersecting: bool) {
        // Late deliveries after teardown are dropped
        if !self.active.get() {
            return;
        }

        let next = TitleVisibility::from_intersecting(is_intersecting);
        let Some(next) = self.visibility.borrow_mut().sample(next) else {
            return;
        };

        let raised = next.flags_raised();
        self.header.set_flag(&self.header_flag, raised);
        self.title.set_flag(&self.title_flag, raised);
        log::debug!("Title {next:?}, header flag {:?}={raised}", self.header_flag);
    }
}

/// Releases its observer when stopped or dropped.
pub struct HeaderToggler<E, O>
where
    E: FlagTarget + 'static,
    O: VisibilityObserver<E>,
{
    pair: Option<Rc<FlagPair<E>>>,
    observer: O,
    config: ToggleConfig,
}

impl<E, O> HeaderToggler<E, O>
where
    E: FlagTarget + 'static,
    O: VisibilityObserver<E>,
{
    /// Resolve the title and header through `lookup`, once.
    pub fn new<L>(lookup: &L, observer: O, config: ToggleConfig) -> Self
    where
        L: PageLookup<Element = E>,
    {
        let title = lookup.query(&config.title_selector);
        let header = lookup.query(&config.header_selector);
        Self::from_elements(title, header, observer, config)
    }

    /// Build from already-resolved handles. Either being `None` makes the
    /// toggler inert.
    pub fn from_elements(
        title: Option<E>,
        header: Option<E>,
        observer: O,
        config: ToggleConfig,
    ) -> Self {
        let pair = match (title, header) {
            (Some(title), Some(header)) => Some(Rc::new(FlagPair {
                title,
                header,
                title_flag: config.title_flag.clone(),
                header_flag: config.header_flag.clone(),
                active: Cell::new(false),
                visibility: RefCell::new(ChangeDetector::new()),
            })),
            (title, header) => {
                log::debug!(
                    "Sticky header inert: title found={}, header found={}",
                    title.is_some(),
                    header.is_some()
                );
                None
            }
        };

        Self {
            pair,
            observer,
            config,
        }
    }

    /// Begin watching the title. Inert togglers return `Ok(Inert)` without
    /// touching the observer.
    pub fn start(&mut self) -> Result<ToggleStart, ToggleError> {
        let Some(pair) = &self.pair else {
            return Ok(ToggleStart::Inert);
        };
        if pair.active.get() {
            return Ok(ToggleStart::Observing);
        }

        self.config.validate()?;
        let options = ObserverOptions::from(&self.config);

        // Active before registering: watchers may report synchronously
        pair.visibility.borrow_mut().reset();
        pair.active.set(true);

        let callback_pair = Rc::clone(pair);
        let registered = self.observer.register(
            &pair.title,
            &options,
            Box::new(move |is_intersecting| callback_pair.on_visibility_change(is_intersecting)),
        );

        if let Err(e) = registered {
            pair.active.set(false);
            log::warn!("Failed to observe title: {e}");
            return Err(e.into());
        }

        log::debug!(
            "Watching {:?} (threshold={}, rootMargin={:?})",
            self.config.title_selector,
            options.threshold,
            options.root_margin
        );
        Ok(ToggleStart::Observing)
    }

    /// Release the observation. Further events, including ones already
    /// queued, leave the flags untouched. Idempotent.
    pub fn stop(&mut self) {
        let Some(pair) = &self.pair else {
            return;
        };
        if !pair.active.replace(false) {
            return;
        }
        self.observer.release();
        log::debug!("Stopped watching title visibility");
    }

    /// Stop, swap in a different watcher, and hand back the old one. The
    /// resolved elements are kept; call [`start`](Self::start) again to
    /// resume.
    pub fn replace_observer(&mut self, observer: O) -> O {
        self.stop();
        std::mem::replace(&mut self.observer, observer)
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn is_active(&self) -> bool {
        self.pair.as_ref().is_some_and(|pair| pair.active.get())
    }

    pub fn is_inert(&self) -> bool {
        self.pair.is_none()
    }

    /// Last state applied to the flags. `None` until the first callback.
    pub fn visibility(&self) -> Option<TitleVisibility> {
        self.pair
            .as_ref()
            .and_then(|pair| pair.visibility.borrow().last())
    }

    pub fn config(&self) -> &ToggleConfig {
        &self.config
    }
}

impl<E, O> Drop for HeaderToggler<E, O>
where
    E: FlagTarget + 'static,
    O: VisibilityObserver<E>,
{
    fn drop(&mut self) {
        self.stop();
    }
}
