mod intersection;
mod scroll_poll;

pub use intersection::IntersectionWatcher;
pub use scroll_poll::ScrollPollWatcher;

use crate::dom::DomElement;
use stickyheader_core::{ObserveError, ObserverOptions, VisibilityCallback, VisibilityObserver};

/// The watcher best suited to the current browser.
pub enum PageWatcher {
    Intersection(IntersectionWatcher),
    ScrollPoll(ScrollPollWatcher),
}

impl PageWatcher {
    /// `IntersectionObserver` where the browser has it, scroll polling otherwise.
    pub fn detect() -> Self {
        if IntersectionWatcher::is_supported() {
            Self::Intersection(IntersectionWatcher::new())
        } else {
            log::info!("IntersectionObserver unavailable, polling scroll position");
            Self::scroll_poll()
        }
    }

    pub fn scroll_poll() -> Self {
        Self::ScrollPoll(ScrollPollWatcher::new())
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Self::Intersection(_))
    }
}

impl VisibilityObserver<DomElement> for PageWatcher {
    fn register(
        &mut self,
        target: &DomElement,
        options: &ObserverOptions,
        on_change: VisibilityCallback,
    ) -> Result<(), ObserveError> {
        match self {
            Self::Intersection(watcher) => watcher.register(target, options, on_change),
            Self::ScrollPoll(watcher) => watcher.register(target, options, on_change),
        }
    }

    fn release(&mut self) {
        match self {
            Self::Intersection(watcher) => watcher.release(),
            Self::ScrollPoll(watcher) => watcher.release(),
        }
    }
}
