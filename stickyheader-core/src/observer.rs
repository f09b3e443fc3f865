use crate::config::ToggleConfig;
use crate::error::ObserveError;

/// Invoked with `true` when the watched element is visible, `false` when not.
pub type VisibilityCallback = Box<dyn FnMut(bool)>;

/// Options handed to the watcher on registration.
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self::from(&ToggleConfig::default())
    }
}

impl From<&ToggleConfig> for ObserverOptions {
    fn from(config: &ToggleConfig) -> Self {
        Self {
            threshold: config.threshold,
            root_margin: config.root_margin.clone(),
        }
    }
}

/// Viewport-visibility watcher for a single element.
///
/// Implementations deliver callbacks serially on the event loop, report the
/// initial state with the first callback, and stop delivering once
/// [`release`](Self::release) returns.
pub trait VisibilityObserver<E> {
    fn register(
        &mut self,
        target: &E,
        options: &ObserverOptions,
        on_change: VisibilityCallback,
    ) -> Result<(), ObserveError>;

    /// Stop watching. Safe to call when nothing is registered.
    fn release(&mut self);
}
