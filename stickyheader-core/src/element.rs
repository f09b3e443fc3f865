/// An element carrying boolean presentation flags (CSS classes in the browser).
pub trait FlagTarget {
    /// Raise or clear `flag`. Setting a flag to its current value is a no-op.
    fn set_flag(&self, flag: &str, on: bool);
}

/// Resolves structural selectors to element handles.
///
/// Injected into [`HeaderToggler::new`](crate::HeaderToggler::new) in place of
/// global document queries, so the toggler can run against mock pages.
pub trait PageLookup {
    type Element;

    /// First element matching `selector`, or `None` if the page has none.
    fn query(&self, selector: &str) -> Option<Self::Element>;
}
