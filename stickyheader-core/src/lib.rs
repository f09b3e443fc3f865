//! Platform-independent half of the sticky header: configuration, viewport
//! geometry, and the toggler state machine that keeps the header and title
//! flags in lockstep. DOM bindings live in `stickyheader-ui`.

pub mod config;
pub mod element;
pub mod error;
pub mod geometry;
pub mod observer;
pub mod toggler;
pub mod visibility;

pub use config::ToggleConfig;
pub use element::{FlagTarget, PageLookup};
pub use error::{ConfigError, ObserveError, ToggleError};
pub use geometry::{intersection_ratio, is_intersecting, MarginLength, Rect, RootMargin};
pub use observer::{ObserverOptions, VisibilityCallback, VisibilityObserver};
pub use toggler::{HeaderToggler, ToggleStart};
pub use visibility::{meets_threshold, ChangeDetector, TitleVisibility};
