//! Viewport geometry for the scroll-polling watcher.
//!
//! Reproduces the parts of the IntersectionObserver model the toggle relies
//! on: a root rectangle grown by `rootMargin`, edge-inclusive intersection,
//! and the intersection ratio compared against a threshold.

use crate::error::ConfigError;

/// Axis-aligned rectangle in CSS pixels, viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Viewport rectangle anchored at the origin.
    pub fn viewport(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Overlap of two rectangles. Rectangles sharing only an edge produce a
    /// zero-area overlap rather than `None`.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

/// One side of a root margin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarginLength {
    Px(f64),
    /// Percentage of the root's width (left/right) or height (top/bottom).
    Percent(f64),
}

impl MarginLength {
    fn parse(token: &str) -> Option<Self> {
        if let Some(value) = token.strip_suffix("px") {
            value.parse::<f64>().ok().filter(|v| v.is_finite()).map(Self::Px)
        } else if let Some(value) = token.strip_suffix('%') {
            value
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Self::Percent)
        } else {
            None
        }
    }

    pub fn resolve(self, basis: f64) -> f64 {
        match self {
            Self::Px(px) => px,
            Self::Percent(pct) => basis * pct / 100.0,
        }
    }
}

/// CSS-style margin around the root, in `top right bottom left` order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootMargin {
    pub top: MarginLength,
    pub right: MarginLength,
    pub bottom: MarginLength,
    pub left: MarginLength,
}

impl Default for RootMargin {
    fn default() -> Self {
        let zero = MarginLength::Px(0.0);
        Self {
            top: zero,
            right: zero,
            bottom: zero,
            left: zero,
        }
    }
}

impl RootMargin {
    /// Parse one to four `px`/`%` lengths using CSS shorthand expansion.
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::RootMargin(input.to_string());

        let lengths = input
            .split_whitespace()
            .map(MarginLength::parse)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(invalid)?;

        match lengths[..] {
            [all] => Ok(Self {
                top: all,
                right: all,
                bottom: all,
                left: all,
            }),
            [vertical, horizontal] => Ok(Self {
                top: vertical,
                right: horizontal,
                bottom: vertical,
                left: horizontal,
            }),
            [top, horizontal, bottom] => Ok(Self {
                top,
                right: horizontal,
                bottom,
                left: horizontal,
            }),
            [top, right, bottom, left] => Ok(Self {
                top,
                right,
                bottom,
                left,
            }),
            _ => Err(invalid()),
        }
    }

    /// Grow `root` outward by this margin. Negative lengths shrink it.
    pub fn expand(&self, root: Rect) -> Rect {
        let top = self.top.resolve(root.height);
        let right = self.right.resolve(root.width);
        let bottom = self.bottom.resolve(root.height);
        let left = self.left.resolve(root.width);

        Rect::new(
            root.x - left,
            root.y - top,
            root.width + left + right,
            root.height + top + bottom,
        )
    }
}

/// Fraction of `target` inside `root`, in `[0, 1]`.
///
/// A zero-area target that touches the root counts as fully inside.
pub fn intersection_ratio(target: &Rect, root: &Rect) -> f64 {
    match target.intersection(root) {
        None => 0.0,
        Some(_) if target.area() == 0.0 => 1.0,
        Some(overlap) => (overlap.area() / target.area()).min(1.0),
    }
}

/// Whether `target` counts as visible in `viewport` grown by `margin`.
pub fn is_intersecting(target: &Rect, viewport: &Rect, margin: &RootMargin, threshold: f64) -> bool {
    let root = margin.expand(*viewport);
    if target.intersection(&root).is_none() {
        return false;
    }
    crate::visibility::meets_threshold(true, intersection_ratio(target, &root), threshold)
}
