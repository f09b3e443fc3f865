/// Two-state machine driven by intersection events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TitleVisibility {
    Visible,
    Hidden,
}

impl TitleVisibility {
    pub fn from_intersecting(is_intersecting: bool) -> Self {
        if is_intersecting {
            Self::Visible
        } else {
            Self::Hidden
        }
    }

    /// Value written to both the header and the title flag in this state.
    pub fn flags_raised(self) -> bool {
        self == Self::Hidden
    }
}

/// Whether an intersection report counts as visible for `threshold`.
///
/// At threshold zero any intersection counts, including a zero-area
/// edge contact.
pub fn meets_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && (threshold <= 0.0 || ratio >= threshold)
}

/// Reports the first sample and every change after it, swallowing repeats.
#[derive(Clone, Debug)]
pub struct ChangeDetector<T> {
    last: Option<T>,
}

impl<T> Default for ChangeDetector<T> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<T: Copy + PartialEq> ChangeDetector<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(&mut self, value: T) -> Option<T> {
        if self.last == Some(value) {
            return None;
        }
        self.last = Some(value);
        Some(value)
    }

    pub fn last(&self) -> Option<T> {
        self.last
    }

    /// Forget the last sample so the next one is reported again.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
