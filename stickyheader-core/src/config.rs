//! Toggle configuration.
//!
//! Defaults match the blog theme: the first entry's `<h1>` drives the
//! `.header` bar, which gains `scrolled` while the title gains `hidden`.
//! Every field can be overridden from a JS object passed to
//! `install_with_config`; missing fields fall back to these defaults.

use crate::error::ConfigError;
use crate::geometry::RootMargin;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE_SELECTOR: &str = ".first-entry .entry-header h1";
pub const DEFAULT_HEADER_SELECTOR: &str = ".header";
pub const DEFAULT_HEADER_FLAG: &str = "scrolled";
pub const DEFAULT_TITLE_FLAG: &str = "hidden";
pub const DEFAULT_ROOT_MARGIN: &str = "0px";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToggleConfig {
    /// Query for the title whose visibility drives the toggle.
    pub title_selector: String,
    /// Query for the header container.
    pub header_selector: String,
    /// Class raised on the header while the title is out of view.
    pub header_flag: String,
    /// Class raised on the title while it is out of view.
    pub title_flag: String,
    /// Visible-area ratio the title must reach to count as visible.
    /// Zero means any pixel.
    pub threshold: f64,
    /// CSS margin expanding (or shrinking, if negative) the viewport.
    pub root_margin: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            title_selector: DEFAULT_TITLE_SELECTOR.to_string(),
            header_selector: DEFAULT_HEADER_SELECTOR.to_string(),
            header_flag: DEFAULT_HEADER_FLAG.to_string(),
            title_flag: DEFAULT_TITLE_FLAG.to_string(),
            threshold: 0.0,
            root_margin: DEFAULT_ROOT_MARGIN.to_string(),
        }
    }
}

impl ToggleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title_selector.trim().is_empty() {
            return Err(ConfigError::EmptySelector("title"));
        }
        if self.header_selector.trim().is_empty() {
            return Err(ConfigError::EmptySelector("header"));
        }
        // classList.add rejects empty tokens and tokens with whitespace
        if !is_valid_flag(&self.header_flag) {
            return Err(ConfigError::InvalidFlag("header"));
        }
        if !is_valid_flag(&self.title_flag) {
            return Err(ConfigError::InvalidFlag("title"));
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::Threshold(self.threshold));
        }
        RootMargin::parse(&self.root_margin)?;
        Ok(())
    }
}

fn is_valid_flag(flag: &str) -> bool {
    !flag.is_empty() && !flag.chars().any(char::is_whitespace)
}
