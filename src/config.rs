//! Dashboard configuration.
//!
//! Limits and display defaults applied by the dashboard services. Hosts may
//! deserialize the configuration from JSON; missing keys take their default.

use serde::{Deserialize, Serialize};

/// Configuration for validation limits and display fallbacks.
///
/// # Examples
///
/// ```
/// use labkeeper::config::DashboardConfig;
///
/// let config = DashboardConfig::default();
/// assert_eq!(config.max_reason_length, 500);
/// assert!(!config.require_item_location);
///
/// let strict = DashboardConfig::strict();
/// assert!(strict.require_item_location);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    /// Maximum free-text not-completed reason length in characters.
    pub max_reason_length: usize,
    /// Maximum item description length in characters.
    pub max_description_length: usize,
    /// Display name for items reported without a reporter.
    pub anonymous_reporter_label: String,
    /// Whether item reports must name a location.
    pub require_item_location: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            max_reason_length: 500,
            max_description_length: 2_000,
            anonymous_reporter_label: "Anonymous".to_owned(),
            require_item_location: false,
        }
    }
}

impl DashboardConfig {
    /// Creates a strict configuration with reduced limits.
    ///
    /// Item reports must include a location.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            max_reason_length: 200,
            max_description_length: 500,
            require_item_location: true,
            ..Self::default()
        }
    }

    /// Creates a lenient configuration with effectively unbounded text.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            max_reason_length: usize::MAX,
            max_description_length: usize::MAX,
            ..Self::default()
        }
    }
}
