//! Pay frequency model.
//!
//! This module defines the PayFrequency enum for representing how often
//! an organization runs payroll.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Represents how often an organization runs payroll.
///
/// Unrecognized or missing frequency labels normalize to
/// [`PayFrequency::Fortnightly`], the documented organization default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    /// A 7-day pay period starting on Monday.
    Weekly,
    /// A 14-day pay period starting on an anchored Monday.
    #[default]
    Fortnightly,
    /// A calendar-month pay period.
    Monthly,
}

impl PayFrequency {
    /// Parses a frequency label, normalizing anything unrecognized to
    /// `Fortnightly`.
    ///
    /// Matching is case-insensitive. Normalization is documented default
    /// behavior rather than an error, but a warning is logged so upstream
    /// data problems are not masked silently.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::models::PayFrequency;
    ///
    /// assert_eq!(PayFrequency::from_label("weekly"), PayFrequency::Weekly);
    /// assert_eq!(PayFrequency::from_label("MONTHLY"), PayFrequency::Monthly);
    /// assert_eq!(PayFrequency::from_label("every-blue-moon"), PayFrequency::Fortnightly);
    /// assert_eq!(PayFrequency::from_label(""), PayFrequency::Fortnightly);
    /// ```
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "weekly" => PayFrequency::Weekly,
            "fortnightly" => PayFrequency::Fortnightly,
            "monthly" => PayFrequency::Monthly,
            other => {
                if !other.is_empty() {
                    warn!(label = %label, "Unrecognized pay frequency, defaulting to fortnightly");
                }
                PayFrequency::Fortnightly
            }
        }
    }

    /// Returns the human-readable label for this frequency.
    pub fn label(&self) -> &'static str {
        match self {
            PayFrequency::Weekly => "Weekly",
            PayFrequency::Fortnightly => "Fortnightly",
            PayFrequency::Monthly => "Monthly",
        }
    }
}
