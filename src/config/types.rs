//! Organization settings types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::PayFrequency;

/// Settings for one organization, as stored in `organization.yaml`.
///
/// # Example
///
/// ```
/// use roster_engine::config::OrganizationSettings;
///
/// let yaml = r#"
/// id: org_001
/// name: Corner Cafe
/// pay_frequency: fortnightly
/// timezone: Australia/Melbourne
/// "#;
/// let settings: OrganizationSettings = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(settings.name, "Corner Cafe");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationSettings {
    /// Unique identifier for the organization.
    pub id: String,
    /// Display name of the organization.
    pub name: String,
    /// The payroll frequency the organization runs on.
    #[serde(default)]
    pub pay_frequency: PayFrequency,
    /// IANA timezone name used by the UI for display purposes only; all
    /// engine arithmetic is calendar-date based.
    pub timezone: String,
    /// Default hourly rate offered when creating new shifts, if any.
    #[serde(default)]
    pub default_hourly_rate: Option<Decimal>,
}
