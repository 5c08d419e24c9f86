//! Organization configuration for the Roster Engine.
//!
//! This module provides loading of organization settings from YAML and
//! the explicit [`OrgContext`] handed to anything that needs organization
//! scope.

mod loader;
mod types;

pub use loader::OrgContext;
pub use types::OrganizationSettings;
