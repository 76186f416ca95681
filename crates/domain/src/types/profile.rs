//! User profile types
//!
//! The application-level user record, distinct from the auth provider's
//! identity. Created at sign-up and read to decide staff access.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_enum_conversions;

/// Application role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Customer,
    Employee,
}

impl_domain_enum_conversions!(Role {
    Customer => "customer",
    Employee => "employee",
});

impl Role {
    pub const fn is_staff(self) -> bool {
        matches!(self, Self::Employee)
    }
}

/// User profile stored in the `profiles` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Profile {
    /// Foreign key to the auth provider's user id
    pub user_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl Profile {
    /// Least-privilege profile for a user without a stored row.
    pub fn customer(user_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self { user_id: user_id.into(), name: None, email: email.into(), role: Role::Customer }
    }

    /// Trimmed name, falling back to the email when unset or blank.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().map(str::trim).filter(|name| !name.is_empty()).unwrap_or(&self.email)
    }
}
