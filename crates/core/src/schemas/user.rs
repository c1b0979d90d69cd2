//! User schema, reserved for future authentication work.
//!
//! No route exposes users today; the schema exists so the `user` collection
//! has a defined shape when auth lands.

use serde::{Deserialize, Serialize};

use super::{ValidationError, require_non_empty};
use crate::entity::Entity;

/// A marketplace user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Postal address.
    pub address: Option<String>,
    /// Age in years, 0-120.
    pub age: Option<u32>,
    /// Whether the user is active.
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

const fn default_is_active() -> bool {
    true
}

impl Entity for User {
    const COLLECTION: &'static str = "user";
}

impl User {
    /// Validate value-level constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if `name` or `email` is empty, or if `age`
    /// is above 120.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("email", &self.email)?;
        if let Some(age) = self.age {
            if age > 120 {
                return Err(ValidationError::AgeOutOfRange { value: age });
            }
        }
        Ok(())
    }
}
