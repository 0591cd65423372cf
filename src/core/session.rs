//! Session context
//!
//! The original application read the connected user from a global mutable
//! store. Here the session is an explicit value handed to each controller
//! at construction; nothing reads ambient state.

use serde::{Deserialize, Serialize};

/// Role of the connected user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}

/// The connected user, as stored by the login flow
///
/// The wire format matches the original session blob:
/// `{"type": "Employee", "email": "a@a"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub email: String,
}

impl SessionContext {
    pub fn employee(email: impl Into<String>) -> Self {
        Self {
            user_type: UserType::Employee,
            email: email.into(),
        }
    }

    pub fn admin(email: impl Into<String>) -> Self {
        Self {
            user_type: UserType::Admin,
            email: email.into(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user_type == UserType::Admin
    }
}
