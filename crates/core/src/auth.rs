//! # Auth Stub
//!
//! Mock sign-in with no credential exchange. `login` installs a fixed demo
//! user and `logout` clears it; nothing is persisted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    /// The user every `login` signs in as
    pub fn demo() -> Self {
        Self {
            id: "user-1".to_string(),
            name: "Demo User".to_string(),
            email: "demo@example.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuthSession {
    user: Option<User>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session already signed in as `user`
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn login(&mut self) -> &User {
        tracing::info!("Mock login");
        self.user.insert(User::demo())
    }

    pub fn logout(&mut self) {
        if self.user.take().is_some() {
            tracing::info!("Mock logout");
        }
    }
}
