//! Authentication context supplied by the host application
//!
//! Authentication itself happens elsewhere; the listing only needs to know
//! who is looking at it so it can greet them.

/// Who is viewing the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthContext {
    /// Signed-in user
    User { username: String },

    /// No authentication (public access)
    #[default]
    Anonymous,
}

impl AuthContext {
    pub fn user(username: impl Into<String>) -> Self {
        AuthContext::User {
            username: username.into(),
        }
    }

    /// Get the username if a user is signed in
    pub fn username(&self) -> Option<&str> {
        match self {
            AuthContext::User { username } => Some(username),
            AuthContext::Anonymous => None,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, AuthContext::Anonymous)
    }

    /// Heading shown above the search box
    pub fn greeting(&self) -> String {
        match self.username() {
            Some(name) => format!("Welcome, {name}!"),
            None => "Welcome!".to_string(),
        }
    }
}
