use super::error::DomainError;
use super::post::Post;

#[derive(Debug, Clone)]
pub(crate) struct RegisterRequest {
    pub(crate) username: String,
    pub(crate) name: String,
    pub(crate) password: String,
}

impl RegisterRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        let username = normalize_username(&self.username)?;
        let password_len = self.password.chars().count();
        if !(3..=128).contains(&password_len) {
            return Err(DomainError::validation(
                "password",
                "password must be 3..128 chars",
            ));
        }
        Ok(Self {
            username,
            name: self.name.trim().to_string(),
            password: self.password,
        })
    }
}

#[derive(Debug, Clone)]
pub(crate) struct LoginRequest {
    pub(crate) username: String,
    pub(crate) password: String,
}

impl LoginRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        let username = self.username.trim();
        if username.is_empty() || self.password.is_empty() {
            return Err(DomainError::InvalidCredentials);
        }
        Ok(Self {
            username: username.to_string(),
            password: self.password,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct User {
    pub(crate) id: i64,
    pub(crate) username: String,
    pub(crate) name: String,
}

/// A user together with the posts they own, in post id order.
#[derive(Debug, Clone)]
pub(crate) struct UserWithPosts {
    pub(crate) user: User,
    pub(crate) posts: Vec<Post>,
}

fn normalize_username(username: &str) -> Result<String, DomainError> {
    let username = username.trim();
    let len = username.chars().count();
    if !(3..=64).contains(&len) {
        return Err(DomainError::validation(
            "username",
            "username must be 3..64 chars",
        ));
    }
    Ok(username.to_string())
}
