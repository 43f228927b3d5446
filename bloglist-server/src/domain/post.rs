use serde::{Deserialize, Serialize};

use super::error::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Post {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) author: Option<String>,
    pub(crate) url: String,
    pub(crate) likes: i64,
    pub(crate) user_id: i64,
}

/// Owner fields shown next to a post in listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PostOwner {
    pub(crate) id: i64,
    pub(crate) username: String,
    pub(crate) name: String,
}

#[derive(Debug, Clone)]
pub(crate) struct PostWithOwner {
    pub(crate) post: Post,
    pub(crate) owner: PostOwner,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct CreatePostRequest {
    pub(crate) title: Option<String>,
    pub(crate) author: Option<String>,
    pub(crate) url: Option<String>,
    pub(crate) likes: Option<i64>,
}

/// A create request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidCreatePost {
    pub(crate) title: String,
    pub(crate) author: Option<String>,
    pub(crate) url: String,
    pub(crate) likes: i64,
}

impl CreatePostRequest {
    pub(crate) fn validate(self) -> Result<ValidCreatePost, DomainError> {
        let title = non_blank(self.title);
        let url = non_blank(self.url);
        let (Some(title), Some(url)) = (title, url) else {
            return Err(DomainError::validation(
                "title",
                "Title and URL are required",
            ));
        };

        let likes = self.likes.unwrap_or(0);
        validate_likes(likes)?;

        Ok(ValidCreatePost {
            title,
            author: non_blank(self.author),
            url,
            likes,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct UpdateLikesRequest {
    pub(crate) likes: i64,
}

impl UpdateLikesRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        validate_likes(self.likes)?;
        Ok(self)
    }
}

/// Parses a storage key taken from a request path.
pub(crate) fn parse_post_id(raw: &str) -> Result<i64, DomainError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(DomainError::MalformedId(raw.to_string())),
    }
}

fn validate_likes(likes: i64) -> Result<(), DomainError> {
    if likes < 0 {
        return Err(DomainError::validation("likes", "likes must be >= 0"));
    }
    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
