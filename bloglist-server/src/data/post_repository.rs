use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostWithOwner};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NewPost {
    pub(crate) title: String,
    pub(crate) author: Option<String>,
    pub(crate) url: String,
    pub(crate) likes: i64,
    pub(crate) user_id: i64,
}

#[async_trait]
pub(crate) trait PostRepository: Send + Sync {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError>;
    async fn get_post(&self, id: i64) -> Result<Option<Post>, DomainError>;
    /// All posts in id order.
    async fn list_posts(&self) -> Result<Vec<Post>, DomainError>;
    async fn list_posts_with_owner(&self) -> Result<Vec<PostWithOwner>, DomainError>;
    /// Returns `None` when no post with `post_id` is owned by `owner_id`.
    async fn update_likes_owned(
        &self,
        post_id: i64,
        owner_id: i64,
        likes: i64,
    ) -> Result<Option<Post>, DomainError>;
    async fn delete_post_owned(&self, post_id: i64, owner_id: i64) -> Result<bool, DomainError>;
}

#[async_trait]
impl<T: PostRepository + ?Sized> PostRepository for Arc<T> {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        (**self).create_post(input).await
    }

    async fn get_post(&self, id: i64) -> Result<Option<Post>, DomainError> {
        (**self).get_post(id).await
    }

    async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        (**self).list_posts().await
    }

    async fn list_posts_with_owner(&self) -> Result<Vec<PostWithOwner>, DomainError> {
        (**self).list_posts_with_owner().await
    }

    async fn update_likes_owned(
        &self,
        post_id: i64,
        owner_id: i64,
        likes: i64,
    ) -> Result<Option<Post>, DomainError> {
        (**self).update_likes_owned(post_id, owner_id, likes).await
    }

    async fn delete_post_owned(&self, post_id: i64, owner_id: i64) -> Result<bool, DomainError> {
        (**self).delete_post_owned(post_id, owner_id).await
    }
}
