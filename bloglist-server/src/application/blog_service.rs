use tracing::info;

use crate::data::post_repository::{NewPost, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::list_helper::{self, AuthorLikes, AuthorPosts, FavoritePost};
use crate::domain::post::{CreatePostRequest, Post, PostWithOwner, UpdateLikesRequest};

const BLOG: &str = "Blog";

#[derive(Debug, Clone)]
pub(crate) struct BlogStats {
    pub(crate) total_likes: i64,
    pub(crate) favorite: Option<FavoritePost>,
    pub(crate) most_blogs: Option<AuthorPosts>,
    pub(crate) most_likes: Option<AuthorLikes>,
}

pub(crate) struct BlogService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> BlogService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    pub(crate) async fn create_post(
        &self,
        owner_id: i64,
        req: CreatePostRequest,
    ) -> Result<Post, DomainError> {
        let req = req.validate()?;

        let new_post = NewPost {
            title: req.title,
            author: req.author,
            url: req.url,
            likes: req.likes,
            user_id: owner_id,
        };
        let post = self.repo.create_post(new_post).await?;
        info!(post_id = post.id, owner_id, "post created");
        Ok(post)
    }

    pub(crate) async fn get_post(&self, id: i64) -> Result<Post, DomainError> {
        self.repo
            .get_post(id)
            .await?
            .ok_or(DomainError::NotFound(BLOG))
    }

    pub(crate) async fn list_posts(&self) -> Result<Vec<PostWithOwner>, DomainError> {
        self.repo.list_posts_with_owner().await
    }

    pub(crate) async fn update_likes(
        &self,
        actor_user_id: i64,
        post_id: i64,
        req: UpdateLikesRequest,
    ) -> Result<Post, DomainError> {
        let req = req.validate()?;
        self.ensure_owner(actor_user_id, post_id).await?;

        // The owner filter in the write catches a delete racing with this update.
        self.repo
            .update_likes_owned(post_id, actor_user_id, req.likes)
            .await?
            .ok_or(DomainError::NotFound(BLOG))
    }

    pub(crate) async fn delete_post(
        &self,
        actor_user_id: i64,
        post_id: i64,
    ) -> Result<(), DomainError> {
        self.ensure_owner(actor_user_id, post_id).await?;

        let deleted = self.repo.delete_post_owned(post_id, actor_user_id).await?;
        if !deleted {
            return Err(DomainError::NotFound(BLOG));
        }
        info!(post_id, owner_id = actor_user_id, "post deleted");
        Ok(())
    }

    pub(crate) async fn stats(&self) -> Result<BlogStats, DomainError> {
        let posts = self.repo.list_posts().await?;

        Ok(BlogStats {
            total_likes: list_helper::total_likes(&posts),
            favorite: list_helper::favorite_post(&posts),
            most_blogs: list_helper::most_prolific_author(&posts),
            most_likes: list_helper::most_liked_author(&posts),
        })
    }

    async fn ensure_owner(&self, actor_user_id: i64, post_id: i64) -> Result<(), DomainError> {
        let post = self.get_post(post_id).await?;
        if post.user_id != actor_user_id {
            return Err(DomainError::Forbidden);
        }
        Ok(())
    }
}
