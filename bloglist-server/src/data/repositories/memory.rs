//! In-process store used by router-level tests.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::data::post_repository::{NewPost, PostRepository};
use crate::data::user_repository::{NewUser, UserCredentials, UserRepository};
use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostOwner, PostWithOwner};
use crate::domain::user::User;

#[derive(Default)]
struct MemoryState {
    users: Vec<UserCredentials>,
    posts: Vec<Post>,
    next_user_id: i64,
    next_post_id: i64,
}

#[derive(Clone, Default)]
pub(crate) struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn post_count(&self) -> usize {
        self.lock().posts.len()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().expect("memory store mutex poisoned")
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        let mut state = self.lock();
        if !state.users.iter().any(|c| c.user.id == input.user_id) {
            return Err(DomainError::NotFound("User"));
        }
        state.next_post_id += 1;
        let post = Post {
            id: state.next_post_id,
            title: input.title,
            author: input.author,
            url: input.url,
            likes: input.likes,
            user_id: input.user_id,
        };
        state.posts.push(post.clone());
        Ok(post)
    }

    async fn get_post(&self, id: i64) -> Result<Option<Post>, DomainError> {
        Ok(self.lock().posts.iter().find(|p| p.id == id).cloned())
    }

    async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.lock().posts.clone())
    }

    async fn list_posts_with_owner(&self) -> Result<Vec<PostWithOwner>, DomainError> {
        let state = self.lock();
        Ok(state
            .posts
            .iter()
            .filter_map(|post| {
                let owner = state.users.iter().find(|c| c.user.id == post.user_id)?;
                Some(PostWithOwner {
                    post: post.clone(),
                    owner: PostOwner {
                        id: owner.user.id,
                        username: owner.user.username.clone(),
                        name: owner.user.name.clone(),
                    },
                })
            })
            .collect())
    }

    async fn update_likes_owned(
        &self,
        post_id: i64,
        owner_id: i64,
        likes: i64,
    ) -> Result<Option<Post>, DomainError> {
        let mut state = self.lock();
        Ok(state
            .posts
            .iter_mut()
            .find(|p| p.id == post_id && p.user_id == owner_id)
            .map(|post| {
                post.likes = likes;
                post.clone()
            }))
    }

    async fn delete_post_owned(&self, post_id: i64, owner_id: i64) -> Result<bool, DomainError> {
        let mut state = self.lock();
        let before = state.posts.len();
        state
            .posts
            .retain(|p| !(p.id == post_id && p.user_id == owner_id));
        Ok(state.posts.len() < before)
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create_user(&self, input: NewUser) -> Result<User, DomainError> {
        let mut state = self.lock();
        if state.users.iter().any(|c| c.user.username == input.username) {
            return Err(DomainError::AlreadyExists("username"));
        }
        state.next_user_id += 1;
        let user = User {
            id: state.next_user_id,
            username: input.username,
            name: input.name,
        };
        state.users.push(UserCredentials {
            user: user.clone(),
            password_hash: input.password_hash,
        });
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|c| c.user.id == id)
            .map(|c| c.user.clone()))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, DomainError> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|c| c.user.username == username)
            .cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.lock().users.iter().map(|c| c.user.clone()).collect())
    }
}
