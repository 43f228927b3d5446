use std::collections::HashMap;

use crate::data::post_repository::PostRepository;
use crate::data::user_repository::UserRepository;
use crate::domain::error::DomainError;
use crate::domain::post::Post;
use crate::domain::user::UserWithPosts;

/// Read side of the users resource. A user's post list is derived from the
/// posts' owner ids, so it is never written separately.
pub(crate) struct UserService<U: UserRepository, P: PostRepository> {
    users: U,
    posts: P,
}

impl<U: UserRepository, P: PostRepository> UserService<U, P> {
    pub(crate) fn new(users: U, posts: P) -> Self {
        Self { users, posts }
    }

    pub(crate) async fn list_users(&self) -> Result<Vec<UserWithPosts>, DomainError> {
        let users = self.users.list_users().await?;
        let mut by_owner: HashMap<i64, Vec<Post>> = HashMap::new();
        for post in self.posts.list_posts().await? {
            by_owner.entry(post.user_id).or_default().push(post);
        }

        Ok(users
            .into_iter()
            .map(|user| UserWithPosts {
                posts: by_owner.remove(&user.id).unwrap_or_default(),
                user,
            })
            .collect())
    }
}
