use std::sync::Arc;

use crate::application::auth_service::AuthService;
use crate::application::blog_service::BlogService;
use crate::application::user_service::UserService;
use crate::data::post_repository::PostRepository;
use crate::data::user_repository::UserRepository;
use crate::infrastructure::jwt::JwtService;

pub(crate) mod http;
pub(crate) mod openapi;

pub(crate) type SharedPostRepository = Arc<dyn PostRepository>;
pub(crate) type SharedUserRepository = Arc<dyn UserRepository>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) auth_service: Arc<AuthService<SharedUserRepository>>,
    pub(crate) blog_service: Arc<BlogService<SharedPostRepository>>,
    pub(crate) user_service: Arc<UserService<SharedUserRepository, SharedPostRepository>>,
}

impl AppState {
    pub(crate) fn new(
        users: SharedUserRepository,
        posts: SharedPostRepository,
        jwt: JwtService,
    ) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(users.clone(), jwt)),
            blog_service: Arc::new(BlogService::new(posts.clone())),
            user_service: Arc::new(UserService::new(users, posts)),
        }
    }
}
