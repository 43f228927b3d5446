use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::post::Post;
use crate::domain::user::{RegisterRequest, User, UserWithPosts};
use crate::presentation::AppState;
use crate::presentation::http::app_error::AppResult;
use crate::presentation::http::extract::AppJson;

/// Lengths are checked on the trimmed username by the auth service.
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct RegisterDto {
    pub(crate) username: String,
    #[serde(default)]
    pub(crate) name: String,
    pub(crate) password: String,
}

/// A post as listed under its owner.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct UserBlogDto {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) author: Option<String>,
    pub(crate) url: String,
    pub(crate) likes: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct UserDto {
    pub(crate) id: i64,
    pub(crate) username: String,
    pub(crate) name: String,
    pub(crate) blogs: Vec<UserBlogDto>,
}

impl From<Post> for UserBlogDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            author: post.author,
            url: post.url,
            likes: post.likes,
        }
    }
}

impl From<UserWithPosts> for UserDto {
    fn from(UserWithPosts { user, posts }: UserWithPosts) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            blogs: posts.into_iter().map(UserBlogDto::from).collect(),
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserWithPosts {
            user,
            posts: Vec::new(),
        }
        .into()
    }
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = RegisterDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Validation error or username taken"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn create_user(
    State(state): State<AppState>,
    AppJson(dto): AppJson<RegisterDto>,
) -> AppResult<(StatusCode, Json<UserDto>)> {
    let req = RegisterRequest {
        username: dto.username,
        name: dto.name,
        password: dto.password,
    };

    let user = state.auth_service.register(req).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "All users with their blogs", body = [UserDto]),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserDto>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}
