use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::blog_service::BlogStats;
use crate::domain::list_helper::{AuthorLikes, AuthorPosts, FavoritePost};
use crate::domain::post::{
    CreatePostRequest, Post, PostWithOwner, UpdateLikesRequest, parse_post_id,
};
use crate::presentation::AppState;
use crate::presentation::http::app_error::AppResult;
use crate::presentation::http::extract::AppJson;
use crate::presentation::http::middleware::auth::AuthenticatedUser;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct CreateBlogDto {
    pub(crate) title: Option<String>,
    pub(crate) author: Option<String>,
    pub(crate) url: Option<String>,
    #[validate(range(min = 0, message = "likes must be >= 0"))]
    pub(crate) likes: Option<i64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct UpdateLikesDto {
    #[validate(range(min = 0, message = "likes must be >= 0"))]
    pub(crate) likes: i64,
}

/// A post with its owner as a bare id.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct BlogDto {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) author: Option<String>,
    pub(crate) url: String,
    pub(crate) likes: i64,
    pub(crate) user: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct BlogOwnerDto {
    pub(crate) id: i64,
    pub(crate) username: String,
    pub(crate) name: String,
}

/// A post with its owner populated.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct BlogWithOwnerDto {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) author: Option<String>,
    pub(crate) url: String,
    pub(crate) likes: i64,
    pub(crate) user: BlogOwnerDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct FavoriteBlogDto {
    pub(crate) title: String,
    pub(crate) author: Option<String>,
    pub(crate) likes: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct AuthorBlogsDto {
    pub(crate) author: Option<String>,
    pub(crate) blogs: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct AuthorLikesDto {
    pub(crate) author: Option<String>,
    pub(crate) likes: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct BlogStatsDto {
    pub(crate) total_likes: i64,
    pub(crate) favorite: Option<FavoriteBlogDto>,
    pub(crate) most_blogs: Option<AuthorBlogsDto>,
    pub(crate) most_likes: Option<AuthorLikesDto>,
}

impl From<Post> for BlogDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            author: post.author,
            url: post.url,
            likes: post.likes,
            user: post.user_id,
        }
    }
}

impl From<PostWithOwner> for BlogWithOwnerDto {
    fn from(PostWithOwner { post, owner }: PostWithOwner) -> Self {
        Self {
            id: post.id,
            title: post.title,
            author: post.author,
            url: post.url,
            likes: post.likes,
            user: BlogOwnerDto {
                id: owner.id,
                username: owner.username,
                name: owner.name,
            },
        }
    }
}

impl From<BlogStats> for BlogStatsDto {
    fn from(stats: BlogStats) -> Self {
        Self {
            total_likes: stats.total_likes,
            favorite: stats.favorite.map(|FavoritePost { title, author, likes }| {
                FavoriteBlogDto {
                    title,
                    author,
                    likes,
                }
            }),
            most_blogs: stats
                .most_blogs
                .map(|AuthorPosts { author, blogs }| AuthorBlogsDto { author, blogs }),
            most_likes: stats
                .most_likes
                .map(|AuthorLikes { author, likes }| AuthorLikesDto { author, likes }),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/blogs",
    tag = "blogs",
    responses(
        (status = 200, description = "All blogs with owners", body = [BlogWithOwnerDto]),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn list_blogs(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BlogWithOwnerDto>>> {
    let posts = state.blog_service.list_posts().await?;
    Ok(Json(posts.into_iter().map(BlogWithOwnerDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/blogs/stats",
    tag = "blogs",
    responses(
        (status = 200, description = "Aggregates over all blogs", body = BlogStatsDto),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn blog_stats(State(state): State<AppState>) -> AppResult<Json<BlogStatsDto>> {
    let stats = state.blog_service.stats().await?;
    Ok(Json(stats.into()))
}

#[utoipa::path(
    get,
    path = "/api/blogs/{id}",
    tag = "blogs",
    params(
        ("id" = i64, Path, description = "Blog id")
    ),
    responses(
        (status = 200, description = "Blog found", body = BlogDto),
        (status = 400, description = "Malformatted id"),
        (status = 404, description = "Blog not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BlogDto>> {
    let id = parse_post_id(&id)?;
    let post = state.blog_service.get_post(id).await?;
    Ok(Json(post.into()))
}

#[utoipa::path(
    post,
    path = "/api/blogs",
    tag = "blogs",
    security(
        ("bearer_auth" = [])
    ),
    request_body = CreateBlogDto,
    responses(
        (status = 201, description = "Blog created", body = BlogDto),
        (status = 400, description = "Title and URL are required"),
        (status = 401, description = "Token missing, invalid or expired"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn create_blog(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    AppJson(dto): AppJson<CreateBlogDto>,
) -> AppResult<(StatusCode, Json<BlogDto>)> {
    dto.validate()?;
    let req = CreatePostRequest {
        title: dto.title,
        author: dto.author,
        url: dto.url,
        likes: dto.likes,
    };

    let post = state.blog_service.create_post(auth.user.id, req).await?;
    Ok((StatusCode::CREATED, Json(post.into())))
}

#[utoipa::path(
    put,
    path = "/api/blogs/{id}",
    tag = "blogs",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = i64, Path, description = "Blog id")
    ),
    request_body = UpdateLikesDto,
    responses(
        (status = 200, description = "Likes updated", body = BlogDto),
        (status = 400, description = "Malformatted id or validation error"),
        (status = 401, description = "Token missing, invalid or expired"),
        (status = 403, description = "Permission denied"),
        (status = 404, description = "Blog not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn update_blog(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateLikesDto>,
) -> AppResult<Json<BlogDto>> {
    let id = parse_post_id(&id)?;
    dto.validate()?;

    let post = state
        .blog_service
        .update_likes(auth.user.id, id, UpdateLikesRequest { likes: dto.likes })
        .await?;
    Ok(Json(post.into()))
}

#[utoipa::path(
    delete,
    path = "/api/blogs/{id}",
    tag = "blogs",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = i64, Path, description = "Blog id")
    ),
    responses(
        (status = 204, description = "Blog deleted"),
        (status = 400, description = "Malformatted id"),
        (status = 401, description = "Token missing, invalid or expired"),
        (status = 403, description = "Permission denied"),
        (status = 404, description = "Blog not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn delete_blog(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_post_id(&id)?;
    state.blog_service.delete_post(auth.user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
