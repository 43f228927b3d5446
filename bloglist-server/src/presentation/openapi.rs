use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::presentation::http::handlers::blogs::{
    AuthorBlogsDto, AuthorLikesDto, BlogDto, BlogOwnerDto, BlogStatsDto, BlogWithOwnerDto,
    CreateBlogDto, FavoriteBlogDto, UpdateLikesDto,
};
use crate::presentation::http::handlers::login::{LoginDto, LoginResponseDto};
use crate::presentation::http::handlers::users::{RegisterDto, UserBlogDto, UserDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::handlers::blogs::list_blogs,
        crate::presentation::http::handlers::blogs::blog_stats,
        crate::presentation::http::handlers::blogs::get_blog,
        crate::presentation::http::handlers::blogs::create_blog,
        crate::presentation::http::handlers::blogs::update_blog,
        crate::presentation::http::handlers::blogs::delete_blog,
        crate::presentation::http::handlers::users::create_user,
        crate::presentation::http::handlers::users::list_users,
        crate::presentation::http::handlers::login::login
    ),
    components(
        schemas(
            CreateBlogDto,
            UpdateLikesDto,
            BlogDto,
            BlogOwnerDto,
            BlogWithOwnerDto,
            BlogStatsDto,
            FavoriteBlogDto,
            AuthorBlogsDto,
            AuthorLikesDto,
            RegisterDto,
            UserDto,
            UserBlogDto,
            LoginDto,
            LoginResponseDto
        )
    ),
    tags(
        (name = "blogs", description = "Blog endpoints"),
        (name = "users", description = "User registration and listing"),
        (name = "login", description = "Token login")
    ),
    modifiers(&SecurityAddon)
)]
pub(crate) struct ApiDoc;

/// Tokens are sent as `Authorization: bearer <jwt>`.
pub(crate) struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let mut components = openapi.components.take().unwrap_or_default();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
        openapi.components = Some(components);
    }
}
