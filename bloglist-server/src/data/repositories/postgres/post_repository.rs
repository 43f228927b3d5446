use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::data::post_repository::{NewPost, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostOwner, PostWithOwner};

#[derive(Debug, Clone)]
pub(crate) struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct PostRow {
    id: i64,
    title: String,
    author: Option<String>,
    url: String,
    likes: i64,
    user_id: i64,
}

#[derive(FromRow)]
struct PostWithOwnerRow {
    #[sqlx(flatten)]
    post: PostRow,
    owner_username: String,
    owner_name: String,
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO blogs (title, author, url, likes, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, author, url, likes, user_id
            "#,
        )
        .bind(input.title)
        .bind(input.author)
        .bind(input.url)
        .bind(input.likes)
        .bind(input.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        Ok(map_row_to_post(row))
    }

    async fn get_post(&self, id: i64) -> Result<Option<Post>, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, author, url, likes, user_id
            FROM blogs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        Ok(row.map(map_row_to_post))
    }

    async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, author, url, likes, user_id
            FROM blogs
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        Ok(rows.into_iter().map(map_row_to_post).collect())
    }

    async fn list_posts_with_owner(&self) -> Result<Vec<PostWithOwner>, DomainError> {
        let rows = sqlx::query_as::<_, PostWithOwnerRow>(
            r#"
            SELECT
                b.id,
                b.title,
                b.author,
                b.url,
                b.likes,
                b.user_id,
                u.username AS owner_username,
                u.name AS owner_name
            FROM blogs b
            JOIN users u ON u.id = b.user_id
            ORDER BY b.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let owner = PostOwner {
                    id: row.post.user_id,
                    username: row.owner_username,
                    name: row.owner_name,
                };
                PostWithOwner {
                    post: map_row_to_post(row.post),
                    owner,
                }
            })
            .collect())
    }

    async fn update_likes_owned(
        &self,
        post_id: i64,
        owner_id: i64,
        likes: i64,
    ) -> Result<Option<Post>, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE blogs
            SET likes = $3
            WHERE id = $1 AND user_id = $2
            RETURNING id, title, author, url, likes, user_id
            "#,
        )
        .bind(post_id)
        .bind(owner_id)
        .bind(likes)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        Ok(row.map(map_row_to_post))
    }

    async fn delete_post_owned(&self, post_id: i64, owner_id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM blogs
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(post_id)
        .bind(owner_id)
        .execute(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_row_to_post(row: PostRow) -> Post {
    Post {
        id: row.id,
        title: row.title,
        author: row.author,
        url: row.url,
        likes: row.likes,
        user_id: row.user_id,
    }
}

fn map_post_db_error(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.code().as_deref() == Some("23503")
    {
        return DomainError::NotFound("User");
    }
    DomainError::Unexpected(err.to_string())
}
