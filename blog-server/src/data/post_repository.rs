use crate::domain::post::{CreatePostRequest, UpdatePostRequest};
use crate::domain::{DomainError, Post};
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

/// Storage boundary for posts. Handlers never touch the pool directly;
/// they get a store injected, which also lets tests swap in
/// [`super::memory_repository::MemoryPostRepository`].
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, req: CreatePostRequest) -> Result<Post, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Post, DomainError>;
    async fn update(&self, id: i64, req: UpdatePostRequest) -> Result<Post, DomainError>;
    /// Deletes without an existence check; removing an absent id is not an
    /// error.
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
    /// Returns one page sorted by id descending, plus the total number of
    /// posts matching the tag filter.
    async fn list(
        &self,
        limit: i64,
        offset: i64,
        tag: Option<&str>,
    ) -> Result<(Vec<Post>, i64), DomainError>;
}

pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn post_from_row(row: PgRow) -> Result<Post, DomainError> {
    Ok(Post {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        body: row.try_get("body")?,
        tags: row.try_get("tags")?,
    })
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, req: CreatePostRequest) -> Result<Post, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO posts (title, body, tags)
            VALUES ($1, $2, $3)
            RETURNING id, title, body, tags
            "#,
        )
        .bind(&req.title)
        .bind(&req.body)
        .bind(&req.tags)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create post: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        post_from_row(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Post, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, body, tags
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        match row {
            Some(row) => post_from_row(row),
            None => Err(DomainError::PostNotFound),
        }
    }

    async fn update(&self, id: i64, req: UpdatePostRequest) -> Result<Post, DomainError> {
        let row = sqlx::query(
            r#"
            UPDATE posts
            SET
                title = COALESCE($1, title),
                body = COALESCE($2, body),
                tags = COALESCE($3, tags)
            WHERE id = $4
            RETURNING id, title, body, tags
            "#,
        )
        .bind(req.title)
        .bind(req.body)
        .bind(req.tags)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        match row {
            Some(row) => post_from_row(row),
            None => Err(DomainError::PostNotFound),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            tracing::debug!("Delete for absent post id={}", id);
        }

        Ok(())
    }

    async fn list(
        &self,
        limit: i64,
        offset: i64,
        tag: Option<&str>,
    ) -> Result<(Vec<Post>, i64), DomainError> {
        let (rows, count_row) = match tag {
            Some(tag) => {
                let rows = sqlx::query(
                    r#"
                    SELECT id, title, body, tags
                    FROM posts
                    WHERE $1 = ANY(tags)
                    ORDER BY id DESC
                    LIMIT $2 OFFSET $3
                    "#,
                )
                .bind(tag)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

                let count_row =
                    sqlx::query("SELECT COUNT(*) as count FROM posts WHERE $1 = ANY(tags)")
                        .bind(tag)
                        .fetch_one(&self.pool)
                        .await
                        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

                (rows, count_row)
            }
            None => {
                let rows = sqlx::query(
                    r#"
                    SELECT id, title, body, tags
                    FROM posts
                    ORDER BY id DESC
                    LIMIT $1 OFFSET $2
                    "#,
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

                let count_row = sqlx::query("SELECT COUNT(*) as count FROM posts")
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

                (rows, count_row)
            }
        };

        let total: i64 = count_row.try_get("count")?;

        let posts = rows
            .into_iter()
            .map(post_from_row)
            .collect::<Result<Vec<Post>, DomainError>>()?;

        Ok((posts, total))
    }
}
