//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entity::{Author, CommentWithAuthor, NewPost, Post, PostPatch, PostWithAuthor};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::error::BlogResult;

/// PostgreSQL-backed blog repository
#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgBlogRepository {
    async fn find_page(
        &self,
        page: i64,
        limit: i64,
        search: &str,
        viewer: Option<i64>,
    ) -> BlogResult<Vec<PostWithAuthor>> {
        let offset = (page - 1) * limit;

        // Two statements rather than one: the viewer branch compares
        // author_id against the caller, the anonymous branch has no caller
        // to compare against.
        let rows = match viewer {
            Some(viewer_id) => {
                sqlx::query_as::<_, PostWithAuthorRow>(
                    r#"
                    SELECT p.id, p.title, p.content, p.published,
                           p.created_at, p.updated_at,
                           u.id AS author_id, u.name AS author_name,
                           u.email AS author_email
                    FROM posts p
                    LEFT JOIN users u ON u.id = p.author_id
                    WHERE ($1 = '' OR p.title LIKE '%' || $1 || '%')
                      AND ((p.author_id <> $2 AND p.published = TRUE)
                           OR p.author_id = $2)
                    ORDER BY p.created_at DESC
                    LIMIT $3 OFFSET $4
                    "#,
                )
                .bind(search)
                .bind(viewer_id)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, PostWithAuthorRow>(
                    r#"
                    SELECT p.id, p.title, p.content, p.published,
                           p.created_at, p.updated_at,
                           u.id AS author_id, u.name AS author_name,
                           u.email AS author_email
                    FROM posts p
                    LEFT JOIN users u ON u.id = p.author_id
                    WHERE ($1 = '' OR p.title LIKE '%' || $1 || '%')
                      AND p.published = TRUE
                    ORDER BY p.created_at DESC
                    LIMIT $2 OFFSET $3
                    "#,
                )
                .bind(search)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows.into_iter().map(PostWithAuthorRow::into_post).collect())
    }

    async fn count_matching(&self, search: &str) -> BlogResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM posts WHERE ($1 = '' OR title LIKE '%' || $1 || '%')",
        )
        .bind(search)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn find_by_id(&self, id: i64) -> BlogResult<Option<PostWithAuthor>> {
        let row = sqlx::query_as::<_, PostWithAuthorRow>(
            r#"
            SELECT p.id, p.title, p.content, p.published,
                   p.created_at, p.updated_at,
                   u.id AS author_id, u.name AS author_name,
                   u.email AS author_email
            FROM posts p
            LEFT JOIN users u ON u.id = p.author_id
            WHERE p.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostWithAuthorRow::into_post))
    }

    async fn create(&self, post: &NewPost) -> BlogResult<Option<Post>> {
        let now = Utc::now();

        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (title, content, published, author_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, content, published, author_id, created_at, updated_at
            "#,
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.published)
        .bind(post.author_id)
        .bind(now)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn update(
        &self,
        id: i64,
        author_id: i64,
        patch: &PostPatch,
    ) -> BlogResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE posts
            SET title = COALESCE($3, title),
                content = COALESCE($4, content),
                published = COALESCE($5, published),
                updated_at = $6
            WHERE id = $1 AND author_id = $2
            RETURNING id, title, content, published, author_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(author_id)
        .bind(&patch.title)
        .bind(&patch.content)
        .bind(patch.published)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn delete(&self, id: i64, author_id: i64) -> BlogResult<bool> {
        let deleted = sqlx::query("DELETE FROM posts WHERE id = $1 AND author_id = $2")
            .bind(id)
            .bind(author_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Comment Repository Implementation
// ============================================================================

impl CommentRepository for PgBlogRepository {
    async fn find_by_post_id(&self, post_id: i64) -> BlogResult<Vec<CommentWithAuthor>> {
        let rows = sqlx::query_as::<_, CommentWithAuthorRow>(
            r#"
            SELECT c.id, c.content, c.created_at, c.updated_at,
                   u.id AS author_id, u.name AS author_name,
                   u.email AS author_email
            FROM comments c
            LEFT JOIN users u ON u.id = c.author_id
            WHERE c.post_id = $1
            ORDER BY c.created_at ASC
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(CommentWithAuthorRow::into_comment)
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> BlogResult<Option<CommentWithAuthor>> {
        let row = sqlx::query_as::<_, CommentWithAuthorRow>(
            r#"
            SELECT c.id, c.content, c.created_at, c.updated_at,
                   u.id AS author_id, u.name AS author_name,
                   u.email AS author_email
            FROM comments c
            LEFT JOIN users u ON u.id = c.author_id
            WHERE c.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CommentWithAuthorRow::into_comment))
    }

    async fn create(
        &self,
        content: &str,
        post_id: i64,
        author_id: i64,
    ) -> BlogResult<Option<CommentWithAuthor>> {
        let now = Utc::now();

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO comments (content, post_id, author_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(content)
        .bind(post_id)
        .bind(author_id)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        // Re-read so the response carries the joined author
        CommentRepository::find_by_id(self, id).await
    }

    async fn delete(&self, id: i64) -> BlogResult<()> {
        sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    published: bool,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            id: self.id,
            title: self.title,
            content: self.content,
            published: self.published,
            author_id: self.author_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostWithAuthorRow {
    id: i64,
    title: String,
    content: String,
    published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_id: Option<i64>,
    author_name: Option<String>,
    author_email: Option<String>,
}

impl PostWithAuthorRow {
    fn into_post(self) -> PostWithAuthor {
        PostWithAuthor {
            id: self.id,
            title: self.title,
            content: self.content,
            published: self.published,
            created_at: self.created_at,
            updated_at: self.updated_at,
            author: join_author(self.author_id, self.author_name, self.author_email),
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentWithAuthorRow {
    id: i64,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_id: Option<i64>,
    author_name: Option<String>,
    author_email: Option<String>,
}

impl CommentWithAuthorRow {
    fn into_comment(self) -> CommentWithAuthor {
        CommentWithAuthor {
            id: self.id,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
            author: join_author(self.author_id, self.author_name, self.author_email),
        }
    }
}

fn join_author(id: Option<i64>, name: Option<String>, email: Option<String>) -> Option<Author> {
    match (id, name, email) {
        (Some(id), Some(name), Some(email)) => Some(Author { id, name, email }),
        _ => None,
    }
}
