use axum::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use tracing::debug;

use crate::users::{dto::UserPayload, repo_types::User};

#[derive(Debug, Error)]
pub enum UserError {
    #[error("user {0} not found")]
    NotFound(i64),

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

/// Persistence for user records. Every method runs exactly one statement.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the id assigned by storage.
    async fn create(&self, user: &UserPayload) -> Result<i64, UserError>;
    async fn get(&self, id: i64) -> Result<User, UserError>;
    /// All users in storage order.
    async fn list(&self) -> Result<Vec<User>, UserError>;
    /// Returns rows affected; 0 when `id` does not exist.
    async fn update(&self, id: i64, user: &UserPayload) -> Result<u64, UserError>;
    /// Returns rows affected; 0 when `id` does not exist.
    async fn delete(&self, id: i64) -> Result<u64, UserError>;
}

#[derive(Clone)]
pub struct PgUserRepository {
    db: PgPool,
}

impl PgUserRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: &UserPayload) -> Result<i64, UserError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (name, kmmax, niveau)
            VALUES ($1, $2, $3)
            RETURNING userid
            "#,
        )
        .bind(&user.name)
        .bind(user.kmmax)
        .bind(&user.niveau)
        .fetch_one(&self.db)
        .await?;
        debug!(user_id = id, "inserted user");
        Ok(id)
    }

    async fn get(&self, id: i64) -> Result<User, UserError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT userid, name, kmmax, niveau
            FROM users
            WHERE userid = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(UserError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<User>, UserError> {
        let rows = sqlx::query_as::<_, User>(r#"SELECT userid, name, kmmax, niveau FROM users"#)
            .fetch_all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn update(&self, id: i64, user: &UserPayload) -> Result<u64, UserError> {
        let rows = sqlx::query(
            r#"
            UPDATE users
               SET name = $2, niveau = $3, kmmax = $4
             WHERE userid = $1
            "#,
        )
        .bind(id)
        .bind(&user.name)
        .bind(&user.niveau)
        .bind(user.kmmax)
        .execute(&self.db)
        .await?
        .rows_affected();
        debug!(user_id = id, rows, "updated user");
        Ok(rows)
    }

    async fn delete(&self, id: i64) -> Result<u64, UserError> {
        let rows = sqlx::query(r#"DELETE FROM users WHERE userid = $1"#)
            .bind(id)
            .execute(&self.db)
            .await?
            .rows_affected();
        debug!(user_id = id, rows, "deleted user");
        Ok(rows)
    }
}
