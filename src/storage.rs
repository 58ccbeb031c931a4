//! MySQL storage for todo items.
//!
//! One pool, opened at startup and shared by every request. Three
//! statements, all parameterized — user input never reaches the SQL text.
//!
//! Expected schema (pre-existing; sphere runs no migrations):
//!
//! ```sql
//! CREATE TABLE todos (
//!     id         BIGINT AUTO_INCREMENT PRIMARY KEY,
//!     title      TEXT NOT NULL,
//!     created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
//! );
//! ```

use serde::Serialize;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use crate::error::Result;

/// Ceiling on pooled connections kept open under load.
const MAX_CONNECTIONS: u32 = 100;

/// One row of the `todos` table.
///
/// `created_at` stays in the database; it exists only to order the list
/// and is never selected.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Todo {
    pub id: i64,
    pub title: String,
}

/// Handle on the todo table. Cheap to clone; clones share the pool.
#[derive(Clone)]
pub struct Storage {
    pool: MySqlPool,
}

impl Storage {
    /// Opens the pool. Called once at startup, where an unreachable
    /// database is fatal.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(url)
            .await?;
        Ok(Self { pool })
    }

    /// Every todo, newest first.
    pub async fn list_all(&self) -> Result<Vec<Todo>> {
        let todos =
            sqlx::query_as::<_, Todo>("SELECT id, title FROM todos ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(todos)
    }

    /// Inserts one todo. `id` and `created_at` are assigned by the table.
    pub async fn insert(&self, title: &str) -> Result<()> {
        sqlx::query("INSERT INTO todos (title) VALUES (?)")
            .bind(title)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Deletes every row. Idempotent.
    pub async fn clear_all(&self) -> Result<()> {
        sqlx::query("DELETE FROM todos").execute(&self.pool).await?;
        Ok(())
    }
}
