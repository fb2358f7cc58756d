//! In-memory `UserRepository` used by the router tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use axum::async_trait;

use super::{
    dto::UserPayload,
    repo::{UserError, UserRepository},
    repo_types::User,
};

#[derive(Default)]
pub struct InMemoryUsers {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, User>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create(&self, user: &UserPayload) -> Result<i64, UserError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.rows.insert(
            id,
            User {
                id,
                name: user.name.clone(),
                kmmax: user.kmmax,
                niveau: user.niveau.clone(),
            },
        );
        Ok(id)
    }

    async fn get(&self, id: i64) -> Result<User, UserError> {
        self.inner
            .lock()
            .unwrap()
            .rows
            .get(&id)
            .cloned()
            .ok_or(UserError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<User>, UserError> {
        Ok(self.inner.lock().unwrap().rows.values().cloned().collect())
    }

    async fn update(&self, id: i64, user: &UserPayload) -> Result<u64, UserError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.rows.get_mut(&id) {
            Some(row) => {
                row.name = user.name.clone();
                row.kmmax = user.kmmax;
                row.niveau = user.niveau.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, UserError> {
        Ok(self.inner.lock().unwrap().rows.remove(&id).map_or(0, |_| 1))
    }
}

/// Fails every call the way a dropped database connection would.
pub struct BrokenUsers;

#[async_trait]
impl UserRepository for BrokenUsers {
    async fn create(&self, _user: &UserPayload) -> Result<i64, UserError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
    async fn get(&self, _id: i64) -> Result<User, UserError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
    async fn list(&self) -> Result<Vec<User>, UserError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
    async fn update(&self, _id: i64, _user: &UserPayload) -> Result<u64, UserError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
    async fn delete(&self, _id: i64) -> Result<u64, UserError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}
