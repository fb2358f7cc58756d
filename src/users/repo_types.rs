use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    #[sqlx(rename = "userid")]
    pub id: i64,         // assigned by the database
    pub name: String,
    pub kmmax: i64,      // maximum distance in km
    pub niveau: String,  // level label
}
