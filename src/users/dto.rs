use serde::{Deserialize, Serialize};

/// Request body for create and update. An `id` in the body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub kmmax: i64,
    pub niveau: String,
}

/// Response returned by create, update and delete.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub message: String,
}

impl UserResponse {
    pub fn created(id: i64) -> Self {
        Self {
            id,
            message: "User created successfully".into(),
        }
    }

    pub fn updated(id: i64, rows: u64) -> Self {
        Self {
            id,
            message: format!("User updated successfully. Total rows/records affected {rows}"),
        }
    }

    pub fn deleted(id: i64, rows: u64) -> Self {
        Self {
            id,
            message: format!("User deleted successfully. Total rows/records affected {rows}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_ignores_id_field() {
        let p: UserPayload =
            serde_json::from_str(r#"{"id":99,"name":"Alice","kmmax":10,"niveau":"Bronze"}"#)
                .expect("decode");
        assert_eq!(p.name, "Alice");
        assert_eq!(p.kmmax, 10);
        assert_eq!(p.niveau, "Bronze");
    }

    #[test]
    fn payload_requires_all_fields() {
        let res = serde_json::from_str::<UserPayload>(r#"{"name":"Alice"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn delete_message_says_deleted() {
        let r = UserResponse::deleted(4, 1);
        assert_eq!(r.id, 4);
        assert!(r.message.starts_with("User deleted"));
        assert!(r.message.ends_with(" 1"));
    }
}
