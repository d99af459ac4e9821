use serde::{Deserialize, Serialize};

/// User entity - owns posts, comments and likes
///
/// `password` is stored as given; hashing happens upstream. It is skipped by
/// serde so a `User` can never leak it through JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub is_active: bool,
}

/// Serialized user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub is_active: bool,
}

impl User {
    pub fn serialize(&self) -> UserResponse {
        UserResponse {
            id: self.id,
            email: self.email.clone(),
            is_active: self.is_active,
        }
    }
}

/// Insert payload for a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

impl NewUser {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            is_active: default_is_active(),
        }
    }
}

/// Partial update for a user; `None` leaves the column untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserChanges {
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 7,
            email: "ana@example.com".to_string(),
            password: "hunter2".to_string(),
            is_active: true,
        }
    }

    #[test]
    fn test_serialize_omits_password() {
        let value = serde_json::to_value(user().serialize()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 3);
        assert_eq!(object["id"], 7);
        assert_eq!(object["email"], "ana@example.com");
        assert_eq!(object["is_active"], true);
        assert!(!object.contains_key("password"));
    }

    #[test]
    fn test_row_serde_skips_password() {
        let json = serde_json::to_string(&user()).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("hunter2"));
    }

    #[test]
    fn test_password_never_serialized_for_any_content() {
        for password in ["", "password", "\"password\":\"x\"", "é漢字🔥"] {
            let mut u = user();
            u.password = password.to_string();
            let json = serde_json::to_string(&u.serialize()).unwrap();
            assert!(!json.contains("\"password\""), "leaked in {}", json);
        }
    }

    #[test]
    fn test_new_user_defaults_active() {
        let parsed: NewUser =
            serde_json::from_str(r#"{"email":"a@b.c","password":"pw"}"#).unwrap();
        assert!(parsed.is_active);
        assert!(NewUser::new("a@b.c", "pw").is_active);
    }
}
