//! Users table and credential digest.
//!
//! Passwords are stored as an unsalted single-pass SHA-256 hex digest.
//! Usernames and emails carry no uniqueness constraint.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Hex-encoded SHA-256 of the password bytes.
pub fn password_digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_digest: String,
    pub created_at: DateTime<Utc>,
}

/// Input for registering a user. The plaintext password never leaves this
/// struct: `User::new` digests it.
#[derive(Clone, Debug)]
pub struct UserNew {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl User {
    pub fn new(new: UserNew, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username: new.username,
            email: new.email,
            password_digest: password_digest(&new.password),
            created_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_digest: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&User> for ActiveModel {
    fn from(user: &User) -> Self {
        Self {
            id: ActiveValue::Set(user.id.clone()),
            username: ActiveValue::Set(user.username.clone()),
            email: ActiveValue::Set(user.email.clone()),
            password_digest: ActiveValue::Set(user.password_digest.clone()),
            created_at: ActiveValue::Set(user.created_at),
        }
    }
}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
            password_digest: model.password_digest,
            created_at: model.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_hex_sha256() {
        // sha256("password")
        assert_eq!(
            password_digest("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }

    #[test]
    fn new_user_never_stores_plaintext() {
        let user = User::new(
            UserNew {
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
                password: "s3cret".to_string(),
            },
            Utc::now(),
        );

        assert_ne!(user.password_digest, "s3cret");
        assert!(!user.password_digest.contains("s3cret"));
        assert_eq!(user.password_digest, password_digest("s3cret"));
    }
}
