use chrono::Utc;
use sea_orm::{QueryFilter, TransactionTrait, prelude::*};

use crate::{EngineError, ResultEngine, User, UserNew, users, users::password_digest};

use super::{Engine, with_tx};

impl Engine {
    /// Register a user. No duplicate check on username or email.
    pub async fn register_user(&self, new: UserNew) -> ResultEngine<User> {
        let user = User::new(new, Utc::now());

        with_tx!(self, |db_tx| {
            users::ActiveModel::from(&user).insert(&db_tx).await?;
            Ok(user)
        })
    }

    /// Verify credentials by exact `(username, digest)` match.
    pub async fn verify_credentials(&self, username: &str, password: &str) -> ResultEngine<User> {
        let digest = password_digest(password);

        users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .filter(users::Column::PasswordDigest.eq(digest))
            .one(&self.database)
            .await?
            .map(User::from)
            .ok_or(EngineError::InvalidCredentials)
    }
}
