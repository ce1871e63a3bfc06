use crate::entities::{prelude::*, users};
use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::env;
use tracing::{info, warn};
use uuid::Uuid;

/// Seeds the admin account from `ADMIN_USERNAME` / `ADMIN_PASSWORD`.
/// Skipped when the password is unset or the account already exists.
pub async fn seed_admin_user(db: &DatabaseConnection) -> anyhow::Result<()> {
    let username = env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
    let password = match env::var("ADMIN_PASSWORD") {
        Ok(p) if !p.is_empty() => p,
        _ => {
            warn!("⚠️  ADMIN_PASSWORD not set, skipping admin user seeding");
            return Ok(());
        }
    };

    let existing = Users::find()
        .filter(users::Column::Username.eq(&username))
        .one(db)
        .await?;
    if existing.is_some() {
        return Ok(());
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash admin password: {}", e))?
        .to_string();

    let user = users::ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(username.clone()),
        password_hash: Set(password_hash),
        created_at: Set(Utc::now()),
    };
    user.insert(db).await?;

    info!("🌱 Seeded admin user '{}'", username);
    Ok(())
}
