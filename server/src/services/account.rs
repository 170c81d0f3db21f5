//! User accounts: registration and username/password login.

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::password::{hash_password, verify_password};

/// Column list for [`UserRecord::from_row`]. Queries alias `users` as `u`.
pub(crate) const USER_COLUMNS: &str = r#"u.id, u.name, u.email, u.username,
    to_char(u.created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at"#;

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("name, username and password are required")]
    MissingFields,
    #[error("email or username already exists")]
    Duplicate,
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Public view of a user row. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub username: String,
    /// RFC 3339 UTC timestamp.
    pub created_at: String,
}

impl UserRecord {
    pub(crate) fn from_row(row: &PgRow) -> Self {
        Self {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
            username: row.get("username"),
            created_at: row.get("created_at"),
        }
    }
}

/// Registration input, as posted by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

impl NewUser {
    /// Trim fields and normalize the email.
    ///
    /// # Errors
    ///
    /// [`AccountError::InvalidEmail`] or [`AccountError::MissingFields`].
    pub fn normalized(&self) -> Result<Self, AccountError> {
        let email = normalize_email(&self.email).ok_or(AccountError::InvalidEmail)?;
        let name = self.name.trim();
        let username = self.username.trim();
        if name.is_empty() || username.is_empty() || self.password.is_empty() {
            return Err(AccountError::MissingFields);
        }
        Ok(Self { name: name.to_owned(), email, username: username.to_owned(), password: self.password.clone() })
    }
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') || normalized.contains(char::is_whitespace) {
        return None;
    }
    Some(normalized)
}

/// Create an account.
///
/// # Errors
///
/// Validation errors from [`NewUser::normalized`], [`AccountError::Duplicate`]
/// when the email or username is taken, or a database error.
pub async fn register(pool: &PgPool, input: &NewUser) -> Result<UserRecord, AccountError> {
    let user = input.normalized()?;

    let taken: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1 OR username = $2)")
        .bind(&user.email)
        .bind(&user.username)
        .fetch_one(pool)
        .await?;
    if taken {
        return Err(AccountError::Duplicate);
    }

    let password = user.password.clone();
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AccountError::Hash(e.to_string()))?
        .map_err(|e| AccountError::Hash(e.to_string()))?;

    let sql = format!(
        "INSERT INTO users AS u (id, name, email, username, password_hash) \
         VALUES ($1, $2, $3, $4, $5) RETURNING {USER_COLUMNS}"
    );
    let row = sqlx::query(&sql)
        .bind(Uuid::new_v4())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.username)
        .bind(password_hash)
        .fetch_one(pool)
        .await
        .map_err(|e| match e {
            // Lost a race with a concurrent registration.
            sqlx::Error::Database(db) if db.is_unique_violation() => AccountError::Duplicate,
            other => AccountError::Db(other),
        })?;

    let record = UserRecord::from_row(&row);
    tracing::info!(user_id = %record.id, username = %record.username, "account registered");
    Ok(record)
}

/// Check a username/password pair.
///
/// # Errors
///
/// [`AccountError::InvalidCredentials`] for an unknown user or wrong password,
/// or a database error.
pub async fn login(pool: &PgPool, username: &str, password: &str) -> Result<UserRecord, AccountError> {
    let sql = format!("SELECT {USER_COLUMNS}, u.password_hash FROM users u WHERE u.username = $1");
    let row = sqlx::query(&sql)
        .bind(username.trim())
        .fetch_optional(pool)
        .await?
        .ok_or(AccountError::InvalidCredentials)?;

    let stored: String = row.get("password_hash");
    let password = password.to_owned();
    let verified = tokio::task::spawn_blocking(move || verify_password(&password, &stored))
        .await
        .map_err(|e| AccountError::Hash(e.to_string()))?;
    if !verified {
        return Err(AccountError::InvalidCredentials);
    }
    Ok(UserRecord::from_row(&row))
}

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;
