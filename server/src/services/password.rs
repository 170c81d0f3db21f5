//! Password hashing with bcrypt.
//!
//! Hashes are stored in the standard modular crypt form (`$2b$<cost>$...`),
//! so the cost travels with the hash and can be raised without invalidating
//! existing rows.

pub(crate) const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

/// Hash a password at the default cost with a fresh random salt.
///
/// # Errors
///
/// Returns an error if bcrypt rejects the input.
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash_with_cost(password, DEFAULT_COST)
}

pub(crate) fn hash_with_cost(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, cost)
}

/// Check a password against a stored hash. Unreadable hashes never verify.
#[must_use]
pub fn verify_password(password: &str, stored: &str) -> bool {
    match bcrypt::verify(password, stored) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!(error = %e, "stored password hash is unreadable");
            false
        }
    }
}

#[cfg(test)]
#[path = "password_test.rs"]
mod tests;
