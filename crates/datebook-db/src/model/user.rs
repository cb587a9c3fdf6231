/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    /// Argon2 PHC string, never the plaintext password
    pub password_hash: String,
}
