use serde::{Deserialize, Serialize};

/// The authenticated user a session belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub email: Option<String>,
}

/// An authenticated session issued by the hosted backend.
///
/// Opaque to the sync core except for `user.id`, which is the sole
/// sharding key for all bookmark reads and subscriptions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub user: User,
    pub access_token: String,
    pub expires_at: i64,
}
