use crate::domain::DomainError;
use actix_session::Session;

/// Session key holding the authenticated flag.
pub const LOGGED_KEY: &str = "logged";

/// Login guard: write operations require an authenticated session.
pub fn require_login(session: &Session) -> Result<(), DomainError> {
    match session.get::<bool>(LOGGED_KEY) {
        Ok(Some(true)) => Ok(()),
        Ok(_) => Err(DomainError::Unauthorized),
        Err(e) => Err(DomainError::InternalError(format!(
            "session read failed: {}",
            e
        ))),
    }
}

/// Id-format guard: path identifiers must parse as a positive i64, the
/// shape the posts sequence actually produces. Anything else is malformed
/// input (400), distinct from a well-formed id that matches no post (404).
pub fn parse_post_id(raw: &str) -> Result<i64, DomainError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| DomainError::InvalidId(raw.to_string()))
}
