use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::Key;
use anyhow::{bail, Result};

/// Builds the cookie signing key from the configured secret. `Key::from`
/// panics on short input, so the length is checked up front and surfaced
/// as a startup error instead.
pub fn signing_key(secret: &str) -> Result<Key> {
    if secret.len() < 64 {
        bail!("COOKIE_SIGN_KEY must be at least 64 bytes, got {}", secret.len());
    }
    Ok(Key::from(secret.as_bytes()))
}

pub fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("blog.sid".to_string())
        // Cookie sessions over plain http during local development.
        .cookie_secure(false)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_secrets_are_rejected() {
        assert!(signing_key("too-short").is_err());
    }

    #[test]
    fn long_secrets_build_a_key() {
        let secret = "s".repeat(64);
        assert!(signing_key(&secret).is_ok());
    }
}
