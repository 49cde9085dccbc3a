use crate::domain::DomainError;

/// Single-admin login check. Password and session internals stay out of
/// the controllers; handlers only learn whether the attempt succeeded.
pub struct AuthService {
    admin_password: String,
}

impl AuthService {
    pub fn new(admin_password: String) -> Self {
        Self { admin_password }
    }

    pub fn login(&self, password: &str) -> Result<(), DomainError> {
        if password == self.admin_password {
            Ok(())
        } else {
            tracing::warn!("Login attempt with wrong password");
            Err(DomainError::InvalidCredentials)
        }
    }
}
