use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("username rejected by profile: {0}")]
    UserProfile(String),
    #[error("invalid domain: {0}")]
    DomainFormat(String),
}

impl NormalizeError {
    pub fn is_user(&self) -> bool {
        matches!(self, NormalizeError::UserProfile(_))
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, NormalizeError::DomainFormat(_))
    }
}
