use thiserror::Error;

use crate::common::validation::FormErrors;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Form validation failed")]
    Validation(FormErrors),

    #[error("Invalid or expired session")]
    InvalidSession,

    #[error("Identity provider error: {0}")]
    Provider(#[from] anyhow::Error),
}
