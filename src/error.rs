use actix_web::{ResponseError, http::StatusCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Bad Request: missing form field '{0}'")]
    MissingField(&'static str),
}

impl ResponseError for RegistrationError {
    fn status_code(&self) -> StatusCode {
        match self {
            RegistrationError::MissingField(_) => StatusCode::BAD_REQUEST,
        }
    }
}
