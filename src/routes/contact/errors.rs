use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use super::super::helpers::{ApiResponse, error_chain_fmt};

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Sorry, there was an error sending your message. Please try again later.")]
    SendError(#[source] reqwest::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::SendError(_) | ContactError::UnexpectedError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        // The underlying cause never reaches the client.
        let message = match self {
            ContactError::ValidationError(_) | ContactError::SendError(_) => self.to_string(),
            ContactError::UnexpectedError(_) => "Internal server error.".to_string(),
        };
        HttpResponse::build(self.status_code()).json(ApiResponse::failure(message))
    }
}
