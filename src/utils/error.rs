use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::database::StoreError;
use crate::models::ErrorResponse;

/// Resultado tipado dos handlers: cada variante vira um status HTTP
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    DuplicateEmail(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Error interno del servidor.")]
    Internal(String),
}

impl AppError {
    pub fn missing_fields() -> Self {
        AppError::Validation("El nombre y el correo son obligatorios.".to_string())
    }

    pub fn user_not_found() -> Self {
        AppError::NotFound("Usuario no encontrado.".to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => AppError::user_not_found(),
            StoreError::DuplicateEmail(_) => {
                AppError::DuplicateEmail("El correo ya está registrado.".to_string())
            }
            StoreError::Poisoned => AppError::Internal(err.to_string()),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::DuplicateEmail(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::Internal(detail) => Some(detail.clone()),
            _ => None,
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            message: self.to_string(),
            error,
        })
    }
}
