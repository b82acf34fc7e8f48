use actix_web::{http::StatusCode, HttpResponse};
use db::utils::errors::ErrorCode::ValidationError;
use db::utils::errors::*;
use diesel::result::Error as DieselError;
use std::error::Error;
use std::fmt::Debug;
use std::string::ToString;

pub trait ConvertToWebError: Debug + Error + ToString {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
    fn to_response(&self) -> HttpResponse;
}

fn internal_error(message: &str) -> HttpResponse {
    status_code_and_message(StatusCode::INTERNAL_SERVER_ERROR, message)
}

fn status_code_and_message(code: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(code).json(json!({"success": false, "error": message.to_string()}))
}

impl ConvertToWebError for DieselError {
    fn to_response(&self) -> HttpResponse {
        error!("Diesel error: {}", self);
        internal_error("Internal error")
    }
}

impl ConvertToWebError for r2d2::Error {
    fn to_response(&self) -> HttpResponse {
        error!("R2D2 error: {}", self);
        internal_error("Internal error")
    }
}

impl ConvertToWebError for DatabaseError {
    fn status_code(&self) -> StatusCode {
        match self.code {
            1000 | 1100 | 7300 => StatusCode::BAD_REQUEST,
            2000 => StatusCode::NOT_FOUND,
            3400 => StatusCode::CONFLICT,
            7200 => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
    fn to_response(&self) -> HttpResponse {
        warn!("Database error: {}", self);
        let message = match self.code {
            1000 => "Invalid input",
            1100 => "Missing input",
            2000 => "Not found",
            3000 => "Query error",
            3100 => "Could not insert record",
            3200 => "Could not update record",
            3300 => "Could not delete record",
            3400 => self
                .cause
                .as_ref()
                .map(|s| s.as_str())
                .unwrap_or("Duplicate record exists"),
            4000 => "Connection error",
            7200 => match &self.error_code {
                ValidationError { errors } => {
                    return HttpResponse::BadRequest().json(json!({
                        "success": false,
                        "error": "Validation error".to_string(),
                        "fields": errors
                    }));
                }
                _ => "Validation error",
            },
            7300 => "Invalid reference to another record",
            5000 => "Internal error",
            _ => "Unknown error",
        };
        status_code_and_message(self.status_code(), message)
    }
}
