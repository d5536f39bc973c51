use std::process::{ExitCode, Termination};

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::Report;
use serde_json::json;

use kernel::KernelError;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

impl From<JsonRejection> for ErrorStatus {
    fn from(rejection: JsonRejection) -> Self {
        ErrorStatus(Report::new(KernelError::validation(rejection.body_text())))
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let context = self.0.current_context();
        let status = match context {
            KernelError::Validation { .. }
            | KernelError::UnknownCustomer { .. }
            | KernelError::UnknownBook { .. } => StatusCode::BAD_REQUEST,
            KernelError::InsufficientStock { .. } => StatusCode::CONFLICT,
            KernelError::Timeout | KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!("{:?}", self.0);
        }
        (status, Json(json!({ "error": context.to_string() }))).into_response()
    }
}

pub fn not_found(what: impl std::fmt::Display) -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("{what} not found") })),
    )
        .into_response()
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use error_stack::Report;

    use kernel::KernelError;

    use super::ErrorStatus;

    #[test]
    fn maps_each_kind_to_its_status() {
        let cases = [
            (KernelError::validation("bad"), StatusCode::BAD_REQUEST),
            (
                KernelError::UnknownCustomer {
                    customer_id: "C999".to_string(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                KernelError::UnknownBook {
                    isbn: "1".to_string(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                KernelError::InsufficientStock {
                    isbn: "1".to_string(),
                },
                StatusCode::CONFLICT,
            ),
            (KernelError::Timeout, StatusCode::INTERNAL_SERVER_ERROR),
            (KernelError::Internal, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (error, status) in cases {
            let response = ErrorStatus::from(Report::new(error)).into_response();
            assert_eq!(response.status(), status);
        }
    }
}
