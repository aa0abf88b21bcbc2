use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use medstrat_core::error::MedstratError;

// ---------------------------------------------------------------------------
// AppError: unified error type for HTTP responses
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status(&self) -> StatusCode {
        if self.0.is::<JsonRejection>() {
            return StatusCode::BAD_REQUEST;
        }
        let Some(e) = self.0.downcast_ref::<MedstratError>() else {
            return StatusCode::INTERNAL_SERVER_ERROR;
        };
        match e {
            MedstratError::SessionNotFound(_) | MedstratError::ConfigNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            e if e.is_invalid_input() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        let message = match self.0.downcast_ref::<JsonRejection>() {
            Some(rejection) => rejection.body_text(),
            None => self.0.to_string(),
        };
        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: MedstratError) -> StatusCode {
        AppError(err.into()).into_response().status()
    }

    #[test]
    fn session_not_found_maps_to_404() {
        assert_eq!(
            status_of(MedstratError::SessionNotFound("abc".into())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn catalog_errors_map_to_400() {
        assert_eq!(
            status_of(MedstratError::UnknownSpecialty("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(MedstratError::InvalidRating(7)), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(MedstratError::UnknownStrategy("x".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn io_error_maps_to_500() {
        let io_err = std::io::Error::other("disk full");
        assert_eq!(
            status_of(MedstratError::Io(io_err)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn foreign_error_maps_to_500() {
        let response = AppError(anyhow::anyhow!("something unexpected")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn response_body_is_json() {
        let response = AppError(MedstratError::UnknownFocus("x".into()).into()).into_response();
        let ct = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .expect("should have content-type");
        assert!(ct.to_str().unwrap().contains("application/json"));
    }
}
