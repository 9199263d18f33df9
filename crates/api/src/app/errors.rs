use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use catalog_core::DomainError;

/// Terminal rejections produced by the request pipeline.
///
/// Each variant owns its exact wire body. None of these are fatal to the
/// process; they end one request and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// Credential header absent or mismatched.
    Unauthorized,
    /// A create/update payload is missing required product fields.
    MissingFields,
    /// No product matches the requested id.
    NotFound,
}

impl ApiError {
    pub fn status(self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ApiError::Unauthorized => "Unauthorized",
            ApiError::MissingFields => "All product fields are required",
            ApiError::NotFound => "Product not found",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        json_error(self.status(), self.message())
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Unauthorized => ApiError::Unauthorized,
            DomainError::Validation(_) => ApiError::MissingFields,
            // An id that does not parse cannot name any stored product.
            DomainError::InvalidId(_) | DomainError::NotFound => ApiError::NotFound,
        }
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_and_messages_are_fixed() {
        assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Unauthorized.message(), "Unauthorized");

        assert_eq!(ApiError::MissingFields.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::MissingFields.message(),
            "All product fields are required"
        );

        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::NotFound.message(), "Product not found");
    }

    #[test]
    fn domain_errors_map_onto_wire_errors() {
        assert_eq!(
            ApiError::from(DomainError::validation("missing")),
            ApiError::MissingFields
        );
        assert_eq!(
            ApiError::from(DomainError::invalid_id("nope")),
            ApiError::NotFound
        );
        assert_eq!(ApiError::from(DomainError::NotFound), ApiError::NotFound);
        assert_eq!(
            ApiError::from(DomainError::Unauthorized),
            ApiError::Unauthorized
        );
    }
}
