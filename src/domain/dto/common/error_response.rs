//! 공통 에러 엔벨로프
//!
//! 모든 실패 응답은 이 형태를 따릅니다.
//!
//! ```json
//! { "statusCode": 404, "message": "Book not found" }
//! ```

use std::fmt::Display;

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::domain::dto::validation::FieldError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponseDto {
    pub status_code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl ErrorResponseDto {
    pub const VALIDATION_FAILED: &'static str = "Validation failed";
    pub const INTERNAL_SERVER_ERROR: &'static str = "Internal server error";

    pub fn new(status_code: u16, message: impl Into<String>, details: Option<Vec<FieldError>>) -> Self {
        Self {
            status_code,
            message: message.into(),
            details,
        }
    }

    /// 400, 필드별 상세 포함
    pub fn validation_error(details: Vec<FieldError>) -> Self {
        Self::new(400, Self::VALIDATION_FAILED, Some(details))
    }

    /// 404, `"{resource} not found"`
    pub fn not_found(resource: &str) -> Self {
        Self::new(404, format!("{} not found", resource), None)
    }

    /// 401
    pub fn auth_error(message: impl Into<String>) -> Self {
        Self::new(401, message, None)
    }

    /// 403
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(403, message, None)
    }

    /// 409
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(409, message, None)
    }

    /// 500
    ///
    /// 원인은 서버 로그에만 남기고 응답에는 일반 메시지만 담습니다.
    pub fn server_error(cause: &dyn Display) -> Self {
        log::error!("서버 내부 오류: {}", cause);
        Self::new(500, Self::INTERNAL_SERVER_ERROR, None)
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_found_envelope() {
        let value = serde_json::to_value(ErrorResponseDto::not_found("Book")).unwrap();
        assert_eq!(value, json!({ "statusCode": 404, "message": "Book not found" }));
    }

    #[test]
    fn test_validation_envelope_carries_details() {
        let dto = ErrorResponseDto::validation_error(vec![FieldError::new(
            "author",
            "author is required",
        )]);
        let value = serde_json::to_value(&dto).unwrap();

        assert_eq!(value["statusCode"], 400);
        assert_eq!(value["details"][0]["message"], "author is required");
        assert_eq!(dto.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_server_error_uses_generic_message() {
        let dto = ErrorResponseDto::server_error(&"pool exhausted");
        assert_eq!(dto.message, "Internal server error");
        assert_eq!(dto.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_out_of_range_status_falls_back_to_500() {
        assert_eq!(
            ErrorResponseDto::new(42, "odd", None).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
