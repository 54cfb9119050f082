//! # Application Error Handling System
//!
//! 북스토어 API 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 모든 에러가 동일한 에러 엔벨로프(`statusCode`, `message`, `details`)로 응답됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패 (필드별 상세 포함) |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `ConflictError` | 409 Conflict | 중복 이메일/사용자명 |
//! | `AuthenticationError` | 401 Unauthorized | 토큰 누락, 만료, 로그인 실패 |
//! | `AuthorizationError` | 403 Forbidden | 권한 부족 |
//! | `DatabaseError` | 500 Internal Server Error | 데이터베이스 오류 |
//! | `ConfigError` | 500 Internal Server Error | 설정 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! 5xx 응답은 내부 메시지를 노출하지 않고 서버 로그에만 기록합니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn get_book(&self, id: &str) -> AppResult<Book> {
//!     self.books
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("Book".to_string()))
//! }
//! ```

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::dto::common::ErrorResponseDto;
use crate::domain::dto::validation::{FieldError, collect_field_errors};

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 연산 중 발생하는 오류를 나타냅니다. 500으로 응답됩니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러
    ///
    /// 필드별 상세 목록을 그대로 에러 엔벨로프의 `details`로 전달합니다.
    /// 400 Bad Request로 응답됩니다.
    #[error("Validation error: {}", summarize(.0))]
    ValidationError(Vec<FieldError>),

    /// 리소스 찾을 수 없음 에러
    ///
    /// 값은 리소스 이름이며 응답 메시지는 `"{리소스} not found"`가 됩니다.
    ///
    /// ```rust,ignore
    /// let book = repo.find_by_id(&id).await?
    ///     .ok_or_else(|| AppError::NotFound("Book".to_string()))?;
    /// ```
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러
    ///
    /// 이미 사용 중인 이메일이나 사용자명으로 가입을 시도할 때 발생합니다.
    /// 409 Conflict로 응답됩니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러
    ///
    /// # 발생 시나리오
    /// - Authorization 헤더 누락 또는 형식 오류
    /// - 만료되었거나 서명이 맞지 않는 JWT 토큰
    /// - 잘못된 로그인 정보
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 설정 에러
    ///
    /// 주로 시작 단계에서 발생하며, 필수 환경 변수 누락 등을 나타냅니다.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러
    ///
    /// 예상하지 못한 시스템 오류나 연결 구성 오류 시 발생합니다.
    /// 500 Internal Server Error로 응답됩니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

fn summarize(details: &[FieldError]) -> String {
    details
        .iter()
        .map(|detail| detail.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl AppError {
    /// 단일 필드에 대한 검증 에러를 생성합니다.
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        AppError::ValidationError(vec![FieldError::new(field, message)])
    }

    /// 에러 엔벨로프로 변환합니다.
    pub fn to_response_dto(&self) -> ErrorResponseDto {
        match self {
            AppError::ValidationError(details) => ErrorResponseDto::validation_error(details.clone()),
            AppError::NotFound(resource) => ErrorResponseDto::not_found(resource),
            AppError::ConflictError(msg) => ErrorResponseDto::conflict(msg.clone()),
            AppError::AuthenticationError(msg) => ErrorResponseDto::auth_error(msg.clone()),
            AppError::AuthorizationError(msg) => ErrorResponseDto::forbidden(msg.clone()),
            AppError::DatabaseError(_) | AppError::ConfigError(_) | AppError::InternalError(_) => {
                ErrorResponseDto::server_error(self)
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// ```json
    /// {
    ///   "statusCode": 400,
    ///   "message": "Validation failed",
    ///   "details": [{ "field": "author", "message": "author is required" }]
    /// }
    /// ```
    fn error_response(&self) -> actix_web::HttpResponse {
        let body = self.to_response_dto();
        actix_web::HttpResponse::build(body.status()).json(body)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::ValidationError(collect_field_errors(&errors))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let hash = bcrypt::hash(password, cost).context("비밀번호 해싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use serde_json::Value;

    async fn body_json(error: AppError) -> (StatusCode, Value) {
        let response = error.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_validation_error_response() {
        let error = AppError::invalid_field("author", "author is required");
        let (status, body) = body_json(error).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["statusCode"], 400);
        assert_eq!(body["message"], "Validation failed");
        assert_eq!(body["details"][0]["field"], "author");
        assert_eq!(body["details"][0]["message"], "author is required");
    }

    #[actix_web::test]
    async fn test_envelope_status_matches_http_status() {
        let errors = vec![
            AppError::invalid_field("title", "title is required"),
            AppError::NotFound("Book".to_string()),
            AppError::ConflictError("Email is already registered".to_string()),
            AppError::AuthenticationError("Invalid token".to_string()),
            AppError::AuthorizationError("Forbidden".to_string()),
            AppError::ConfigError("JWT_SECRET".to_string()),
            AppError::InternalError("boom".to_string()),
        ];

        for error in errors {
            let expected = error.status_code();
            let (status, body) = body_json(error).await;

            assert_eq!(status, expected);
            assert_eq!(body["statusCode"], expected.as_u16());
        }
    }

    #[actix_web::test]
    async fn test_not_found_error_response() {
        let (status, body) = body_json(AppError::NotFound("Book".to_string())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Book not found");
        assert!(body.get("details").is_none());
    }

    #[actix_web::test]
    async fn test_internal_error_hides_detail() {
        let error = AppError::DatabaseError("connection refused at 10.0.0.3".to_string());
        let (status, body) = body_json(error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["statusCode"], 500);
        assert!(!body["message"].as_str().unwrap().contains("10.0.0.3"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::AuthenticationError("Invalid token".to_string()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::AuthorizationError("Insufficient permissions".to_string()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::ConflictError("Email already registered".to_string()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::ConfigError("JWT_SECRET".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
