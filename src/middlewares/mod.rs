//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인의 횡단 관심사를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 인증 미들웨어 (AuthMiddleware)
//! - Bearer 토큰 추출 및 검증
//! - 사용자 정보를 request extension에 저장
//!
//! ### 2. 검증 미들웨어 (ValidationMiddleware)
//! - 요청 본문을 라우트별 요청 DTO 규칙으로 검증
//! - 실패 시 핸들러 호출 없이 400 응답
//! - 성공 시 구성된 DTO를 request extension에 저장
//!
//! ```rust,ignore
//! web::scope("/api/books")
//!     .wrap(AuthMiddleware::required()) // 인증이 검증보다 먼저 실행
//!     .service(create_book)            // #[post("", wrap = "ValidationMiddleware::new(...)")]
//! ```

pub mod auth_middleware;
mod auth_inner;
pub mod validated;
pub mod validation_middleware;
mod validation_inner;

pub use auth_middleware::AuthMiddleware;
pub use validated::{Validated, ValidatedRequest};
pub use validation_middleware::ValidationMiddleware;

use actix_web::ResponseError;
use actix_web::body::EitherBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};

use crate::core::AppError;

/// 핸들러를 호출하지 않고 에러 엔벨로프로 응답합니다.
pub(crate) fn reject<B>(req: ServiceRequest, error: &AppError) -> ServiceResponse<EitherBody<B>> {
    let response = error.error_response();
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}
