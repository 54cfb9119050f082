//! # Data Transfer Objects
//!
//! HTTP 경계에서 사용하는 요청/응답 DTO와 이를 생성하는 팩토리입니다.
//!
//! ```text
//! 원시 JSON ──▶ DtoFactory::validate ──▶ DtoFactory::create_request ──▶ to_model() ──▶ 서비스
//!                                                                                       │
//! 응답 JSON ◀── DtoFactory::create_response ◀── 엔티티 ◀─────────────────────────────────┘
//! ```

pub mod books;
pub mod common;
pub mod factory;
pub mod users;
pub mod validation;

pub use factory::{DtoError, DtoFactory, RequestDto, RequestKind, ResponseDto, ResponseKind, ResponseSpec};
pub use validation::FieldError;
