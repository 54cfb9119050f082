//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 영속 엔티티(Book, User)와 검증된 입력 모델
//! ├── dto       - 요청/응답 DTO, 검증 규칙, DtoFactory
//! └── models    - 토큰 클레임, 인증된 사용자
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! 엔티티는 HTTP 응답으로 직접 직렬화되지 않습니다. 모든 응답은
//! [`dto::DtoFactory::create_response`]를 거쳐 허용된 필드만 노출합니다.

pub mod dto;
pub mod entities;
pub mod models;
