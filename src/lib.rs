//! 북스토어 REST API 백엔드
//!
//! 도서 카탈로그 CRUD와 JWT 기반 사용자 인증을 제공하는 Actix-web 서비스입니다.
//! 모든 요청 본문은 DTO 팩토리와 검증 미들웨어를 거쳐 타입이 보장된 값으로
//! 핸들러에 전달되고, 응답은 같은 팩토리를 통해 공개 필드만 직렬화됩니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │    HTTP Routes      │ ← REST API 엔드포인트
//! └─────────────────────┘
//!           │
//!           ▼
//! ┌─────────────────────┐
//! │ Auth → Validation   │ ← 토큰 검증, 요청 DTO 검증
//! └─────────────────────┘
//!           │
//!           ▼
//! ┌─────────────────────┐
//! │      Handlers       │ ← 요청/응답 DTO 변환
//! └─────────────────────┘
//!           │
//!           ▼
//! ┌─────────────────────┐
//! │      Services       │ ← 비즈니스 로직
//! └─────────────────────┘
//!           │
//!           ▼
//! ┌─────────────────────┐
//! │    Repositories     │ ← MongoDB / 인메모리
//! └─────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use bookstore_api::config::AppConfig;
//! use bookstore_api::core::AppState;
//! use bookstore_api::routes::configure_all_routes;
//!
//! let state = AppState::in_memory(AppConfig::for_tests());
//! let app = App::new()
//!     .app_data(web::Data::new(state))
//!     .configure(configure_all_routes);
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
