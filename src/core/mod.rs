//! # Core Module
//!
//! 애플리케이션 전역에서 공유하는 핵심 구성 요소입니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: 모든 에러를 공통 에러 엔벨로프로 변환
//!
//! ### [`state`] - 애플리케이션 상태
//! - **AppState**: 설정과 서비스를 묶어 `web::Data`로 공유
//! - **저장소 선택**: `STORAGE_BACKEND` 설정에 따라 MongoDB 또는 인메모리 구현 연결
//!
//! ```rust,ignore
//! let config = AppConfig::from_env()?;
//! let state = AppState::from_config(config).await?;
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(web::Data::new(state.clone()))
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod errors;
pub mod state;

pub use errors::*;
pub use state::AppState;
