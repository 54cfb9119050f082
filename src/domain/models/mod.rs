//! 요청 처리 중에만 존재하는 모델 (토큰 클레임, 인증된 사용자)

pub mod auth;
pub mod token;
