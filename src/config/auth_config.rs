//! # Authentication Configuration Module
//!
//! JWT 토큰 발급 및 검증에 필요한 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```
//!
//! 개발/테스트 환경에서는 `JWT_SECRET`이 없으면 개발용 기본 키를 사용하지만,
//! 스테이징/프로덕션 환경에서는 시작 단계에서 설정 오류로 처리됩니다.

use crate::config::Environment;
use crate::core::errors::{AppError, AppResult};

/// 개발/테스트 환경 전용 서명 키
const DEVELOPMENT_SECRET: &str = "bookstore-development-secret-do-not-use-in-production";

/// JWT 토큰 설정
#[derive(Clone, PartialEq)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

impl JwtConfig {
    pub const DEFAULT_EXPIRATION_HOURS: i64 = 24;

    /// 조회된 값과 실행 환경으로 JWT 설정을 구성합니다.
    ///
    /// # Errors
    ///
    /// 스테이징/프로덕션에서 `JWT_SECRET`이 비어 있거나 없으면 `ConfigError`를 반환합니다.
    pub fn resolve(
        secret: Option<String>,
        expiration_hours: Option<String>,
        env: Environment,
    ) -> AppResult<Self> {
        let secret = match secret.filter(|s| !s.trim().is_empty()) {
            Some(secret) => secret,
            None if env.allows_insecure_defaults() => {
                log::warn!("JWT_SECRET 미설정 - {} 환경용 기본 키를 사용합니다", env);
                DEVELOPMENT_SECRET.to_string()
            }
            None => {
                return Err(AppError::ConfigError(format!(
                    "JWT_SECRET 환경 변수는 {} 환경에서 필수입니다",
                    env
                )));
            }
        };

        let expiration_hours = expiration_hours
            .and_then(|value| value.trim().parse::<i64>().ok())
            .filter(|hours| *hours > 0)
            .unwrap_or(Self::DEFAULT_EXPIRATION_HOURS);

        Ok(Self {
            secret,
            expiration_hours,
        })
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEVELOPMENT_SECRET.to_string(),
            expiration_hours: Self::DEFAULT_EXPIRATION_HOURS,
        }
    }
}

// 서명 키가 로그에 남지 않도록 직접 구현
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_secret_is_allowed_in_development() {
        let config = JwtConfig::resolve(None, None, Environment::Development).unwrap();
        assert_eq!(config.secret, DEVELOPMENT_SECRET);
        assert_eq!(config.expiration_hours, 24);
    }

    #[test]
    fn test_missing_secret_is_rejected_in_production() {
        let result = JwtConfig::resolve(Some("   ".to_string()), None, Environment::Production);
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_invalid_expiration_falls_back_to_default() {
        let config = JwtConfig::resolve(
            Some("secret".to_string()),
            Some("-3".to_string()),
            Environment::Production,
        )
        .unwrap();
        assert_eq!(config.expiration_hours, 24);
    }

    #[test]
    fn test_debug_output_hides_secret() {
        let config = JwtConfig {
            secret: "top-secret".to_string(),
            expiration_hours: 1,
        };
        assert!(!format!("{:?}", config).contains("top-secret"));
    }
}
