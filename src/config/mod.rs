//! 애플리케이션 설정 모듈
//!
//! 환경 변수를 시작 시점에 한 번 읽어 [`AppConfig`]로 묶습니다.
//! 서비스와 미들웨어는 전역 환경을 직접 조회하지 않고 이 구조체를 전달받습니다.

pub mod auth_config;
pub mod data_config;

pub use auth_config::*;
pub use data_config::*;

use crate::core::errors::AppResult;

/// 전체 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub bcrypt_cost: u32,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수로부터 설정을 읽습니다.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 임의의 키 조회 함수로부터 설정을 구성합니다.
    ///
    /// 숫자 값의 파싱에 실패하면 경고를 남기고 기본값을 사용합니다.
    /// `JWT_SECRET` 누락(스테이징/프로덕션)과 잘못된 `STORAGE_BACKEND`만 오류로 처리합니다.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::detect(&lookup);

        let server_defaults = ServerConfig::default();
        let server = ServerConfig {
            host: lookup("HOST").unwrap_or(server_defaults.host),
            port: parse_or(&lookup, "PORT", server_defaults.port),
            workers: parse_or(&lookup, "SERVER_WORKERS", server_defaults.workers),
        };

        let database_defaults = DatabaseConfig::default();
        let database = DatabaseConfig {
            backend: match lookup("STORAGE_BACKEND") {
                Some(value) => value.parse()?,
                None => database_defaults.backend,
            },
            uri: lookup("MONGODB_URI").unwrap_or(database_defaults.uri),
            name: lookup("DATABASE_NAME").unwrap_or(database_defaults.name),
        };

        let jwt = JwtConfig::resolve(
            lookup("JWT_SECRET"),
            lookup("JWT_EXPIRATION_HOURS"),
            environment,
        )?;

        let bcrypt_cost = PasswordConfig::bcrypt_cost(lookup("BCRYPT_COST").as_deref(), environment);

        let rate_defaults = RateLimitConfig::default();
        let rate_limit = RateLimitConfig {
            per_second: parse_or(&lookup, "RATE_LIMIT_PER_SECOND", rate_defaults.per_second),
            burst_size: parse_or(&lookup, "RATE_LIMIT_BURST_SIZE", rate_defaults.burst_size),
        };

        let cors = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| CorsConfig {
                allowed_origins: CorsConfig::parse_origins(&raw),
            })
            .unwrap_or_default();

        let config = Self {
            environment,
            server,
            database,
            jwt,
            bcrypt_cost,
            rate_limit,
            cors,
        };

        log::info!(
            "설정 로드 완료: 환경={}, 바인딩={}, 저장소={:?}",
            config.environment,
            config.server.bind_address(),
            config.database.backend
        );

        Ok(config)
    }

    /// 인메모리 저장소를 사용하는 테스트용 설정
    pub fn for_tests() -> Self {
        Self {
            environment: Environment::Test,
            database: DatabaseConfig {
                backend: StorageBackend::Memory,
                ..DatabaseConfig::default()
            },
            bcrypt_cost: PasswordConfig::bcrypt_cost_for_env(Environment::Test),
            ..Self::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            jwt: JwtConfig::default(),
            bcrypt_cost: PasswordConfig::bcrypt_cost_for_env(Environment::Development),
            rate_limit: RateLimitConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display + Copy,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_any_variables() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.backend, StorageBackend::MongoDb);
        assert_eq!(config.bcrypt_cost, 4);
        assert_eq!(config.rate_limit, RateLimitConfig::default());
    }

    #[test]
    fn test_values_are_read_from_lookup() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "production"),
            ("JWT_SECRET", "prod-secret"),
            ("PORT", "9090"),
            ("STORAGE_BACKEND", "memory"),
            ("RATE_LIMIT_PER_SECOND", "5"),
            ("CORS_ALLOWED_ORIGINS", "https://books.example.com"),
        ]))
        .unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.database.backend, StorageBackend::Memory);
        assert_eq!(config.jwt.secret, "prod-secret");
        assert_eq!(config.bcrypt_cost, 12);
        assert_eq!(config.rate_limit.per_second, 5);
        assert_eq!(
            config.cors.allowed_origins,
            vec!["https://books.example.com".to_string()]
        );
    }

    #[test]
    fn test_unparsable_port_falls_back_to_default() {
        let config = AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_production_requires_jwt_secret() {
        let result = AppConfig::from_lookup(lookup_from(&[("NODE_ENV", "production")]));
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_unknown_storage_backend_is_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[("STORAGE_BACKEND", "sqlite")]));
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }
}
