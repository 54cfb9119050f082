use std::sync::Arc;

use bcrypt::hash;

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::entities::{Credentials, NewUser, User};
use crate::repositories::UserRepository;
use crate::services::auth::TokenService;

/// 로그인 실패 시 이메일 존재 여부를 드러내지 않는 공통 메시지
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// 회원가입 및 로그인 서비스
pub struct UserService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<TokenService>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, tokens: Arc<TokenService>, bcrypt_cost: u32) -> Self {
        Self {
            users,
            tokens,
            bcrypt_cost,
        }
    }

    /// 사용자를 생성하고 토큰을 발급합니다.
    pub async fn signup(&self, input: NewUser) -> AppResult<(User, String)> {
        let start_time = std::time::Instant::now();
        let email = normalize_email(&input.email);

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::ConflictError("Email is already registered".to_string()));
        }

        if self.users.find_by_username(&input.username).await?.is_some() {
            return Err(AppError::ConflictError("Username is already taken".to_string()));
        }

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&input.password, self.bcrypt_cost).context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = self
            .users
            .create(User::new(input.username, email, password_hash))
            .await?;
        let token = self.tokens.generate_token(&user)?;

        log::info!(
            "회원가입 완료: {} ({}), {:?}",
            user.username,
            user.id,
            start_time.elapsed()
        );

        Ok((user, token))
    }

    /// 자격 증명을 확인하고 토큰을 발급합니다.
    ///
    /// 알 수 없는 이메일과 틀린 비밀번호는 같은 메시지의 `AuthenticationError`가 됩니다.
    pub async fn login(&self, credentials: Credentials) -> AppResult<(User, String)> {
        let email = normalize_email(&credentials.email);

        let Some(user) = self.users.find_by_email(&email).await? else {
            log::info!("로그인 실패: 등록되지 않은 이메일");
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        };

        let verify_start = std::time::Instant::now();
        let is_valid =
            bcrypt::verify(&credentials.password, &user.password_hash).context("비밀번호 검증 실패")?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            log::info!("로그인 실패: 비밀번호 불일치 ({})", user.id);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        let token = self.tokens.generate_token(&user)?;
        log::info!("로그인 성공: {}", user.id);

        Ok((user, token))
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
