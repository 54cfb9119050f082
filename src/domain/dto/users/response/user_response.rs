use serde::{Deserialize, Serialize};

use crate::domain::entities::User;

/// 공개 사용자 정보
///
/// 비밀번호 해시와 타임스탬프는 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl UserDto {
    pub fn from_model(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            email,
            ..
        } = user;

        Self {
            id,
            username,
            email,
        }
    }
}

/// 인증 성공 응답
///
/// 회원가입(201)과 로그인(200)에 공통으로 사용됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponseDto {
    pub message: String,
    pub token: String,
    pub user: UserDto,
}

impl AuthResponseDto {
    pub fn success(message: impl Into<String>, token: impl Into<String>, user: &User) -> Self {
        Self {
            message: message.into(),
            token: token.into(),
            user: UserDto::from_model(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_never_contains_password_hash() {
        let user = User::new(
            "reader".to_string(),
            "reader@example.com".to_string(),
            "$2b$04$secret-hash".to_string(),
        );
        let response = AuthResponseDto::success("Login successful", "jwt-token", &user);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["message"], "Login successful");
        assert_eq!(value["token"], "jwt-token");
        assert_eq!(value["user"]["username"], "reader");
        assert_eq!(value["user"].as_object().unwrap().len(), 3);
        assert!(!value.to_string().contains("secret-hash"));
    }
}
