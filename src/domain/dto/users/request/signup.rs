use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::core::errors::AppResult;
use crate::domain::dto::factory::RequestKind;
use crate::domain::dto::validation::{FieldSpec, RequestDto, check_rules, require, string_field};
use crate::domain::entities::NewUser;

/// 회원가입 요청 DTO
#[derive(Clone, Default, PartialEq, Validate)]
pub struct UserSignupDto {
    /// 사용자명
    ///
    /// - 영문, 숫자, 언더스코어만 허용
    /// - 3-30자 제한
    #[validate(
        required(message = "username is required"),
        length(min = 3, max = 30, message = "username must be between 3 and 30 characters"),
        custom(function = "validate_username")
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "email is required"),
        email(message = "email must be a valid email address")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "password is required"),
        length(min = 6, message = "password must be at least 6 characters long")
    )]
    pub password: Option<String>,
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    // ASCII 알파벳, 숫자, 언더스코어만 허용
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::new("invalid_username")
            .with_message("username may only contain letters, numbers and underscores".into()));
    }
    Ok(())
}

impl RequestDto for UserSignupDto {
    const KIND: RequestKind = RequestKind::UserSignup;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::string("username"),
        FieldSpec::string("email"),
        FieldSpec::string("password"),
    ];
    type Model = NewUser;

    fn from_raw(data: &Value) -> Self {
        Self {
            username: string_field(data, "username"),
            email: string_field(data, "email"),
            password: string_field(data, "password"),
        }
    }

    fn to_model(&self) -> AppResult<NewUser> {
        check_rules(self)?;

        Ok(NewUser {
            username: require(&self.username, "username")?,
            email: require(&self.email, "email")?,
            password: require(&self.password, "password")?,
        })
    }
}

impl std::fmt::Debug for UserSignupDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserSignupDto")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
