use serde_json::Value;
use validator::Validate;

use crate::core::errors::AppResult;
use crate::domain::dto::factory::RequestKind;
use crate::domain::dto::validation::{FieldSpec, RequestDto, check_rules, require, string_field};
use crate::domain::entities::Credentials;

/// 로그인 요청 DTO
#[derive(Clone, Default, PartialEq, Validate)]
pub struct UserLoginDto {
    #[validate(
        required(message = "email is required"),
        email(message = "email must be a valid email address")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "password is required"),
        length(min = 1, message = "password must not be empty")
    )]
    pub password: Option<String>,
}

impl RequestDto for UserLoginDto {
    const KIND: RequestKind = RequestKind::UserLogin;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::string("email"),
        FieldSpec::string("password"),
    ];
    type Model = Credentials;

    fn from_raw(data: &Value) -> Self {
        Self {
            email: string_field(data, "email"),
            password: string_field(data, "password"),
        }
    }

    fn to_model(&self) -> AppResult<Credentials> {
        check_rules(self)?;

        Ok(Credentials {
            email: require(&self.email, "email")?,
            password: require(&self.password, "password")?,
        })
    }
}

impl std::fmt::Debug for UserLoginDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserLoginDto")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
