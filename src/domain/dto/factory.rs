//! # DTO Factory
//!
//! 요청/응답 DTO 생성을 한 곳에서 담당하는 팩토리입니다.
//!
//! 요청 종류와 응답 종류는 닫힌 열거형([`RequestKind`], [`ResponseKind`])으로 표현되므로
//! 라우트 구성 시점에 잘못된 종류를 지정할 수 없습니다. 설정 파일 등 문자열 이름이
//! 필요한 경계에서는 `FromStr`을 통해 변환하며, 알 수 없는 이름은 [`DtoError`]로 거부됩니다.
//!
//! | 이름 | 종류 |
//! |------|------|
//! | `createBook` | [`RequestKind::CreateBook`] |
//! | `userSignup` | [`RequestKind::UserSignup`] |
//! | `userLogin` | [`RequestKind::UserLogin`] |
//! | `book` | [`ResponseKind::Book`] |
//! | `bookList` | [`ResponseKind::BookList`] |
//! | `auth` | [`ResponseKind::Auth`] |
//! | `error` | [`ResponseKind::Error`] |

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::core::errors::AppError;
use crate::domain::dto::books::request::CreateBookDto;
use crate::domain::dto::books::response::BookDto;
use crate::domain::dto::common::ErrorResponseDto;
use crate::domain::dto::users::request::{UserLoginDto, UserSignupDto};
use crate::domain::dto::users::response::AuthResponseDto;
use crate::domain::dto::validation::{FieldError, RequestDto as _};
use crate::domain::entities::{Book, User};

/// 팩토리 라우팅 에러
///
/// 입력 검증 실패가 아니라 구성 오류이므로 500으로 처리됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DtoError {
    #[error("Unknown request DTO type: {0}")]
    UnknownRequestType(String),

    #[error("Unknown response DTO type: {0}")]
    UnknownResponseType(String),

    #[error("Request DTO kind mismatch: expected {expected}, got {actual}")]
    KindMismatch {
        expected: RequestKind,
        actual: RequestKind,
    },
}

impl From<DtoError> for AppError {
    fn from(error: DtoError) -> Self {
        AppError::InternalError(error.to_string())
    }
}

/// 요청 DTO 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    CreateBook,
    UserSignup,
    UserLogin,
}

impl RequestKind {
    pub const ALL: [RequestKind; 3] = [
        RequestKind::CreateBook,
        RequestKind::UserSignup,
        RequestKind::UserLogin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::CreateBook => "createBook",
            RequestKind::UserSignup => "userSignup",
            RequestKind::UserLogin => "userLogin",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestKind {
    type Err = DtoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DtoError::UnknownRequestType(s.to_string()))
    }
}

/// 응답 DTO 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    Book,
    BookList,
    Auth,
    Error,
}

impl ResponseKind {
    pub const ALL: [ResponseKind; 4] = [
        ResponseKind::Book,
        ResponseKind::BookList,
        ResponseKind::Auth,
        ResponseKind::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseKind::Book => "book",
            ResponseKind::BookList => "bookList",
            ResponseKind::Auth => "auth",
            ResponseKind::Error => "error",
        }
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseKind {
    type Err = DtoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DtoError::UnknownResponseType(s.to_string()))
    }
}

/// 팩토리가 생성한 요청 DTO
#[derive(Debug, Clone, PartialEq)]
pub enum RequestDto {
    CreateBook(CreateBookDto),
    UserSignup(UserSignupDto),
    UserLogin(UserLoginDto),
}

impl RequestDto {
    pub fn kind(&self) -> RequestKind {
        match self {
            RequestDto::CreateBook(_) => RequestKind::CreateBook,
            RequestDto::UserSignup(_) => RequestKind::UserSignup,
            RequestDto::UserLogin(_) => RequestKind::UserLogin,
        }
    }
}

impl TryFrom<RequestDto> for CreateBookDto {
    type Error = DtoError;

    fn try_from(dto: RequestDto) -> Result<Self, Self::Error> {
        match dto {
            RequestDto::CreateBook(inner) => Ok(inner),
            other => Err(DtoError::KindMismatch {
                expected: Self::KIND,
                actual: other.kind(),
            }),
        }
    }
}

impl TryFrom<RequestDto> for UserSignupDto {
    type Error = DtoError;

    fn try_from(dto: RequestDto) -> Result<Self, Self::Error> {
        match dto {
            RequestDto::UserSignup(inner) => Ok(inner),
            other => Err(DtoError::KindMismatch {
                expected: Self::KIND,
                actual: other.kind(),
            }),
        }
    }
}

impl TryFrom<RequestDto> for UserLoginDto {
    type Error = DtoError;

    fn try_from(dto: RequestDto) -> Result<Self, Self::Error> {
        match dto {
            RequestDto::UserLogin(inner) => Ok(inner),
            other => Err(DtoError::KindMismatch {
                expected: Self::KIND,
                actual: other.kind(),
            }),
        }
    }
}

/// 응답 생성에 필요한 종류별 입력
#[derive(Debug, Clone, Copy)]
pub enum ResponseSpec<'a> {
    Book(&'a Book),
    BookList(&'a [Book]),
    Auth {
        message: &'a str,
        token: &'a str,
        user: &'a User,
    },
    /// 상태 코드를 지정하지 않으면 500
    Error {
        status_code: Option<u16>,
        message: &'a str,
        details: Option<&'a [FieldError]>,
    },
}

impl ResponseSpec<'_> {
    pub fn kind(&self) -> ResponseKind {
        match self {
            ResponseSpec::Book(_) => ResponseKind::Book,
            ResponseSpec::BookList(_) => ResponseKind::BookList,
            ResponseSpec::Auth { .. } => ResponseKind::Auth,
            ResponseSpec::Error { .. } => ResponseKind::Error,
        }
    }
}

/// 팩토리가 생성한 응답 DTO
///
/// 직렬화 시 내부 DTO의 형태를 그대로 사용합니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseDto {
    Book(BookDto),
    BookList(Vec<BookDto>),
    Auth(AuthResponseDto),
    Error(ErrorResponseDto),
}

impl ResponseDto {
    pub fn kind(&self) -> ResponseKind {
        match self {
            ResponseDto::Book(_) => ResponseKind::Book,
            ResponseDto::BookList(_) => ResponseKind::BookList,
            ResponseDto::Auth(_) => ResponseKind::Auth,
            ResponseDto::Error(_) => ResponseKind::Error,
        }
    }
}

pub struct DtoFactory;

impl DtoFactory {
    /// 원시 입력에서 요청 DTO를 구성합니다. 검증하지 않으며 실패하지 않습니다.
    pub fn create_request(kind: RequestKind, data: &Value) -> RequestDto {
        match kind {
            RequestKind::CreateBook => RequestDto::CreateBook(CreateBookDto::from_raw(data)),
            RequestKind::UserSignup => RequestDto::UserSignup(UserSignupDto::from_raw(data)),
            RequestKind::UserLogin => RequestDto::UserLogin(UserLoginDto::from_raw(data)),
        }
    }

    /// 원시 입력을 해당 종류의 규칙으로 검증합니다.
    pub fn validate(kind: RequestKind, data: &Value) -> Result<(), Vec<FieldError>> {
        match kind {
            RequestKind::CreateBook => CreateBookDto::validate_payload(data),
            RequestKind::UserSignup => UserSignupDto::validate_payload(data),
            RequestKind::UserLogin => UserLoginDto::validate_payload(data),
        }
    }

    pub fn create_response(spec: ResponseSpec<'_>) -> ResponseDto {
        match spec {
            ResponseSpec::Book(book) => ResponseDto::Book(BookDto::from_model(book)),
            ResponseSpec::BookList(books) => ResponseDto::BookList(BookDto::from_model_array(books)),
            ResponseSpec::Auth {
                message,
                token,
                user,
            } => ResponseDto::Auth(AuthResponseDto::success(message, token, user)),
            ResponseSpec::Error {
                status_code,
                message,
                details,
            } => ResponseDto::Error(ErrorResponseDto::new(
                status_code.unwrap_or(500),
                message,
                details.map(<[FieldError]>::to_vec),
            )),
        }
    }

    pub fn validation_error(details: Vec<FieldError>) -> ErrorResponseDto {
        ErrorResponseDto::validation_error(details)
    }

    pub fn not_found(resource: &str) -> ErrorResponseDto {
        ErrorResponseDto::not_found(resource)
    }

    pub fn auth_error(message: impl Into<String>) -> ErrorResponseDto {
        ErrorResponseDto::auth_error(message)
    }

    pub fn server_error(cause: &dyn fmt::Display) -> ErrorResponseDto {
        ErrorResponseDto::server_error(cause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::validation::RequestDto as _;
    use crate::domain::entities::NewBook;
    use serde_json::json;

    fn book(title: &str) -> Book {
        Book::new(NewBook {
            title: title.to_string(),
            author: "Test Author".to_string(),
            category: "Fiction".to_string(),
            price: 12.99,
            rating: 4.5,
            published_date: "2023-01-01".to_string(),
        })
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in RequestKind::ALL {
            assert_eq!(kind.as_str().parse::<RequestKind>(), Ok(kind));
        }
        for kind in ResponseKind::ALL {
            assert_eq!(kind.as_str().parse::<ResponseKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_kind_names_are_rejected() {
        assert_eq!(
            "createAuthor".parse::<RequestKind>(),
            Err(DtoError::UnknownRequestType("createAuthor".to_string()))
        );
        assert_eq!(
            "author".parse::<ResponseKind>(),
            Err(DtoError::UnknownResponseType("author".to_string()))
        );
    }

    #[test]
    fn test_create_request_matches_kind() {
        for kind in RequestKind::ALL {
            assert_eq!(DtoFactory::create_request(kind, &json!({})).kind(), kind);
        }
    }

    #[test]
    fn test_create_request_never_fails_on_garbage() {
        let dto = DtoFactory::create_request(RequestKind::CreateBook, &json!("not an object"));
        assert_eq!(dto, RequestDto::CreateBook(CreateBookDto::default()));
    }

    #[test]
    fn test_validate_dispatches_to_kind_rules() {
        let login = json!({ "email": "reader@example.com", "password": "x" });

        assert!(DtoFactory::validate(RequestKind::UserLogin, &login).is_ok());
        assert!(DtoFactory::validate(RequestKind::UserSignup, &login).is_err());
    }

    #[test]
    fn test_dto_kinds_match_factory_variants() {
        let payload = json!({});
        assert_eq!(
            DtoFactory::create_request(CreateBookDto::KIND, &payload).kind(),
            RequestKind::CreateBook
        );
        assert_eq!(
            DtoFactory::create_request(UserSignupDto::KIND, &payload).kind(),
            RequestKind::UserSignup
        );
        assert_eq!(
            DtoFactory::create_request(UserLoginDto::KIND, &payload).kind(),
            RequestKind::UserLogin
        );
    }

    #[test]
    fn test_try_from_reports_kind_mismatch() {
        let dto = DtoFactory::create_request(RequestKind::UserLogin, &json!({}));
        assert_eq!(
            CreateBookDto::try_from(dto),
            Err(DtoError::KindMismatch {
                expected: RequestKind::CreateBook,
                actual: RequestKind::UserLogin,
            })
        );
    }

    #[test]
    fn test_book_list_response_serializes_as_array() {
        let books = vec![book("A"), book("B")];
        let response = DtoFactory::create_response(ResponseSpec::BookList(&books));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(response.kind(), ResponseKind::BookList);
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[1]["title"], "B");
    }

    #[test]
    fn test_error_response_defaults_to_500() {
        let response = DtoFactory::create_response(ResponseSpec::Error {
            status_code: None,
            message: "boom",
            details: None,
        });
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "statusCode": 500, "message": "boom" })
        );
    }

    #[test]
    fn test_error_helpers() {
        assert_eq!(DtoFactory::not_found("Book").message, "Book not found");
        assert_eq!(DtoFactory::auth_error("Invalid token").status_code, 401);
        assert_eq!(DtoFactory::validation_error(vec![]).status_code, 400);
        assert_eq!(DtoFactory::server_error(&"disk full").status_code, 500);
    }
}
