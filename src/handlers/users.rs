use actix_web::{HttpResponse, post, web};

use crate::core::{AppError, AppState};
use crate::domain::dto::users::request::{UserLoginDto, UserSignupDto};
use crate::domain::dto::validation::RequestDto;
use crate::domain::dto::{DtoFactory, RequestKind, ResponseSpec};
use crate::middlewares::{Validated, ValidationMiddleware};

#[post("/signup", wrap = "ValidationMiddleware::new(RequestKind::UserSignup)")]
pub async fn signup(
    state: web::Data<AppState>,
    payload: Validated<UserSignupDto>,
) -> Result<HttpResponse, AppError> {
    let input = payload.into_inner().to_model()?;
    let (user, token) = state.users.signup(input).await?;

    let response = DtoFactory::create_response(ResponseSpec::Auth {
        message: "User registered successfully",
        token: &token,
        user: &user,
    });

    Ok(HttpResponse::Created().json(response))
}

#[post("/login", wrap = "ValidationMiddleware::new(RequestKind::UserLogin)")]
pub async fn login(
    state: web::Data<AppState>,
    payload: Validated<UserLoginDto>,
) -> Result<HttpResponse, AppError> {
    let credentials = payload.into_inner().to_model()?;
    let (user, token) = state.users.login(credentials).await?;

    let response = DtoFactory::create_response(ResponseSpec::Auth {
        message: "Login successful",
        token: &token,
        user: &user,
    });

    Ok(HttpResponse::Ok().json(response))
}
