use actix_web::{HttpResponse, delete, get, post, put, web};
use serde_json::json;

use crate::core::{AppError, AppState};
use crate::domain::dto::books::request::{BookListParams, BookListQuery, CreateBookDto};
use crate::domain::dto::validation::RequestDto;
use crate::domain::dto::{DtoFactory, RequestKind, ResponseSpec};
use crate::domain::models::auth::AuthenticatedUser;
use crate::middlewares::{Validated, ValidationMiddleware};

#[post("", wrap = "ValidationMiddleware::new(RequestKind::CreateBook)")]
pub async fn create_book(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    payload: Validated<CreateBookDto>,
) -> Result<HttpResponse, AppError> {
    let input = payload.into_inner().to_model()?;
    let book = state.books.create(input).await?;

    log::debug!("도서 생성 요청자: {}", user.user_id);

    Ok(HttpResponse::Created().json(DtoFactory::create_response(ResponseSpec::Book(&book))))
}

#[get("")]
pub async fn list_books(
    state: web::Data<AppState>,
    params: web::Query<BookListParams>,
) -> Result<HttpResponse, AppError> {
    let query = BookListQuery::from_params(params.into_inner())?;

    let books = state.books.list(&query).await?;

    Ok(HttpResponse::Ok().json(DtoFactory::create_response(ResponseSpec::BookList(&books))))
}

#[get("/{id}")]
pub async fn get_book(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let book = state.books.get(&id).await?;

    Ok(HttpResponse::Ok().json(DtoFactory::create_response(ResponseSpec::Book(&book))))
}

/// 전체 교체. 생성과 같은 규칙으로 검증됩니다.
#[put("/{id}", wrap = "ValidationMiddleware::new(RequestKind::CreateBook)")]
pub async fn update_book(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: Validated<CreateBookDto>,
) -> Result<HttpResponse, AppError> {
    let input = payload.into_inner().to_model()?;
    let book = state.books.update(&id, input).await?;

    Ok(HttpResponse::Ok().json(DtoFactory::create_response(ResponseSpec::Book(&book))))
}

#[delete("/{id}")]
pub async fn delete_book(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.books.delete(&id).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Book deleted successfully" })))
}
