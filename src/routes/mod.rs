//! 라우트 구성
//!
//! | Method | Path | 인증 | 입력 검증 |
//! |--------|------|------|-----------|
//! | GET | `/` | - | - |
//! | GET | `/health` | - | - |
//! | POST | `/api/users/signup` | - | `userSignup` |
//! | POST | `/api/users/login` | - | `userLogin` |
//! | POST | `/api/books` | Bearer | `createBook` |
//! | GET | `/api/books` | Bearer | 쿼리 (`page`, `limit`, `category`) |
//! | GET | `/api/books/{id}` | Bearer | - |
//! | PUT | `/api/books/{id}` | Bearer | `createBook` |
//! | DELETE | `/api/books/{id}` | Bearer | - |

use actix_web::{HttpRequest, HttpResponse, error, get, web};
use serde_json::json;

use crate::core::{AppError, AppState};
use crate::domain::dto::FieldError;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config());

    cfg.service(root);
    cfg.service(health_check);

    configure_user_routes(cfg);
    configure_book_routes(cfg);

    cfg.default_service(web::to(not_found));
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::signup)
            .service(handlers::users::login),
    );
}

fn configure_book_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/books")
            .wrap(AuthMiddleware::required())
            .service(handlers::books::create_book)
            .service(handlers::books::list_books)
            .service(handlers::books::get_book)
            .service(handlers::books::update_book)
            .service(handlers::books::delete_book),
    );
}

/// 쿼리 문자열 역직렬화 실패를 공통 검증 에러로 변환
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let detail = match &err {
            error::QueryPayloadError::Deserialize(e) => format!("query {}", e),
            _ => "query string is invalid".to_string(),
        };
        AppError::ValidationError(vec![FieldError::new("query", detail)]).into()
    })
}

#[get("/")]
async fn root(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Bookstore API is running",
        "environment": state.config.environment.as_str(),
    }))
}

#[get("/health")]
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "bookstore_api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "storage": state.config.database.backend.as_str(),
    }))
}

async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    log::debug!("매칭되는 라우트 없음: {} {}", req.method(), req.path());
    Err(AppError::NotFound("Route".to_string()))
}
