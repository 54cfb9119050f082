use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::domain::dto::RequestKind;
use crate::middlewares::validation_inner::ValidationMiddlewareService;

/// 요청 본문 검증 미들웨어
///
/// 본문을 JSON으로 읽어 [`DtoFactory::validate`](crate::domain::dto::DtoFactory::validate)로 검증합니다.
/// 실패하면 핸들러를 호출하지 않고 400 에러 엔벨로프로 응답하며,
/// 성공하면 구성된 요청 DTO를 요청 확장에 저장합니다. 핸들러는
/// [`Validated`](crate::middlewares::Validated) 추출자로 이를 꺼냅니다.
///
/// ```rust,ignore
/// #[post("", wrap = "ValidationMiddleware::new(RequestKind::CreateBook)")]
/// pub async fn create_book(payload: Validated<CreateBookDto>) -> Result<HttpResponse, AppError> {
///     let input = payload.into_inner().to_model()?;
///     // ...
/// }
/// ```
pub struct ValidationMiddleware {
    kind: RequestKind,
}

impl ValidationMiddleware {
    pub fn new(kind: RequestKind) -> Self {
        Self { kind }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ValidationMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ValidationMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ValidationMiddlewareService {
            service: Rc::new(service),
            kind: self.kind,
        }))
    }
}
