use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

/// Bearer 토큰 인증 미들웨어
///
/// 토큰이 유효하면 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를
/// 요청 확장에 저장하고, 그렇지 않으면 401 에러 엔벨로프로 응답합니다.
/// 스코프에 적용하면 스코프 내부 라우트의 입력 검증보다 먼저 실행됩니다.
pub struct AuthMiddleware;

impl AuthMiddleware {
    pub fn required() -> Self {
        AuthMiddleware
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
