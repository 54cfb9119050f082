use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::{Error, HttpMessage, web};
use futures_util::future::LocalBoxFuture;
use serde_json::Value;

use crate::core::AppError;
use crate::domain::dto::{DtoFactory, FieldError, RequestKind};
use crate::middlewares::reject;
use crate::middlewares::validated::ValidatedRequest;

pub struct ValidationMiddlewareService<S> {
    pub service: Rc<S>,
    pub kind: RequestKind,
}

impl<S, B> Service<ServiceRequest> for ValidationMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let kind = self.kind;

        Box::pin(async move {
            let payload = match req.extract::<web::Bytes>().await {
                Ok(body) => parse_body(&body),
                Err(err) => Err(FieldError::new("body", format!("body could not be read: {}", err))),
            };

            let payload = match payload {
                Ok(payload) => payload,
                Err(detail) => {
                    log::debug!("요청 본문 해석 실패 ({}): {}", kind, detail.message);
                    return Ok(reject(req, &AppError::ValidationError(vec![detail])));
                }
            };

            if let Err(details) = DtoFactory::validate(kind, &payload) {
                log::debug!("입력값 검증 실패 ({}): {}개 항목", kind, details.len());
                return Ok(reject(req, &AppError::ValidationError(details)));
            }

            let dto = DtoFactory::create_request(kind, &payload);
            req.extensions_mut().insert(ValidatedRequest(dto));

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 빈 본문은 빈 객체로 취급하여 필드별 누락 항목이 보고되도록 합니다.
fn parse_body(body: &[u8]) -> Result<Value, FieldError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }

    serde_json::from_slice(body).map_err(|_| FieldError::new("body", "body must be valid JSON"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_becomes_empty_object() {
        assert_eq!(parse_body(b"  \n"), Ok(serde_json::json!({})));
    }

    #[test]
    fn test_malformed_json_is_reported_on_body() {
        let detail = parse_body(b"{\"title\": ").unwrap_err();
        assert_eq!(detail.field, "body");
        assert!(detail.message.starts_with("body"));
    }
}
