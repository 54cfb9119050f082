use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload};

use crate::core::AppError;
use crate::domain::dto::{DtoError, RequestDto};

/// 검증 미들웨어가 요청 확장에 저장하는 DTO
#[derive(Debug, Clone)]
pub struct ValidatedRequest(pub RequestDto);

/// 검증을 통과한 요청 DTO 추출자
///
/// 라우트에 [`ValidationMiddleware`](crate::middlewares::ValidationMiddleware)가 연결되지 않았거나
/// 다른 종류로 연결된 경우는 구성 오류이므로 500으로 응답합니다.
#[derive(Debug, Clone)]
pub struct Validated<T>(pub T);

impl<T> Validated<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for Validated<T>
where
    T: TryFrom<RequestDto, Error = DtoError> + 'static,
{
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match req.extensions_mut().remove::<ValidatedRequest>() {
            Some(ValidatedRequest(dto)) => T::try_from(dto).map(Validated).map_err(AppError::from),
            None => Err(AppError::InternalError(format!(
                "검증 미들웨어 없이 검증된 요청을 추출하려 했습니다: {}",
                req.path()
            ))),
        };

        if let Err(err) = &result {
            log::error!("검증된 요청 추출 실패: {}", err);
        }

        ready(result)
    }
}
