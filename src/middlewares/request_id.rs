//! 요청 ID 미들웨어
//!
//! 클라이언트가 보낸 `X-Request-ID` 헤더를 그대로 사용하고, 없으면 UUID v4를 생성합니다.
//! 요청 ID는 request extension에 저장되어 핸들러와 로그에서 사용되며,
//! 모든 응답의 `X-Request-ID` 헤더로 돌려보내집니다.

use std::fmt;
use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::HeaderName;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use uuid::Uuid;

use crate::middlewares::request_id_inner::RequestIdMiddlewareService;

/// 요청 ID 헤더 이름
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// 요청 하나에 부여된 식별자
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    /// 헤더 값이 비어 있지 않으면 그대로 사용하고, 아니면 새로 생성합니다.
    pub fn from_header_or_new(header: Option<&str>) -> Self {
        match header.map(str::trim) {
            Some(value) if !value.is_empty() => Self(value.to_string()),
            _ => Self::generate(),
        }
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 요청 extension에 저장된 ID
    pub fn current(req: &HttpRequest) -> Option<RequestId> {
        req.extensions().get::<RequestId>().cloned()
    }

    /// 로그용 ID. 미들웨어를 거치지 않았으면 `"-"`.
    pub fn of(req: &HttpRequest) -> String {
        Self::current(req)
            .map(|id| id.0)
            .unwrap_or_else(|| "-".to_string())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 핸들러 인자로 요청 ID를 받을 수 있게 합니다.
impl FromRequest for RequestId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(Self::current(req).unwrap_or_else(RequestId::generate)))
    }
}

/// 요청 ID 미들웨어
///
/// ```rust,ignore
/// App::new().wrap(RequestIdMiddleware)
/// ```
#[derive(Clone, Copy, Default)]
pub struct RequestIdMiddleware;

impl<S, B> Transform<S, ServiceRequest> for RequestIdMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = RequestIdMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestIdMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
