//! RequestIdMiddleware의 요청 처리 로직
use std::rc::Rc;

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::error::InternalError;
use actix_web::http::header::{HeaderMap, HeaderValue};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;

use crate::middlewares::request_id::{REQUEST_ID_HEADER, RequestId};

/// 요청 ID를 부여하고 응답 헤더에 기록하는 서비스
pub struct RequestIdMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestIdMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        let request_id = RequestId::from_header_or_new(
            req.headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok()),
        );
        req.extensions_mut().insert(request_id.clone());

        Box::pin(async move {
            match service.call(req).await {
                Ok(mut res) => {
                    attach(res.headers_mut(), &request_id);
                    Ok(res)
                }
                // 에러는 응답으로 렌더링한 뒤 헤더를 붙여 그대로 위로 전달
                Err(err) => {
                    let mut res = err.error_response();
                    attach(res.headers_mut(), &request_id);
                    Err(InternalError::from_response(err, res).into())
                }
            }
        })
    }
}

fn attach(headers: &mut HeaderMap, request_id: &RequestId) {
    match HeaderValue::from_str(request_id.as_str()) {
        Ok(value) => {
            headers.insert(REQUEST_ID_HEADER, value);
        }
        Err(e) => log::error!("요청 ID를 헤더로 변환할 수 없습니다: {}", e),
    }
}
