//! 접근 로그 미들웨어
//!
//! 요청마다 구조화된 로그 한 줄(`http_request`)을 남깁니다.
//! 핸들러가 응답 extension에 [`StorageLatency`]를 넣었다면 저장소 시간도 함께 기록합니다.

use std::future::{Ready, ready};
use std::rc::Rc;
use std::time::{Duration, Instant};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::Error;
use futures_util::future::LocalBoxFuture;
use log::info;

use crate::middlewares::request_id::RequestId;

/// 응답을 만드는 동안 저장소에서 보낸 시간
///
/// 핸들러가 응답 extension으로 전달합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageLatency(pub Duration);

/// 접근 로그 미들웨어
#[derive(Clone, Copy, Default)]
pub struct AccessLogMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AccessLogMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AccessLogMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessLogMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct AccessLogMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AccessLogMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let started = Instant::now();

        let entry = AccessEntry {
            request_id: RequestId::of(req.request()),
            method: req.method().to_string(),
            path: req.path().to_string(),
            remote_addr: req
                .peer_addr()
                .map(|addr| addr.to_string())
                .unwrap_or_else(|| "-".to_string()),
        };

        Box::pin(async move {
            let result = service.call(req).await;

            let (status, storage) = match &result {
                Ok(res) => (
                    res.status().as_u16(),
                    res.response().extensions().get::<StorageLatency>().copied(),
                ),
                Err(err) => (err.as_response_error().status_code().as_u16(), None),
            };
            entry.write(status, started.elapsed(), storage.map(|s| s.0));

            result
        })
    }
}

struct AccessEntry {
    request_id: String,
    method: String,
    path: String,
    remote_addr: String,
}

impl AccessEntry {
    fn write(&self, status: u16, latency: Duration, storage: Option<Duration>) {
        let latency_ms = millis(latency);

        match storage {
            Some(db) => info!(
                target: "http",
                request_id = self.request_id.as_str(),
                method = self.method.as_str(),
                path = self.path.as_str(),
                status = status,
                latency_ms = latency_ms,
                db_ms = millis(db),
                remote_addr = self.remote_addr.as_str();
                "http_request"
            ),
            None => info!(
                target: "http",
                request_id = self.request_id.as_str(),
                method = self.method.as_str(),
                path = self.path.as_str(),
                status = status,
                latency_ms = latency_ms,
                remote_addr = self.remote_addr.as_str();
                "http_request"
            ),
        }
    }
}

fn millis(duration: Duration) -> f64 {
    duration.as_micros() as f64 / 1000.0
}
