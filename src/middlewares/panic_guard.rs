//! 패닉 복구 미들웨어
//!
//! 라우트 처리 중 발생한 패닉을 잡아 500 `internal_error` 응답으로 바꿉니다.
//! 패닉 내용은 서버 로그에만 남기고 클라이언트에는 일반 에러 본문만 보냅니다.
//! 애플리케이션 전체에서 가장 바깥쪽의 이 미들웨어 한 곳에서만 패닉을 처리합니다.
//!
//! 요청 ID는 안쪽 서비스를 호출하기 전에 확정해 `X-Request-ID` 요청 헤더에 기록하므로,
//! 안쪽의 요청 ID 미들웨어와 복구 응답이 같은 ID를 사용합니다.
//! 라우터가 경로 파라미터를 기록하려면 요청을 단독으로 소유해야 하므로
//! 안쪽 서비스가 실행되는 동안 `HttpRequest` 복제본을 들고 있지 않습니다.

use std::any::Any;
use std::future::{Ready, ready};
use std::panic::AssertUnwindSafe;
use std::rc::Rc;

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::error::InternalError;
use actix_web::http::header::HeaderValue;
use actix_web::{Error, ResponseError};
use futures_util::FutureExt;
use futures_util::future::LocalBoxFuture;
use log::error;

use crate::core::errors::AppError;
use crate::middlewares::request_id::{REQUEST_ID_HEADER, RequestId};

/// 패닉 복구 미들웨어
#[derive(Clone, Copy, Default)]
pub struct PanicGuardMiddleware;

impl<S, B> Transform<S, ServiceRequest> for PanicGuardMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = PanicGuardMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(PanicGuardMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct PanicGuardMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for PanicGuardMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        let request_id = RequestId::from_header_or_new(
            req.headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok()),
        );
        let header_value = HeaderValue::from_str(request_id.as_str()).ok();
        if let Some(value) = &header_value {
            req.headers_mut().insert(REQUEST_ID_HEADER, value.clone());
        }

        let method = req.method().to_string();
        let path = req.path().to_string();

        Box::pin(async move {
            // 핸들러 호출 자체(동기 구간)도 future 안에서 실행되어야 함께 잡힌다
            let outcome = AssertUnwindSafe(async move { service.call(req).await })
                .catch_unwind()
                .await;

            let payload = match outcome {
                Ok(result) => return result,
                Err(payload) => payload,
            };

            error!(
                target: "http",
                request_id = request_id.as_str(),
                method = method.as_str(),
                path = path.as_str(),
                reason = panic_message(payload.as_ref());
                "panic_recovered"
            );

            let mut response = AppError::Internal("panic".to_string()).error_response();
            if let Some(value) = header_value {
                response.headers_mut().insert(REQUEST_ID_HEADER, value);
            }
            Err(InternalError::from_response("panic", response).into())
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test as actix_test, web};
    use uuid::Uuid;

    use crate::core::errors::ErrorResponse;
    use crate::middlewares::RequestIdMiddleware;

    async fn explode() -> HttpResponse {
        panic!("handler exploded with secret 10.0.0.5");
    }

    async fn fine() -> HttpResponse {
        HttpResponse::Ok().body("fine")
    }

    async fn echo(id: RequestId) -> HttpResponse {
        HttpResponse::Ok().body(id.to_string())
    }

    async fn recovered_response<S, R, B>(app: &S, req: R) -> HttpResponse
    where
        S: Service<R, Response = ServiceResponse<B>, Error = Error>,
    {
        match app.call(req).await {
            Ok(res) => panic!("expected a recovered panic, got {}", res.status()),
            Err(err) => err.error_response(),
        }
    }

    fn request_id_of(res: &HttpResponse) -> Option<String> {
        res.headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    }

    #[test]
    fn test_panic_message_extracts_strings() {
        let boxed: Box<dyn Any + Send> = Box::new("static");
        assert_eq!(panic_message(boxed.as_ref()), "static");

        let boxed: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(boxed.as_ref()), "owned");

        let boxed: Box<dyn Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(boxed.as_ref()), "unknown panic payload");
    }

    #[actix_web::test]
    async fn test_panic_becomes_internal_error() {
        let app = actix_test::init_service(
            App::new()
                .wrap(PanicGuardMiddleware)
                .route("/boom", web::get().to(explode))
                .route("/fine", web::get().to(fine)),
        )
        .await;

        let res = recovered_response(
            &app,
            actix_test::TestRequest::get().uri("/boom").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let generated = request_id_of(&res).expect("request id header");
        assert!(Uuid::parse_str(&generated).is_ok());

        let bytes = to_bytes(res.into_body()).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.code, "internal_error");
        assert!(!body.message.contains("10.0.0.5"));

        // 패닉 이후에도 같은 앱이 계속 요청을 처리한다
        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri("/fine").to_request())
                .await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_routed_requests_pass_through_untouched() {
        let app = actix_test::init_service(
            App::new()
                .wrap(RequestIdMiddleware)
                .wrap(PanicGuardMiddleware)
                .route("/items/{id}", web::get().to(echo)),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/items/42")
            .insert_header(("X-Request-ID", "  outer-id  "))
            .to_request();
        let res = actix_test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers().get(REQUEST_ID_HEADER).and_then(|v| v.to_str().ok()),
            Some("outer-id")
        );
        assert_eq!(actix_test::read_body(res).await, "outer-id");
    }

    #[actix_web::test]
    async fn test_generated_id_is_shared_with_inner_middleware() {
        let app = actix_test::init_service(
            App::new()
                .wrap(RequestIdMiddleware)
                .wrap(PanicGuardMiddleware)
                .route("/", web::get().to(echo)),
        )
        .await;

        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request()).await;

        let header = res
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
            .expect("request id header");
        assert!(Uuid::parse_str(&header).is_ok());
        assert_eq!(actix_test::read_body(res).await, header.as_str());
    }
}
