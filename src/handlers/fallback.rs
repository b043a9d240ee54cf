//! 등록되지 않은 경로/메서드 처리

use actix_web::http::header;
use actix_web::{HttpResponse, ResponseError};

use crate::core::errors::AppError;

/// 리소스는 있지만 메서드가 맞지 않는 경우 (405, `Allow` 헤더 포함)
pub async fn method_not_allowed(allow: &'static str) -> HttpResponse {
    let mut response = AppError::MethodNotAllowed.error_response();
    response
        .headers_mut()
        .insert(header::ALLOW, header::HeaderValue::from_static(allow));
    response
}

/// 어떤 리소스와도 일치하지 않는 경로 (404)
pub async fn route_not_found() -> HttpResponse {
    AppError::RouteNotFound.error_response()
}
