//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Middlewares - 패닉 복구, 요청 ID, 접근 로그
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 검증, 비즈니스 로직                  ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 핸들러 규칙
//!
//! - 서비스/저장소 호출은 요청별 마감 시간(`tokio::time::timeout`)으로 감쌉니다.
//! - 서비스 결과의 저장소 시간은 응답 extension([`StorageLatency`])으로 접근 로그에 전달합니다.
//! - 에러는 [`AppError`]로 변환되어 고정된 에러 코드 응답이 됩니다.
//!   내부 에러만 서버 로그에 남깁니다.

pub mod employees;
pub mod extractors;
pub mod fallback;
pub mod health;

use actix_web::{HttpResponse, ResponseError};
use log::error;

use crate::core::errors::AppError;
use crate::core::timing::Timed;
use crate::middlewares::{RequestId, StorageLatency};

/// 서비스 결과를 HTTP 응답으로 변환합니다.
///
/// 저장소를 거친 결과라면 저장소 시간을 응답 extension에 기록합니다.
pub(crate) fn respond<T, F>(
    request_id: &RequestId,
    operation: &'static str,
    timed: Timed<Result<T, AppError>>,
    on_success: F,
) -> HttpResponse
where
    F: FnOnce(T) -> HttpResponse,
{
    let Timed {
        value,
        storage_latency,
    } = timed;

    let mut response = match value {
        Ok(value) => on_success(value),
        Err(error) => error_response(request_id, operation, error),
    };

    if let Some(latency) = storage_latency {
        response.extensions_mut().insert(StorageLatency(latency));
    }
    response
}

/// 에러 응답을 만들고, 서버 측 장애라면 요청 ID와 함께 로그를 남깁니다.
pub(crate) fn error_response(
    request_id: &RequestId,
    operation: &'static str,
    error: AppError,
) -> HttpResponse {
    if error.is_internal() {
        error!(
            target: "http",
            request_id = request_id.as_str(),
            operation = operation,
            category = error.code();
            "{}", error
        );
    }
    error.error_response()
}
