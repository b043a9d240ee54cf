//! # Application Error Handling System
//!
//! HTTP 계층에서 사용하는 통합 에러 처리 시스템입니다.
//! 서비스/저장소 계층의 에러를 고정된 에러 코드 어휘로 변환하고,
//! `actix_web::ResponseError` 구현을 통해 일관된 JSON 응답을 생성합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | code |
//! |----------|-------------|------|
//! | `Validation` | 422 Unprocessable Entity | `validation_error` (+ 필드별 `details`) |
//! | `DuplicatePhone` | 409 Conflict | `duplicate_phone` |
//! | `NotFound` / `RouteNotFound` | 404 Not Found | `not_found` |
//! | `InvalidJson` | 400 Bad Request | `invalid_json` |
//! | `InvalidContentType` | 400 Bad Request | `invalid_content_type` |
//! | `InvalidId` | 400 Bad Request | `invalid_id` |
//! | `MethodNotAllowed` | 405 Method Not Allowed | `method_not_allowed` |
//! | `Internal` | 500 Internal Server Error | `internal_error` |
//! | `Unhealthy` | 503 Service Unavailable | `unhealthy` |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "code": "validation_error",
//!   "message": "입력값 검증에 실패했습니다",
//!   "details": { "fullName": "최소 2자 이상이어야 합니다" }
//! }
//! ```
//!
//! `Internal`의 상세 내용은 서버 로그에만 남기고 클라이언트에는 노출하지 않습니다.

use std::collections::BTreeMap;

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::validation::ValidationErrors;
use crate::repositories::employees::StoreError;
use crate::services::employees::ServiceError;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 하나 이상의 필드 검증 실패 (422)
    #[error("입력값 검증에 실패했습니다")]
    Validation(ValidationErrors),

    /// 전화번호 unique 제약 위반 (409)
    #[error("이미 등록된 전화번호입니다")]
    DuplicatePhone,

    /// 직원을 찾을 수 없음 (404)
    #[error("직원을 찾을 수 없습니다")]
    NotFound,

    /// 등록되지 않은 경로 (404)
    #[error("요청한 경로를 찾을 수 없습니다")]
    RouteNotFound,

    /// 잘못된 JSON 본문 (400)
    #[error("유효하지 않은 JSON 본문입니다")]
    InvalidJson,

    /// Content-Type이 application/json이 아님 (400)
    #[error("Content-Type은 application/json이어야 합니다")]
    InvalidContentType,

    /// 경로의 ID가 UUID 형식이 아님 (400)
    #[error("유효하지 않은 ID 형식입니다")]
    InvalidId,

    /// 지원하지 않는 HTTP 메서드 (405)
    #[error("지원하지 않는 메서드입니다")]
    MethodNotAllowed,

    /// 내부 서버 에러 (500). 내용은 로그에만 기록됩니다.
    #[error("Internal server error: {0}")]
    Internal(String),

    /// 헬스 체크 실패 (503)
    #[error("서비스를 사용할 수 없습니다")]
    Unhealthy,
}

/// 에러 응답 본문
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, String>>,
}

impl AppError {
    /// 고정된 에러 코드 어휘
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation_error",
            AppError::DuplicatePhone => "duplicate_phone",
            AppError::NotFound | AppError::RouteNotFound => "not_found",
            AppError::InvalidJson => "invalid_json",
            AppError::InvalidContentType => "invalid_content_type",
            AppError::InvalidId => "invalid_id",
            AppError::MethodNotAllowed => "method_not_allowed",
            AppError::Internal(_) => "internal_error",
            AppError::Unhealthy => "unhealthy",
        }
    }

    /// 클라이언트에 노출되는 메시지
    pub fn public_message(&self) -> String {
        match self {
            AppError::Internal(_) => "내부 서버 에러가 발생했습니다".to_string(),
            other => other.to_string(),
        }
    }

    /// 서버 측에서 처리해야 하는 장애인지 여부
    pub fn is_internal(&self) -> bool {
        matches!(self, AppError::Internal(_) | AppError::Unhealthy)
    }

    pub fn to_body(&self) -> ErrorResponse {
        let details = match self {
            AppError::Validation(errors) => Some(
                errors
                    .iter()
                    .map(|e| (e.field.clone(), e.message.clone()))
                    .collect(),
            ),
            _ => None,
        };

        ErrorResponse {
            code: self.code().to_string(),
            message: self.public_message(),
            details,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::DuplicatePhone => StatusCode::CONFLICT,
            AppError::NotFound | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::InvalidJson | AppError::InvalidContentType | AppError::InvalidId => {
                StatusCode::BAD_REQUEST
            }
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_body())
    }
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::DuplicatePhone => AppError::DuplicatePhone,
            StoreError::NotFound => AppError::NotFound,
            StoreError::Database(e) => AppError::Internal(format!("database: {e}")),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::Validation(errors) => AppError::Validation(errors),
            ServiceError::Store(e) => AppError::from(e),
        }
    }
}

impl From<JsonPayloadError> for AppError {
    fn from(error: JsonPayloadError) -> Self {
        match error {
            JsonPayloadError::ContentType => AppError::InvalidContentType,
            _ => AppError::InvalidJson,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_of(error: &AppError) -> ErrorResponse {
        error.to_body()
    }

    #[test]
    fn test_status_codes_follow_error_vocabulary() {
        let cases = [
            (AppError::Validation(ValidationErrors::new()), StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            (AppError::DuplicatePhone, StatusCode::CONFLICT, "duplicate_phone"),
            (AppError::NotFound, StatusCode::NOT_FOUND, "not_found"),
            (AppError::RouteNotFound, StatusCode::NOT_FOUND, "not_found"),
            (AppError::InvalidJson, StatusCode::BAD_REQUEST, "invalid_json"),
            (AppError::InvalidContentType, StatusCode::BAD_REQUEST, "invalid_content_type"),
            (AppError::InvalidId, StatusCode::BAD_REQUEST, "invalid_id"),
            (AppError::MethodNotAllowed, StatusCode::METHOD_NOT_ALLOWED, "method_not_allowed"),
            (AppError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
            (AppError::Unhealthy, StatusCode::SERVICE_UNAVAILABLE, "unhealthy"),
        ];

        for (error, status, code) in cases {
            assert_eq!(error.error_response().status(), status, "{error:?}");
            assert_eq!(error.code(), code);
        }
    }

    #[test]
    fn test_validation_error_carries_field_details() {
        let mut errors = ValidationErrors::new();
        errors.add("fullName", "too short");
        errors.add("phone", "bad format");

        let body = body_of(&AppError::Validation(errors));
        let details = body.details.expect("details present");

        assert_eq!(details.get("fullName").map(String::as_str), Some("too short"));
        assert_eq!(details.get("phone").map(String::as_str), Some("bad format"));
        assert_eq!(details.len(), 2);
    }

    #[test]
    fn test_internal_error_does_not_leak_detail() {
        let body = body_of(&AppError::Internal("connection refused at 10.0.0.5".into()));

        assert_eq!(body.code, "internal_error");
        assert!(!body.message.contains("10.0.0.5"));
        assert!(body.details.is_none());
    }

    #[test]
    fn test_details_are_omitted_when_absent() {
        let json = serde_json::to_value(body_of(&AppError::NotFound)).unwrap();
        assert!(json.get("details").is_none());
        assert_eq!(json["code"], "not_found");
    }

    #[test]
    fn test_store_errors_translate_to_domain_errors() {
        assert!(matches!(AppError::from(StoreError::DuplicatePhone), AppError::DuplicatePhone));
        assert!(matches!(AppError::from(StoreError::NotFound), AppError::NotFound));
        assert!(matches!(
            AppError::from(StoreError::Database(sqlx::Error::PoolTimedOut)),
            AppError::Internal(_)
        ));
    }

    #[test]
    fn test_json_payload_errors_translate_to_client_errors() {
        assert!(matches!(AppError::from(JsonPayloadError::ContentType), AppError::InvalidContentType));
        assert!(matches!(
            AppError::from(JsonPayloadError::Overflow { limit: 10 }),
            AppError::InvalidJson
        ));
    }
}
