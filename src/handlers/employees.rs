//! # Employee HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/v1/employees` | 직원 등록 | 201 Created (+ `Location`) |
//! | `GET` | `/v1/employees/{id}` | 직원 조회 | 200 OK |
//!
//! ## 요청 예제
//!
//! ```bash
//! curl -X POST http://localhost:8080/v1/employees \
//!   -H "Content-Type: application/json" \
//!   -d '{"fullName":"Иван Иванов","phone":"+79991234567","city":"Москва"}'
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, web};
use tokio::time::timeout;
use uuid::Uuid;

use super::extractors::StrictJson;
use super::{error_response, respond};
use crate::core::errors::AppError;
use crate::domain::dto::employees::{CreateEmployeeRequest, EmployeeResponse};
use crate::middlewares::RequestId;
use crate::routes::AppState;

/// 직원 등록
///
/// # Returns
///
/// * `201 Created` - 생성된 직원, `Location: /v1/employees/{id}`
///
/// # Errors
///
/// * `400 invalid_content_type` / `400 invalid_json` - 본문 형식 오류
/// * `422 validation_error` - 실패한 모든 필드가 `details`에 포함
/// * `409 duplicate_phone` - 이미 등록된 전화번호
/// * `500 internal_error` - 저장소 장애 또는 마감 시간 초과
pub async fn create_employee(
    state: web::Data<AppState>,
    request_id: RequestId,
    payload: StrictJson<CreateEmployeeRequest>,
) -> HttpResponse {
    let deadline = state.deadlines.request;

    match timeout(deadline, state.employees.create_employee(payload.into_inner())).await {
        Ok(timed) => respond(
            &request_id,
            "create_employee",
            timed.map_err(AppError::from),
            |employee| {
                HttpResponse::Created()
                    .insert_header((header::LOCATION, employee.location()))
                    .json(EmployeeResponse::from(employee))
            },
        ),
        Err(_) => error_response(
            &request_id,
            "create_employee",
            AppError::Internal(format!("deadline of {deadline:?} exceeded")),
        ),
    }
}

/// ID로 직원 조회
///
/// # Errors
///
/// * `400 invalid_id` - UUID 형식이 아닌 ID
/// * `404 not_found` - 해당 ID의 직원 없음
/// * `500 internal_error` - 저장소 장애 또는 마감 시간 초과
pub async fn get_employee(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
) -> HttpResponse {
    let Ok(id) = Uuid::parse_str(path.trim()) else {
        return error_response(&request_id, "get_employee", AppError::InvalidId);
    };

    let deadline = state.deadlines.request;

    match timeout(deadline, state.employees.get_employee_by_id(id)).await {
        Ok(timed) => respond(
            &request_id,
            "get_employee",
            timed.map_err(AppError::from),
            |employee| HttpResponse::Ok().json(EmployeeResponse::from(employee)),
        ),
        Err(_) => error_response(
            &request_id,
            "get_employee",
            AppError::Internal(format!("deadline of {deadline:?} exceeded")),
        ),
    }
}
