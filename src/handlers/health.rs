//! 헬스 체크 핸들러

use actix_web::{HttpResponse, web};
use log::warn;
use serde::{Deserialize, Serialize};
use tokio::time::timeout;

use super::{error_response, respond};
use crate::core::errors::AppError;
use crate::middlewares::RequestId;
use crate::routes::AppState;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

/// `GET /v1/healthz`
///
/// 저장소에 연결할 수 있으면 `200 {"status":"ok"}`, 아니면 `503 unhealthy`.
/// 헬스 체크 마감 시간(기본 2초)을 넘겨도 `503`입니다.
pub async fn health_check(state: web::Data<AppState>, request_id: RequestId) -> HttpResponse {
    let deadline = state.deadlines.health;

    match timeout(deadline, state.employees.health_check()).await {
        Ok(timed) => respond(
            &request_id,
            "health_check",
            timed.map_err(|e| {
                warn!("저장소 헬스 체크 실패: {}", e);
                AppError::Unhealthy
            }),
            |()| {
                HttpResponse::Ok().json(HealthResponse {
                    status: "ok".to_string(),
                })
            },
        ),
        Err(_) => {
            warn!("저장소 헬스 체크 시간 초과 ({:?})", deadline);
            error_response(&request_id, "health_check", AppError::Unhealthy)
        }
    }
}
