//! # 직원 관리 서비스 구현
//!
//! 입력 검증과 저장소 호출을 조합하는 비즈니스 로직 계층입니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! CreateEmployeeRequest
//!        │ normalize (trim)
//!        ▼
//!   NewEmployee ──check──▶ ValidationErrors (모든 실패 필드, 저장소 호출 없음)
//!        │
//!        ▼
//! EmployeeRepository::create ──▶ Employee | DuplicatePhone | Database
//! ```
//!
//! 모든 결과는 [`Timed`]로 감싸 반환되어, HTTP 계층이 저장소 시간을
//! 접근 로그에 기록할 수 있습니다.

use std::sync::Arc;

use log::{debug, info};
use thiserror::Error;
use uuid::Uuid;

use crate::core::timing::Timed;
use crate::domain::dto::employees::CreateEmployeeRequest;
use crate::domain::entities::employees::Employee;
use crate::domain::validation::ValidationErrors;
use crate::repositories::employees::{EmployeeRepository, StoreError};

/// 서비스 계층 에러
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(ValidationErrors),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Timed<Result<T, ServiceError>>;

/// 직원 관리 서비스
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeRepository>) -> Self {
        Self { store }
    }

    /// 새 직원을 등록합니다.
    ///
    /// 모든 필드를 정규화한 뒤 검증합니다. 하나라도 실패하면 실패한 모든 필드를
    /// 담은 `ServiceError::Validation`을 반환하며 저장소는 호출하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `ServiceError::Validation` - 하나 이상의 필드 검증 실패
    /// * `ServiceError::Store(StoreError::DuplicatePhone)` - 이미 등록된 전화번호
    /// * `ServiceError::Store(StoreError::Database)` - 저장소 장애
    pub async fn create_employee(&self, request: CreateEmployeeRequest) -> ServiceResult<Employee> {
        let employee = request.normalize();

        if let Err(errors) = employee.check() {
            debug!("직원 생성 요청 검증 실패: {} 필드", errors.len());
            return Timed::untimed(Err(ServiceError::Validation(errors)));
        }

        let timed = self.store.create(&employee).await.map_err(ServiceError::from);
        if let Ok(created) = &timed.value {
            info!("직원 등록 완료: {}", created.id);
        }
        timed
    }

    /// ID로 직원을 조회합니다.
    pub async fn get_employee_by_id(&self, id: Uuid) -> ServiceResult<Employee> {
        self.store.get_by_id(id).await.map_err(ServiceError::from)
    }

    /// 저장소 연결 상태를 확인합니다.
    pub async fn health_check(&self) -> ServiceResult<()> {
        self.store.ping().await.map_err(ServiceError::from)
    }
}
