//! # 직원 저장소 추상화
//!
//! 서비스 계층은 이 트레이트에만 의존하므로 PostgreSQL과 메모리 구현체를
//! 같은 방식으로 사용할 수 있습니다.
//!
//! ## 에러 매핑
//!
//! | 상황 | StoreError |
//! |------|------------|
//! | 전화번호 unique 제약 위반 | `DuplicatePhone` |
//! | ID에 해당하는 행 없음 | `NotFound` |
//! | 그 외 모든 드라이버/연결 에러 | `Database` |

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::core::timing::Timed;
use crate::domain::dto::employees::NewEmployee;
use crate::domain::entities::employees::Employee;

/// 저장소 계층 에러
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("phone number is already registered")]
    DuplicatePhone,

    #[error("employee not found")]
    NotFound,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// 저장소 연산 결과 (저장소 왕복 시간 포함)
pub type StoreResult<T> = Timed<Result<T, StoreError>>;

/// 직원 저장소
///
/// 모든 메서드는 결과와 함께 저장소 왕복 시간을 [`Timed`]로 반환합니다.
/// 구현체는 여러 요청에서 동시에 호출될 수 있습니다.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// 새 직원을 저장합니다.
    ///
    /// ID, `created_at`, `updated_at`은 저장소가 채웁니다.
    /// 같은 전화번호가 이미 있으면 `StoreError::DuplicatePhone`을 반환하며,
    /// 동시에 들어온 같은 전화번호 요청 중 정확히 하나만 성공해야 합니다.
    async fn create(&self, employee: &NewEmployee) -> StoreResult<Employee>;

    /// ID로 직원을 조회합니다. 없으면 `StoreError::NotFound`.
    async fn get_by_id(&self, id: Uuid) -> StoreResult<Employee>;

    /// 저장소 연결 상태를 확인합니다.
    async fn ping(&self) -> StoreResult<()>;
}
