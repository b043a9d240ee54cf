//! # PostgreSQL 직원 저장소
//!
//! `employees` 테이블에 대한 모든 SQL을 담당합니다.
//!
//! ## 스키마
//!
//! - **테이블**: `employees`
//! - **기본 키**: `id UUID DEFAULT gen_random_uuid()`
//! - **unique 제약**: `employees_phone_key (phone)`
//!
//! 전화번호 중복은 조회 후 삽입이 아니라 unique 제약 위반으로만 판단하므로,
//! 동시에 같은 번호로 생성 요청이 와도 정확히 하나만 성공합니다.

use async_trait::async_trait;
use log::{debug, error};
use sqlx::PgPool;
use uuid::Uuid;

use super::employee_repo::{EmployeeRepository, StoreError, StoreResult};
use crate::core::timing::Timed;
use crate::domain::dto::employees::NewEmployee;
use crate::domain::entities::employees::Employee;

const INSERT_EMPLOYEE: &str = "\
    INSERT INTO employees (full_name, phone, city) \
    VALUES ($1, $2, $3) \
    RETURNING id, full_name, phone, city, created_at, updated_at";

const SELECT_EMPLOYEE_BY_ID: &str = "\
    SELECT id, full_name, phone, city, created_at, updated_at \
    FROM employees WHERE id = $1";

/// PostgreSQL 기반 직원 저장소
#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn create(&self, employee: &NewEmployee) -> StoreResult<Employee> {
        let timed = Timed::measure(
            sqlx::query_as::<_, Employee>(INSERT_EMPLOYEE)
                .bind(&employee.full_name)
                .bind(&employee.phone)
                .bind(&employee.city)
                .fetch_one(&self.pool),
        )
        .await;

        timed.map(|result| match result {
            Ok(created) => {
                debug!("직원 생성 완료: {}", created.id);
                Ok(created)
            }
            Err(e) => Err(classify_insert_error(e)),
        })
    }

    async fn get_by_id(&self, id: Uuid) -> StoreResult<Employee> {
        let timed = Timed::measure(
            sqlx::query_as::<_, Employee>(SELECT_EMPLOYEE_BY_ID)
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await;

        timed.map(|result| match result {
            Ok(Some(employee)) => Ok(employee),
            Ok(None) => Err(StoreError::NotFound),
            Err(e) => {
                error!("직원 조회 실패: {}", e);
                Err(StoreError::Database(e))
            }
        })
    }

    async fn ping(&self) -> StoreResult<()> {
        Timed::measure(sqlx::query("SELECT 1").execute(&self.pool))
            .await
            .map(|result| result.map(|_| ()).map_err(StoreError::from))
    }
}

/// 삽입 에러 중 unique 제약 위반만 `DuplicatePhone`으로 분류합니다.
fn classify_insert_error(error: sqlx::Error) -> StoreError {
    match &error {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            debug!(
                "전화번호 중복 (constraint: {})",
                db.constraint().unwrap_or("unknown")
            );
            StoreError::DuplicatePhone
        }
        _ => {
            error!("직원 생성 실패: {}", error);
            StoreError::Database(error)
        }
    }
}
