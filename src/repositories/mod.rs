//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소는 [`EmployeeRepository`](employees::EmployeeRepository) 트레이트 뒤에 숨겨져 있으며,
//! 시작 시점에 구현체 하나를 골라 `Arc<dyn EmployeeRepository>`로 서비스에 주입합니다.
//!
//! # Features
//!
//! - PostgreSQL 기반 영구 저장소 (`sqlx` 연결 풀)
//! - 로컬 실행과 테스트를 위한 메모리 저장소
//! - 모든 연산 결과에 저장소 왕복 시간을 함께 반환
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::employees::{EmployeeRepository, PgEmployeeRepository};
//!
//! let store: Arc<dyn EmployeeRepository> = Arc::new(PgEmployeeRepository::new(pool));
//! let found = store.get_by_id(id).await;
//! println!("db time: {:?}", found.storage_latency);
//! ```

pub mod employees;
