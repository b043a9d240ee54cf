//! 직원 데이터 액세스 계층
//!
//! - [`employee_repo`] - 저장소 트레이트와 에러 타입
//! - [`pg_employee_repo`] - PostgreSQL 구현체
//! - [`memory_employee_repo`] - 메모리 구현체

pub mod employee_repo;
pub mod memory_employee_repo;
pub mod pg_employee_repo;

pub use employee_repo::{EmployeeRepository, StoreError};
pub use memory_employee_repo::InMemoryEmployeeRepository;
pub use pg_employee_repo::PgEmployeeRepository;
