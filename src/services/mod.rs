//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 시작 시점에 한 번 생성되어 `web::Data`로 핸들러에 공유됩니다.
//!
//! # Features
//!
//! - 직원 생성 시 입력 정규화 및 모든 필드 검증 (에러 집계)
//! - 직원 조회 및 저장소 헬스 체크 위임
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::employees::EmployeeService;
//!
//! let service = EmployeeService::new(store);
//! let created = service.create_employee(request).await;
//! ```

pub mod employees;
