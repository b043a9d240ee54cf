//! 직원 디렉터리 서비스 백엔드
//!
//! 직원 레코드를 등록하고 조회하는 작은 HTTP JSON 서비스입니다.
//! 입력값을 정규화하고 모든 필드를 한 번에 검증하며,
//! 전화번호 중복은 저장소의 unique 제약으로만 판단합니다.
//!
//! # Features
//!
//! - **직원 등록/조회**: `POST /v1/employees`, `GET /v1/employees/{id}`
//! - **헬스 체크**: `GET /v1/healthz`
//! - **검증 에러 집계**: 실패한 모든 필드를 422 응답의 `details`로 반환
//! - **요청 추적**: 모든 응답에 `X-Request-ID` 헤더, 구조화된 접근 로그
//! - **PostgreSQL**: `sqlx` 연결 풀과 파일 기반 마이그레이션
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   Middlewares   │ ← 패닉 복구, 요청 ID, 접근 로그
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 마감 시간
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 정규화, 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   PostgreSQL    │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use employee_service::repositories::employees::InMemoryEmployeeRepository;
//! use employee_service::services::employees::EmployeeService;
//!
//! let service = EmployeeService::new(Arc::new(InMemoryEmployeeRepository::new()));
//! let created = service.create_employee(request).await.into_inner()?;
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
