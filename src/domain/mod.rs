//! # Domain Layer Module
//!
//! 직원 도메인의 엔티티, 데이터 전송 객체(DTO), 검증 규칙을 담당하는 계층입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities    - 저장소에 영속되는 직원 엔티티
//! ├── dto         - HTTP 요청/응답 계약
//! └── validation  - 이름/전화번호/도시 검증 규칙 (순수 함수)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod entities;
pub mod dto;
pub mod validation;
