//! # 직원 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고,
//! `validator` 크레이트를 통해 검증하는 역할을 담당합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성, 알 수 없는 필드 거부
//! 2. **정규화**: 앞뒤 공백 제거
//! 3. **형식 검증**: 길이, 문자 집합, E.164 전화번호 형식

pub mod create_employee;

pub use create_employee::{CreateEmployeeRequest, NewEmployee};
