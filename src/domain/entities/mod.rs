//! # Domain Entities Module
//!
//! 저장소에 영속되는 도메인 엔티티들을 정의합니다.
//! 엔티티는 `employees` 테이블의 행과 1:1로 대응됩니다.

pub mod employees;
