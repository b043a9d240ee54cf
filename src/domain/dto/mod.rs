//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 오가는 요청/응답 구조체입니다.
//! JSON 필드 이름은 camelCase를 사용합니다.

pub mod employees;

pub use employees::*;
