//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정규화 및 길이 계산
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::normalize_string;
//!
//! let clean_name = normalize_string("  Иван Иванов  ");
//! assert_eq!(clean_name, "Иван Иванов");
//! ```

pub mod string_utils;
