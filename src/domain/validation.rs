//! # 직원 입력값 검증 규칙
//!
//! 직원 생성 요청의 세 필드(이름, 전화번호, 도시)에 대한 순수 검증 함수들입니다.
//! I/O가 전혀 없으며, 각 함수는 성공 또는 사람이 읽을 수 있는 실패 사유를 반환합니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 길이 (코드 포인트) | 허용 문자 |
//! |------|--------------------|-----------|
//! | `fullName` | 2-200 | 라틴/키릴 문자(카자흐 확장 포함), 공백, 하이픈 |
//! | `phone` | - | E.164: `+`, 첫 자리 1-9, 이후 1-14자리 숫자 |
//! | `city` | 2-120 | 제한 없음 |
//!
//! 길이 검사는 문자 집합 검사보다 먼저 수행되며, 처음 실패한 규칙이 해당 필드의 사유가 됩니다.
//!
//! ```rust,ignore
//! use crate::domain::validation::{validate_full_name, FieldViolation};
//!
//! assert!(validate_full_name("Әлихан Нұрғалиев").is_ok());
//! assert_eq!(validate_full_name("A"), Err(FieldViolation::TooShort { min: 2 }));
//! ```

use serde::Serialize;
use thiserror::Error;

use crate::utils::string_utils::char_length;

pub const FULL_NAME_MIN_LEN: usize = 2;
pub const FULL_NAME_MAX_LEN: usize = 200;
pub const CITY_MIN_LEN: usize = 2;
pub const CITY_MAX_LEN: usize = 120;

/// E.164에서 `+` 뒤에 올 수 있는 최대 숫자 개수
const PHONE_MAX_DIGITS: usize = 15;

/// 기본 키릴 문자 범위 밖에 있는 카자흐어 문자
const KAZAKH_LETTERS: &str = "әіңғүұқөһӘІҢҒҮҰҚӨҺ";

/// 단일 필드 검증 실패 사유
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldViolation {
    #[error("최소 {min}자 이상이어야 합니다")]
    TooShort { min: usize },

    #[error("최대 {max}자까지 허용됩니다")]
    TooLong { max: usize },

    #[error("문자, 공백, 하이픈만 사용할 수 있습니다")]
    InvalidCharacters,

    #[error("E.164 형식이어야 합니다 (+ 뒤에 2-15자리 숫자, 0으로 시작 불가)")]
    InvalidFormat,
}

impl FieldViolation {
    /// 기계가 읽을 수 있는 위반 코드
    pub fn code(&self) -> &'static str {
        match self {
            FieldViolation::TooShort { .. } => "too_short",
            FieldViolation::TooLong { .. } => "too_long",
            FieldViolation::InvalidCharacters => "invalid_characters",
            FieldViolation::InvalidFormat => "invalid_format",
        }
    }
}

/// 직원 이름을 검증합니다.
///
/// 공백을 제거한 문자열의 코드 포인트 수가 2 미만이면 `TooShort`,
/// 200 초과면 `TooLong`, 허용되지 않은 문자가 있으면 `InvalidCharacters`입니다.
pub fn validate_full_name(full_name: &str) -> Result<(), FieldViolation> {
    let trimmed = full_name.trim();
    check_length(trimmed, FULL_NAME_MIN_LEN, FULL_NAME_MAX_LEN)?;

    if !trimmed.chars().all(is_name_char) {
        return Err(FieldViolation::InvalidCharacters);
    }
    Ok(())
}

/// 전화번호가 E.164 구문(`^\+[1-9]\d{1,14}$`)을 따르는지 검증합니다.
pub fn validate_phone(phone: &str) -> Result<(), FieldViolation> {
    let digits = phone
        .trim()
        .strip_prefix('+')
        .ok_or(FieldViolation::InvalidFormat)?;

    let well_formed = digits.bytes().all(|b| b.is_ascii_digit())
        && (2..=PHONE_MAX_DIGITS).contains(&digits.len())
        && !digits.starts_with('0');

    if well_formed {
        Ok(())
    } else {
        Err(FieldViolation::InvalidFormat)
    }
}

/// 도시 이름의 길이만 검증합니다. 문자 제한은 없습니다.
pub fn validate_city(city: &str) -> Result<(), FieldViolation> {
    check_length(city.trim(), CITY_MIN_LEN, CITY_MAX_LEN)
}

fn check_length(value: &str, min: usize, max: usize) -> Result<(), FieldViolation> {
    let length = char_length(value);
    if length < min {
        return Err(FieldViolation::TooShort { min });
    }
    if length > max {
        return Err(FieldViolation::TooLong { max });
    }
    Ok(())
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё')
        || KAZAKH_LETTERS.contains(c)
        || c.is_ascii_whitespace()
        || c == '-'
}

/// 필드 하나의 검증 실패 항목
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// 여러 필드의 검증 실패를 모은 집계 에러
///
/// 비어 있으면 "유효함"을 의미합니다. 항목은 추가된 순서를 유지하며,
/// 저장되지 않고 요청 생명주기 동안만 존재합니다.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[error("입력값 검증에 실패했습니다")]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// 특정 필드의 메시지를 조회합니다.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}
