//! # 직원 생성 요청 DTO
//!
//! 새로운 직원 레코드 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "fullName": "Иван Иванов",
//!   "phone": "+79991234567",
//!   "city": "Москва"
//! }
//! ```
//!
//! 알 수 없는 필드가 포함되면 역직렬화 단계에서 거부됩니다.
//! 누락되었거나 `null`인 필드는 빈 문자열로 취급되어 검증 단계에서 필드별 에러로 보고됩니다.

use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::validation::{
    validate_city, validate_full_name, validate_phone, FieldViolation, ValidationErrors,
};
use crate::utils::string_utils::normalize_string;

/// 클라이언트가 보낸 원본 생성 요청
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct CreateEmployeeRequest {
    #[serde(deserialize_with = "null_as_empty")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub city: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl CreateEmployeeRequest {
    /// 모든 필드의 앞뒤 공백을 제거한 [`NewEmployee`]로 변환합니다.
    pub fn normalize(self) -> NewEmployee {
        NewEmployee {
            full_name: normalize_string(&self.full_name),
            phone: normalize_string(&self.phone),
            city: normalize_string(&self.city),
        }
    }
}

/// 정규화된 직원 생성 데이터
///
/// 저장소에는 항상 이 타입이 전달되므로, 저장된 값은 검증된 값과 동일합니다.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewEmployee {
    #[validate(custom(function = "full_name_rule"))]
    pub full_name: String,

    #[validate(custom(function = "phone_rule"))]
    pub phone: String,

    #[validate(custom(function = "city_rule"))]
    pub city: String,
}

/// (Rust 필드명, JSON 필드명) - 에러 보고 순서
const FIELD_NAMES: [(&str, &str); 3] = [
    ("full_name", "fullName"),
    ("phone", "phone"),
    ("city", "city"),
];

impl NewEmployee {
    /// 모든 필드를 검증하고 실패한 필드를 하나의 집계 에러로 반환합니다.
    ///
    /// 첫 번째 실패에서 멈추지 않으며, 필드마다 처음 실패한 규칙의 메시지 하나만 보고합니다.
    pub fn check(&self) -> Result<(), ValidationErrors> {
        let Err(report) = self.validate() else {
            return Ok(());
        };

        let by_field = report.field_errors();
        let mut errors = ValidationErrors::new();

        for (field, wire_name) in FIELD_NAMES {
            if let Some(first) = by_field.get(field).and_then(|errs| errs.first()) {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string());
                errors.add(wire_name, message);
            }
        }

        if errors.has_errors() {
            Err(errors)
        } else {
            Ok(())
        }
    }
}

fn full_name_rule(value: &str) -> Result<(), ValidationError> {
    validate_full_name(value).map_err(into_validation_error)
}

fn phone_rule(value: &str) -> Result<(), ValidationError> {
    validate_phone(value).map_err(into_validation_error)
}

fn city_rule(value: &str) -> Result<(), ValidationError> {
    validate_city(value).map_err(into_validation_error)
}

fn into_validation_error(violation: FieldViolation) -> ValidationError {
    ValidationError::new(violation.code()).with_message(violation.to_string().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(full_name: &str, phone: &str, city: &str) -> CreateEmployeeRequest {
        CreateEmployeeRequest {
            full_name: full_name.to_string(),
            phone: phone.to_string(),
            city: city.to_string(),
        }
    }

    #[test]
    fn test_normalize_trims_every_field() {
        let normalized = request("  Иван Иванов ", "\t+79991234567\n", " Москва ").normalize();

        assert_eq!(normalized.full_name, "Иван Иванов");
        assert_eq!(normalized.phone, "+79991234567");
        assert_eq!(normalized.city, "Москва");
    }

    #[test]
    fn test_check_accepts_valid_request() {
        let employee = request("Әлихан Нұрғалиев", "+77011234567", "Алматы").normalize();
        assert_eq!(employee.check(), Ok(()));
    }

    #[test]
    fn test_check_reports_every_invalid_field_in_order() {
        let errors = request("A", "invalid", "M")
            .normalize()
            .check()
            .unwrap_err();

        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["fullName", "phone", "city"]);
        assert_eq!(
            errors.message_for("fullName"),
            Some(FieldViolation::TooShort { min: 2 }.to_string().as_str())
        );
        assert_eq!(
            errors.message_for("phone"),
            Some(FieldViolation::InvalidFormat.to_string().as_str())
        );
    }

    #[test]
    fn test_check_reports_only_failing_fields() {
        let errors = request("John123", "+79991234567", "Москва")
            .normalize()
            .check()
            .unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.message_for("fullName"),
            Some(FieldViolation::InvalidCharacters.to_string().as_str())
        );
    }

    #[test]
    fn test_deserialize_uses_camel_case() {
        let parsed: CreateEmployeeRequest = serde_json::from_str(
            r#"{"fullName": "John Doe", "phone": "+12025551234", "city": "Boston"}"#,
        )
        .unwrap();

        assert_eq!(parsed.full_name, "John Doe");
        assert_eq!(parsed.phone, "+12025551234");
        assert_eq!(parsed.city, "Boston");
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let parsed = serde_json::from_str::<CreateEmployeeRequest>(
            r#"{"fullName": "John Doe", "phone": "+12025551234", "city": "Boston", "role": "admin"}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_null_fields_fail_validation_not_parsing() {
        let parsed: CreateEmployeeRequest = serde_json::from_str(
            r#"{"fullName": null, "phone": "+79991234567", "city": null}"#,
        )
        .unwrap();
        assert_eq!(parsed.full_name, "");

        let errors = parsed.normalize().check().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["fullName", "city"]);
    }

    #[test]
    fn test_non_string_field_is_a_parse_error() {
        let parsed = serde_json::from_str::<CreateEmployeeRequest>(
            r#"{"fullName": 42, "phone": "+79991234567", "city": "Москва"}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_missing_fields_fail_validation_not_parsing() {
        let parsed: CreateEmployeeRequest = serde_json::from_str(r#"{"fullName": "John Doe"}"#).unwrap();
        let errors = parsed.normalize().check().unwrap_err();

        assert!(errors.message_for("fullName").is_none());
        assert!(errors.message_for("phone").is_some());
        assert!(errors.message_for("city").is_some());
    }
}
