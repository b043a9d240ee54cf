use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::employees::Employee;

/// 직원 응답 DTO
///
/// 타임스탬프는 타임존이 포함된 RFC 3339 형식으로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub full_name: String,
    pub phone: String,
    pub city: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        let Employee {
            id,
            full_name,
            phone,
            city,
            created_at,
            updated_at,
        } = employee;

        Self {
            id,
            full_name,
            phone,
            city,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_serializes_with_camel_case_keys_and_rfc3339_timestamps() {
        let created_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let response = EmployeeResponse::from(Employee {
            id: Uuid::nil(),
            full_name: "Иван Иванов".to_string(),
            phone: "+79991234567".to_string(),
            city: "Москва".to_string(),
            created_at,
            updated_at: created_at,
        });

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["fullName"], "Иван Иванов");
        assert_eq!(json["phone"], "+79991234567");
        assert_eq!(json["city"], "Москва");
        assert_eq!(json["createdAt"], "2024-03-01T12:30:00Z");
        assert_eq!(json["updatedAt"], "2024-03-01T12:30:00Z");
        assert!(json.get("full_name").is_none());
    }
}
