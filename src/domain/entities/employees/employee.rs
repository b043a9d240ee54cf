//! Employee Entity Implementation
//!
//! 직원 엔티티의 핵심 구현체입니다.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// 직원 엔티티
///
/// 생성 시 저장소가 ID와 타임스탬프를 채웁니다.
/// 이 서비스 범위에서는 생성 이후 변경되거나 삭제되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Employee {
    /// 저장소가 생성한 고유 ID
    pub id: Uuid,
    pub full_name: String,
    /// 전화번호 (E.164, 전체 직원 중 unique)
    pub phone: String,
    pub city: String,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
    /// 수정 시간
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// 리소스 경로 (`Location` 헤더 값)
    pub fn location(&self) -> String {
        format!("/v1/employees/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_points_at_resource() {
        let now = Utc::now();
        let employee = Employee {
            id: Uuid::nil(),
            full_name: "Иван Иванов".to_string(),
            phone: "+79991234567".to_string(),
            city: "Москва".to_string(),
            created_at: now,
            updated_at: now,
        };

        assert_eq!(
            employee.location(),
            "/v1/employees/00000000-0000-0000-0000-000000000000"
        );
    }
}
