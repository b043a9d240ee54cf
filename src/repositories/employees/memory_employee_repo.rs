//! # 메모리 직원 저장소
//!
//! `STORE_BACKEND=memory`일 때 사용하는 프로세스 내 저장소입니다.
//! 재시작하면 데이터가 사라지므로 로컬 실행과 테스트 전용입니다.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::employee_repo::{EmployeeRepository, StoreError, StoreResult};
use crate::core::timing::Timed;
use crate::domain::dto::employees::NewEmployee;
use crate::domain::entities::employees::Employee;

#[derive(Default)]
struct Tables {
    by_id: HashMap<Uuid, Employee>,
    phones: HashSet<String>,
}

/// 메모리 기반 직원 저장소
///
/// 전화번호 확인과 삽입은 하나의 잠금 안에서 수행됩니다.
#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    tables: Mutex<Tables>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn create(&self, employee: &NewEmployee) -> StoreResult<Employee> {
        Timed::measure(async {
            let mut tables = self.lock();
            if !tables.phones.insert(employee.phone.clone()) {
                return Err(StoreError::DuplicatePhone);
            }

            let now = Utc::now();
            let created = Employee {
                id: Uuid::new_v4(),
                full_name: employee.full_name.clone(),
                phone: employee.phone.clone(),
                city: employee.city.clone(),
                created_at: now,
                updated_at: now,
            };
            tables.by_id.insert(created.id, created.clone());
            Ok(created)
        })
        .await
    }

    async fn get_by_id(&self, id: Uuid) -> StoreResult<Employee> {
        Timed::measure(async { self.lock().by_id.get(&id).cloned().ok_or(StoreError::NotFound) })
            .await
    }

    async fn ping(&self) -> StoreResult<()> {
        Timed::measure(async { Ok(()) }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_employee(phone: &str) -> NewEmployee {
        NewEmployee {
            full_name: "Иван Иванов".to_string(),
            phone: phone.to_string(),
            city: "Москва".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamps() {
        let store = InMemoryEmployeeRepository::new();

        let timed = store.create(&new_employee("+79991234567")).await;
        assert!(timed.storage_latency.is_some());

        let created = timed.value.unwrap();
        assert!(!created.id.is_nil());
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(created.phone, "+79991234567");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_phone_is_rejected() {
        let store = InMemoryEmployeeRepository::new();
        store.create(&new_employee("+79991234567")).await.value.unwrap();

        let second = store.create(&new_employee("+79991234567")).await.value;

        assert!(matches!(second, Err(StoreError::DuplicatePhone)));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_get_by_id_round_trip_and_missing() {
        let store = InMemoryEmployeeRepository::new();
        let created = store.create(&new_employee("+77011234567")).await.value.unwrap();

        let found = store.get_by_id(created.id).await.value.unwrap();
        assert_eq!(found, created);

        let missing = store.get_by_id(Uuid::nil()).await.value;
        assert!(matches!(missing, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_ping_is_healthy() {
        assert!(InMemoryEmployeeRepository::new().ping().await.value.is_ok());
    }
}
