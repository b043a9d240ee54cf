//! 저장소 왕복 시간 측정
//!
//! 저장소 연산의 지연 시간은 호출 컨텍스트에 숨겨 두지 않고,
//! 결과와 함께 [`Timed`]로 명시적으로 반환합니다.

use std::future::Future;
use std::time::{Duration, Instant};

/// 값과 그 값을 얻는 데 걸린 저장소 왕복 시간
///
/// 저장소를 전혀 거치지 않은 결과(예: 검증 실패)는 `storage_latency`가 `None`입니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timed<T> {
    pub value: T,
    pub storage_latency: Option<Duration>,
}

impl<T> Timed<T> {
    pub fn new(value: T, storage_latency: Duration) -> Self {
        Self {
            value,
            storage_latency: Some(storage_latency),
        }
    }

    /// 저장소를 거치지 않은 값
    pub fn untimed(value: T) -> Self {
        Self {
            value,
            storage_latency: None,
        }
    }

    /// future 완료까지 걸린 시간을 측정합니다.
    pub async fn measure<F>(future: F) -> Self
    where
        F: Future<Output = T>,
    {
        let start = Instant::now();
        let value = future.await;
        Self::new(value, start.elapsed())
    }

    pub fn map<U, F>(self, f: F) -> Timed<U>
    where
        F: FnOnce(T) -> U,
    {
        Timed {
            value: f(self.value),
            storage_latency: self.storage_latency,
        }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, E> Timed<Result<T, E>> {
    pub fn map_err<F, O>(self, op: O) -> Timed<Result<T, F>>
    where
        O: FnOnce(E) -> F,
    {
        self.map(|result| result.map_err(op))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_measure_records_elapsed_time() {
        let timed = Timed::measure(async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            42
        })
        .await;

        assert_eq!(timed.value, 42);
        assert!(timed.storage_latency.unwrap() >= Duration::from_millis(20));
    }

    #[test]
    fn test_untimed_has_no_latency() {
        let timed = Timed::untimed("value");
        assert_eq!(timed.storage_latency, None);
        assert_eq!(timed.into_inner(), "value");
    }

    #[test]
    fn test_map_keeps_latency() {
        let timed = Timed::new(Ok::<u8, &str>(1), Duration::from_millis(3));
        let mapped = timed.map_err(|e| e.len());

        assert_eq!(mapped.value, Ok(1));
        assert_eq!(mapped.storage_latency, Some(Duration::from_millis(3)));
    }
}
