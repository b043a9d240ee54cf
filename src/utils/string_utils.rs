//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

/// 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// 검증과 저장은 항상 정규화된 값으로 수행되어야 합니다.
/// 그래야 저장된 값이 검증된 값과 정확히 일치합니다.
pub fn normalize_string(value: &str) -> String {
    value.trim().to_string()
}

/// 유니코드 코드 포인트 기준의 문자열 길이
pub fn char_length(value: &str) -> usize {
    value.chars().count()
}
