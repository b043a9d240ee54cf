//! # Core Module
//!
//! 여러 계층에서 공통으로 사용하는 기반 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: HTTP 계층의 에러 타입과 고정된 에러 코드 어휘
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **자동 변환**: 저장소/서비스 에러에서 `From` 변환
//!
//! ### [`timing`] - 저장소 왕복 시간
//! - **Timed**: 결과값과 저장소 지연 시간을 함께 반환하는 래퍼
//!
//! ### [`logging`] - 로거 초기화
//! - 개발 환경은 텍스트, 그 외 환경은 JSON 라인 형식

pub mod errors;
pub mod logging;
pub mod timing;

pub use errors::*;
pub use timing::Timed;
