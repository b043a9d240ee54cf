//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//! 모든 미들웨어는 시작 시점에 [`build_app`](crate::routes::build_app)에서 한 번 조립되며,
//! 전역 상태를 사용하지 않습니다.
//!
//! # 제공 미들웨어 (바깥쪽부터)
//!
//! ### 1. 패닉 복구 (PanicGuardMiddleware)
//! - 요청 처리 중 발생한 패닉을 500 응답으로 변환 (`InternalError`로 서버에 전달)
//! - 요청 ID를 먼저 확정해 요청 헤더에 기록하므로 안쪽 미들웨어와 같은 ID 사용
//!
//! 어떤 미들웨어도 안쪽 서비스가 실행되는 동안 `HttpRequest` 복제본을 보관하지 않습니다.
//! 라우터는 경로 파라미터를 기록할 때 요청을 단독으로 소유해야 합니다.
//!
//! ### 2. 요청 ID (RequestIdMiddleware)
//! - `X-Request-ID` 헤더를 재사용하거나 UUID v4 생성
//! - 요청 extension 저장 및 모든 응답 헤더에 기록
//!
//! ### 3. 접근 로그 (AccessLogMiddleware)
//! - 요청 ID, 메서드, 경로, 상태 코드, 지연 시간, 저장소 시간, 원격 주소 기록
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! App::new()
//!     .wrap(AccessLogMiddleware)
//!     .wrap(RequestIdMiddleware)
//!     .wrap(PanicGuardMiddleware) // 마지막에 등록한 것이 가장 바깥쪽
//! ```

pub mod access_log;
pub mod panic_guard;
pub mod request_id;
mod request_id_inner;

// 미들웨어 재export
pub use access_log::{AccessLogMiddleware, StorageLatency};
pub use panic_guard::PanicGuardMiddleware;
pub use request_id::{REQUEST_ID_HEADER, RequestId, RequestIdMiddleware};
