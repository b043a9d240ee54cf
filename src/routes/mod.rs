//! API 라우트 설정 모듈
//!
//! 직원 API와 헬스 체크 엔드포인트를 등록하고, 미들웨어를 조립한 애플리케이션을 만듭니다.
//!
//! # Routes
//!
//! | 경로 | 허용 메서드 | 그 외 메서드 |
//! |------|-------------|--------------|
//! | `/v1/employees` | `POST` | 405 |
//! | `/v1/employees/{id}` | `GET` | 405 |
//!
//! `/v1/employees/` 아래의 모든 경로(빈 ID, `a/b`처럼 `/`가 섞인 ID 포함)는 조회 핸들러로
//! 전달되어 UUID가 아니면 400 `invalid_id`로 응답합니다.
//! | `/v1/healthz` | `GET` | 405 |
//! | 그 외 모든 경로 | - | 404 `not_found` |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, HttpServer};
//!
//! let state = web::Data::new(AppState::new(service, config.deadlines));
//! HttpServer::new(move || build_app(state.clone()))
//!     .bind(config.server.bind_address())?
//!     .run()
//!     .await
//! ```

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error, web};

use crate::config::RequestDeadlines;
use crate::handlers;
use crate::handlers::extractors::json_config;
use crate::handlers::fallback::{method_not_allowed, route_not_found};
use crate::middlewares::{AccessLogMiddleware, PanicGuardMiddleware, RequestIdMiddleware};
use crate::services::employees::EmployeeService;

/// 핸들러가 공유하는 애플리케이션 상태
///
/// 시작 시점에 한 번 만들어 `web::Data`로 모든 워커에 공유합니다.
#[derive(Clone)]
pub struct AppState {
    pub employees: EmployeeService,
    pub deadlines: RequestDeadlines,
}

impl AppState {
    pub fn new(employees: EmployeeService, deadlines: RequestDeadlines) -> Self {
        Self {
            employees,
            deadlines,
        }
    }
}

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    configure_employee_routes(cfg);

    cfg.service(
        web::resource("/v1/healthz")
            .route(web::get().to(handlers::health::health_check))
            .default_service(web::to(|| method_not_allowed("GET"))),
    );
}

/// 직원 관련 라우트를 설정합니다
///
/// ```bash
/// curl -X POST http://localhost:8080/v1/employees \
///   -H "Content-Type: application/json" \
///   -d '{"fullName":"Иван Иванов","phone":"+79991234567","city":"Москва"}'
///
/// curl http://localhost:8080/v1/employees/7c9e6679-7425-40de-944b-e07fc1f90ae7
/// ```
fn configure_employee_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/v1/employees")
            .route(web::post().to(handlers::employees::create_employee))
            .default_service(web::to(|| method_not_allowed("POST"))),
    );

    cfg.service(
        web::resource("/v1/employees/{id:.*}")
            .route(web::get().to(handlers::employees::get_employee))
            .default_service(web::to(|| method_not_allowed("GET"))),
    );
}

/// 라우트와 미들웨어를 조립한 애플리케이션을 만듭니다.
///
/// 미들웨어는 바깥쪽부터 패닉 복구, 요청 ID, 접근 로그 순서로 적용됩니다.
pub fn build_app(
    state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .configure(configure_all_routes)
        .default_service(web::to(route_not_found))
        .wrap(AccessLogMiddleware)
        .wrap(RequestIdMiddleware)
        .wrap(PanicGuardMiddleware)
}
