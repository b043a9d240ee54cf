//! 직원 디렉터리 서비스 메인 애플리케이션
//!
//! 설정을 읽고 저장소를 준비한 뒤 Actix-web 기반의 HTTP 서버를 구동합니다.

use std::fmt::Display;
use std::io;
use std::path::Path;
use std::sync::Arc;

use actix_web::{HttpServer, web};
use dotenv::dotenv;
use log::{error, info, warn};

use employee_service::config::{AppConfig, Environment, StoreBackend};
use employee_service::core::logging;
use employee_service::db::Database;
use employee_service::db::migrations::run_migrations;
use employee_service::repositories::employees::{
    EmployeeRepository, InMemoryEmployeeRepository, PgEmployeeRepository,
};
use employee_service::routes::{AppState, build_app};
use employee_service::services::employees::EmployeeService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화 (설정 로딩 중의 경고도 기록되도록 설정보다 먼저)
    let env_file = load_env_file();
    logging::init(&Environment::current());

    match env_file {
        Ok(name) => info!("{} 파일 로드 됨", name),
        Err(e) => warn!("환경 파일 로드 실패: {}", e),
    }

    let config = AppConfig::from_env().map_err(|e| fatal("설정 로드 실패", e))?;

    info!("직원 서비스 시작중... (environment: {:?})", config.environment);

    // 데이터 스토어 초기화
    let (store, database) = initialize_store(&config).await?;

    let state = web::Data::new(AppState::new(EmployeeService::new(store), config.deadlines));

    // HTTP 서버 시작
    let result = start_http_server(&config, state).await;

    if let Some(database) = database {
        database.close().await;
        info!("데이터베이스 연결 풀 종료");
    }

    info!("서버 종료");
    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// SIGINT/SIGTERM을 받으면 새 연결을 받지 않고, 진행 중인 요청을
/// `SHUTDOWN_TIMEOUT_SECS` 동안 기다린 뒤 종료합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(config: &AppConfig, state: web::Data<AppState>) -> io::Result<()> {
    let bind_address = config.server.bind_address();

    info!("서버가 http://{} 에서 실행중입니다", bind_address);
    info!("Health check: http://{}/v1/healthz", bind_address);

    let mut server = HttpServer::new(move || build_app(state.clone()))
        .client_request_timeout(config.server.read_timeout)
        .shutdown_timeout(config.server.shutdown_timeout.as_secs());

    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    server.bind(&bind_address)?.run().await
}

/// 설정된 저장소를 준비합니다
///
/// PostgreSQL 저장소는 연결을 확인하고, `RUN_MIGRATIONS`가 켜져 있으면 마이그레이션을 적용합니다.
///
/// # Returns
///
/// * 서비스에 주입할 저장소와, 종료 시 닫아야 할 데이터베이스 연결(있는 경우)
async fn initialize_store(
    config: &AppConfig,
) -> io::Result<(Arc<dyn EmployeeRepository>, Option<Database>)> {
    match config.database.backend {
        StoreBackend::Postgres => {
            info!("데이터베이스 연결 중...");
            let database = Database::connect(&config.database)
                .await
                .map_err(|e| fatal("데이터베이스 연결 실패", e))?;

            if config.database.run_migrations {
                let applied =
                    run_migrations(database.pool(), Path::new(&config.database.migrations_dir))
                        .await
                        .map_err(|e| fatal("마이그레이션 실패", e))?;
                info!("마이그레이션 완료 (새로 적용: {}개)", applied.len());
            }

            let store: Arc<dyn EmployeeRepository> =
                Arc::new(PgEmployeeRepository::new(database.pool().clone()));
            Ok((store, Some(database)))
        }
        StoreBackend::Memory => {
            warn!("메모리 저장소 사용 중: 재시작하면 데이터가 사라집니다");
            let store: Arc<dyn EmployeeRepository> = Arc::new(InMemoryEmployeeRepository::new());
            Ok((store, None))
        }
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거가 초기화되기 전에 호출되므로 결과는 반환값으로 알립니다.
fn load_env_file() -> Result<String, dotenv::Error> {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let file_name = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => {
            dotenv()?;
            return Ok(".env".to_string());
        }
    };

    dotenv::from_filename(file_name)?;
    Ok(file_name.to_string())
}

fn fatal(context: &str, error: impl Display) -> io::Error {
    error!("{}: {}", context, error);
    io::Error::other(format!("{context}: {error}"))
}
