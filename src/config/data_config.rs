//! 데이터 및 서버 설정 관리 모듈
//!
//! 환경 변수에서 서버 바인딩, 데이터베이스 풀, 요청 마감 시간 설정을 읽어옵니다.
//! 선택 항목의 값이 잘못된 경우 에러 로그를 남기고 기본값을 사용하며,
//! 필수 항목이 없으면 [`ConfigError`]를 반환합니다.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use log::error;
use thiserror::Error;

/// 설정 로딩 에러
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} 환경 변수는 필수입니다")]
    Missing(&'static str),

    #[error("{key} 값이 올바르지 않습니다: {value}")]
    Invalid { key: &'static str, value: String },
}

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 사람이 읽기 쉬운 로그
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_lookup(&|key: &str| env::var(key).ok())
    }

    /// `ENVIRONMENT` 값을 읽습니다. 로깅 초기화와 [`AppConfig`]가 같은 해석을 공유합니다.
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        non_empty(lookup, "ENVIRONMENT")
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Production)
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`입니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 직원 데이터 저장소 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// PostgreSQL (기본값)
    Postgres,
    /// 프로세스 내 메모리 저장소 - 로컬 실행 전용, 재시작 시 데이터 소실
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            other => Err(format!("알 수 없는 저장소 종류: {other}")),
        }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// 바인딩할 호스트. 기본값: "0.0.0.0"
    pub host: String,
    /// 바인딩할 포트. 기본값: 8080
    pub port: u16,
    /// 워커 스레드 수. `None`이면 actix 기본값(CPU 코어 수)
    pub workers: Option<usize>,
    /// 요청 헤더 수신 제한 시간
    pub read_timeout: Duration,
    /// 종료 시그널 이후 진행 중인 요청을 기다리는 시간
    pub shutdown_timeout: Duration,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 데이터베이스 연결 풀 설정
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub backend: StoreBackend,
    /// PostgreSQL 연결 문자열 (`Memory` 저장소에서는 비어 있을 수 있음)
    pub dsn: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub max_lifetime: Duration,
    pub acquire_timeout: Duration,
    pub run_migrations: bool,
    pub migrations_dir: String,
}

/// 요청별 처리 마감 시간
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestDeadlines {
    /// 직원 생성/조회
    pub request: Duration,
    /// 헬스 체크
    pub health: Duration,
}

impl Default for RequestDeadlines {
    fn default() -> Self {
        Self {
            request: Duration::from_secs(5),
            health: Duration::from_secs(2),
        }
    }
}

/// 전체 애플리케이션 설정
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub deadlines: RequestDeadlines,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽어옵니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수에서 설정을 읽어옵니다.
    ///
    /// # Environment Variables
    ///
    /// * `HOST`, `PORT`, `WORKERS`, `READ_TIMEOUT_MS`, `SHUTDOWN_TIMEOUT_SECS`
    /// * `STORE_BACKEND` - `postgres`(기본값) 또는 `memory`
    /// * `POSTGRES_DSN` - `postgres` 저장소에서 필수
    /// * `DB_MAX_CONNS`, `DB_MIN_CONNS`, `DB_MAX_CONN_LIFETIME_MS`, `DB_ACQUIRE_TIMEOUT_MS`
    /// * `RUN_MIGRATIONS`, `MIGRATIONS_DIR`
    /// * `REQUEST_TIMEOUT_MS`, `HEALTH_TIMEOUT_MS`
    /// * `ENVIRONMENT`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_lookup(&lookup);

        let server = ServerConfig {
            host: non_empty(&lookup, "HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 8080u16),
            workers: non_empty(&lookup, "WORKERS").and_then(|raw| match raw.parse::<usize>() {
                Ok(n) if n > 0 => Some(n),
                _ => {
                    error!("WORKERS 파싱 실패: {}. 기본값 사용", raw);
                    None
                }
            }),
            read_timeout: Duration::from_millis(parse_or(&lookup, "READ_TIMEOUT_MS", 5_000u64)),
            shutdown_timeout: Duration::from_secs(parse_or(&lookup, "SHUTDOWN_TIMEOUT_SECS", 10u64)),
        };

        let backend = match non_empty(&lookup, "STORE_BACKEND") {
            None => StoreBackend::Postgres,
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "STORE_BACKEND",
                value: raw,
            })?,
        };

        let dsn = non_empty(&lookup, "POSTGRES_DSN").unwrap_or_default();
        if backend == StoreBackend::Postgres && dsn.is_empty() {
            return Err(ConfigError::Missing("POSTGRES_DSN"));
        }

        let max_connections = parse_or(&lookup, "DB_MAX_CONNS", 20u32).max(1);
        let database = DatabaseConfig {
            backend,
            dsn,
            max_connections,
            min_connections: parse_or(&lookup, "DB_MIN_CONNS", 5u32).min(max_connections),
            max_lifetime: Duration::from_millis(parse_or(
                &lookup,
                "DB_MAX_CONN_LIFETIME_MS",
                30 * 60 * 1000u64,
            )),
            acquire_timeout: Duration::from_millis(parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_MS", 5_000u64)),
            run_migrations: parse_bool_or(&lookup, "RUN_MIGRATIONS", true),
            migrations_dir: non_empty(&lookup, "MIGRATIONS_DIR")
                .unwrap_or_else(|| "migrations".to_string()),
        };

        let defaults = RequestDeadlines::default();
        let deadlines = RequestDeadlines {
            request: Duration::from_millis(parse_or(
                &lookup,
                "REQUEST_TIMEOUT_MS",
                defaults.request.as_millis() as u64,
            )),
            health: Duration::from_millis(parse_or(
                &lookup,
                "HEALTH_TIMEOUT_MS",
                defaults.health.as_millis() as u64,
            )),
        };

        Ok(Self {
            environment,
            server,
            database,
            deadlines,
        })
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match non_empty(lookup, key) {
        None => default,
        Some(raw) => raw.parse::<T>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 사용", key, e);
            default
        }),
    }
}

fn parse_bool_or<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match non_empty(lookup, key).as_deref() {
        None => default,
        Some("1" | "t" | "T" | "true" | "TRUE" | "True") => true,
        Some("0" | "f" | "F" | "false" | "FALSE" | "False") => false,
        Some(raw) => {
            error!("{} 파싱 실패: {}. 기본값 사용", key, raw);
            default
        }
    }
}
