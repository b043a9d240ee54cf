//! 로깅 초기화
//!
//! `RUST_LOG`로 필터를 조절하는 `env_logger` 기반 로거를 설정합니다.
//! 개발 환경에서는 기본 텍스트 형식을, 그 외 환경에서는 한 줄에 하나의
//! JSON 객체(`ts`, `level`, `target`, `msg` + 구조화 필드)를 출력합니다.

use std::io::Write;

use chrono::{DateTime, SecondsFormat, Utc};
use env_logger::{Builder, Env};
use log::Level;
use log::kv::{self, Key, Source, Value, VisitSource};
use serde_json::{Map, Number, Value as JsonValue};

use crate::config::Environment;

const DEFAULT_FILTER: &str = "info,actix_web=info,actix_server=info,sqlx=warn";

/// 전역 로거를 초기화합니다.
///
/// 이미 초기화된 경우(테스트 등) 아무 일도 하지 않습니다.
///
/// # Examples
///
/// ```bash
/// # 저장소 계층만 debug
/// RUST_LOG=info,employee_service::repositories=debug cargo run
/// ```
pub fn init(environment: &Environment) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));

    if *environment != Environment::Development {
        builder.format(|buf, record| {
            let line = render_json_line(
                Utc::now(),
                record.level(),
                record.target(),
                &record.args().to_string(),
                record.key_values(),
            );
            writeln!(buf, "{line}")
        });
    }

    let _ = builder.try_init();
}

/// 로그 레코드 하나를 JSON 한 줄로 변환합니다.
///
/// 구조화 필드의 키가 기본 필드(`ts`, `level`, `target`, `msg`)와 겹치면 기본 필드가 우선합니다.
pub fn render_json_line(
    ts: DateTime<Utc>,
    level: Level,
    target: &str,
    message: &str,
    fields: &dyn Source,
) -> String {
    let mut object = Map::new();
    let _ = fields.visit(&mut JsonFields(&mut object));

    object.insert(
        "ts".to_string(),
        JsonValue::String(ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    object.insert("level".to_string(), JsonValue::String(level.as_str().to_string()));
    object.insert("target".to_string(), JsonValue::String(target.to_string()));
    object.insert("msg".to_string(), JsonValue::String(message.to_string()));

    JsonValue::Object(object).to_string()
}

struct JsonFields<'a>(&'a mut Map<String, JsonValue>);

impl<'kvs> VisitSource<'kvs> for JsonFields<'_> {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), kv::Error> {
        self.0.insert(key.as_str().to_string(), to_json(&value));
        Ok(())
    }
}

fn to_json(value: &Value<'_>) -> JsonValue {
    if let Some(b) = value.to_bool() {
        return JsonValue::Bool(b);
    }
    if let Some(n) = value.to_u64() {
        return JsonValue::from(n);
    }
    if let Some(n) = value.to_i64() {
        return JsonValue::from(n);
    }
    if let Some(n) = value.to_f64().and_then(Number::from_f64) {
        return JsonValue::Number(n);
    }
    JsonValue::String(value.to_string())
}
