//! 스키마 마이그레이션 실행기
//!
//! 디렉터리의 `*.up.sql` 파일을 파일 이름 순서로 적용하고,
//! 적용된 파일은 확장자를 뺀 이름(`000001_create_employees`)으로
//! `schema_migrations` 테이블에 기록해 다시 실행하지 않습니다.
//! 파일 하나의 적용과 기록은 같은 트랜잭션에서 수행됩니다.

use std::fs;
use std::path::Path;

use log::{debug, info};
use sqlx::PgPool;

use super::DatabaseError;

const UP_SUFFIX: &str = ".up.sql";

const CREATE_LEDGER: &str = "\
    CREATE TABLE IF NOT EXISTS schema_migrations (\
        name TEXT PRIMARY KEY, \
        applied_at TIMESTAMPTZ NOT NULL DEFAULT now()\
    )";

/// 아직 적용되지 않은 마이그레이션을 적용하고, 이번에 적용한 마이그레이션 이름을 반환합니다.
pub async fn run_migrations(pool: &PgPool, dir: &Path) -> Result<Vec<String>, DatabaseError> {
    let ledger_error = |source: sqlx::Error| DatabaseError::Migration {
        name: "schema_migrations".to_string(),
        source,
    };

    sqlx::query(CREATE_LEDGER)
        .execute(pool)
        .await
        .map_err(ledger_error)?;

    let mut file_names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            file_names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    let mut applied = Vec::new();
    for file_name in up_migration_names(file_names) {
        let name = migration_name(&file_name).to_string();
        let already_applied: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM schema_migrations WHERE name = $1)")
                .bind(&name)
                .fetch_one(pool)
                .await
                .map_err(ledger_error)?;

        if already_applied {
            debug!("마이그레이션 건너뜀 (이미 적용됨): {}", name);
            continue;
        }

        let sql = fs::read_to_string(dir.join(&file_name))?;
        apply_one(pool, &name, &sql)
            .await
            .map_err(|source| DatabaseError::Migration {
                name: name.clone(),
                source,
            })?;

        info!("마이그레이션 적용: {}", name);
        applied.push(name);
    }

    Ok(applied)
}

async fn apply_one(pool: &PgPool, name: &str, sql: &str) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::raw_sql(sql).execute(&mut *tx).await?;
    sqlx::query("INSERT INTO schema_migrations (name) VALUES ($1)")
        .bind(name)
        .execute(&mut *tx)
        .await?;

    tx.commit().await
}

fn migration_name(file_name: &str) -> &str {
    file_name.strip_suffix(UP_SUFFIX).unwrap_or(file_name)
}

/// `*.up.sql` 파일만 골라 이름 순으로 정렬합니다.
pub fn up_migration_names<I>(file_names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut names: Vec<String> = file_names
        .into_iter()
        .filter(|name| name.ends_with(UP_SUFFIX) && name.len() > UP_SUFFIX.len())
        .collect();
    names.sort();
    names
}
