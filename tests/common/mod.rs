// Common test utilities for integration tests
#![allow(dead_code)]

use smartvault::db;
use sqlx::SqlitePool;
use std::fs;
use std::path::{Path, PathBuf};

/// Creates a fresh directory under the system temp dir
pub fn temp_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("smartvault_{label}_{}", uuid::Uuid::now_v7()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

/// The descriptors shipped with the repository
pub fn shipped_schema_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("schema")
}

/// Copies the shipped descriptors into `dir/schema` and adds `extra` (file name, JSON)
pub fn schema_dir_with(dir: &Path, extra: &[(&str, &str)]) -> PathBuf {
    let schema_dir = dir.join("schema");
    fs::create_dir_all(&schema_dir).expect("create schema dir");

    for entry in fs::read_dir(shipped_schema_dir()).expect("read shipped schema") {
        let path = entry.expect("schema entry").path();
        let name = path.file_name().expect("descriptor name");
        fs::copy(&path, schema_dir.join(name)).expect("copy descriptor");
    }
    for (name, contents) in extra {
        fs::write(schema_dir.join(name), contents).expect("write extra descriptor");
    }
    schema_dir
}

/// Opens a store file inside `dir`
pub async fn setup_store(dir: &Path) -> SqlitePool {
    db::connect(&dir.join("testdb.sqlite"))
        .await
        .expect("Failed to create test database")
}

/// Minimal Document table holding only what the query utilities read
pub async fn create_document_index(pool: &SqlitePool) {
    sqlx::query("CREATE TABLE IF NOT EXISTS Document (Id INTEGER PRIMARY KEY, AccountId TEXT, FilePath TEXT)")
        .execute(pool)
        .await
        .expect("create Document table");
}

pub async fn index_document(pool: &SqlitePool, account_id: &str, file_path: &Path) {
    sqlx::query("INSERT INTO Document (AccountId, FilePath) VALUES (?, ?)")
        .bind(account_id)
        .bind(file_path.to_string_lossy().into_owned())
        .execute(pool)
        .await
        .expect("insert Document row");
}

pub fn write_file(path: &Path, contents: &str) -> PathBuf {
    fs::write(path, contents).expect("write test file");
    path.to_path_buf()
}

pub async fn table_names(pool: &SqlitePool) -> Vec<String> {
    sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .fetch_all(pool)
        .await
        .expect("list tables")
}

pub async fn cleanup(pool: SqlitePool, dir: PathBuf) {
    pool.close().await;
    fs::remove_dir_all(dir).ok();
}
