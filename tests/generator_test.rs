mod common;

use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use smartvault::commands;
use smartvault::config::Config;
use smartvault::db;
use smartvault::error::AppError;
use smartvault::models::FIXTURE_PASSWORD_HASH;
use smartvault::services::fixture;
use smartvault::services::{generate, GenerationOptions};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};

const FAIL_ON_ACCOUNT_50: &str = r#"{
  "Name": "FailOnAccount50",
  "Script": "CREATE TRIGGER IF NOT EXISTS FailOnAccount50 BEFORE INSERT ON Account WHEN NEW.Id = 50 BEGIN SELECT RAISE(ABORT, 'simulated insert failure'); END;"
}"#;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn options(fixture_path: &Path, accounts: u32, documents: u32) -> GenerationOptions {
    GenerationOptions {
        account_count: accounts,
        documents_per_account: documents,
        fixture_path: fixture_path.to_path_buf(),
        today: today(),
    }
}

async fn setup(label: &str) -> (PathBuf, SqlitePool, PathBuf) {
    let dir = common::temp_dir(label);
    let pool = common::setup_store(&dir).await;
    let fixture_path = fixture::write_fixture(&dir.join("TestDoc.txt"))
        .await
        .expect("write fixture");
    (dir, pool, fixture_path)
}

async fn counts(pool: &SqlitePool) -> Vec<(&'static str, i64)> {
    db::table_counts(pool)
        .await
        .expect("table counts")
        .into_iter()
        .map(|c| (c.table, c.rows))
        .collect()
}

async fn birth_dates(pool: &SqlitePool) -> Vec<(i64, String)> {
    sqlx::query_as("SELECT Id, DateOfBirth FROM User ORDER BY Id")
        .fetch_all(pool)
        .await
        .expect("select users")
}

#[tokio::test]
async fn test_generate_commits_expected_row_counts() {
    let (dir, pool, fixture_path) = setup("counts").await;
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let summary = generate(
        &pool,
        &common::shipped_schema_dir(),
        &options(&fixture_path, 3, 4),
        &mut rng,
    )
    .await
    .expect("generation should succeed");

    assert_eq!(summary.accounts, 3);
    assert_eq!(summary.users, 3);
    assert_eq!(summary.documents, 12);
    assert_eq!(
        counts(&pool).await,
        vec![
            ("Account", 3),
            ("Document", 12),
            ("User", 3),
            ("OAuthIntegration", 0)
        ]
    );

    let accounts = db::list_accounts(&pool).await.unwrap();
    let names: Vec<_> = accounts.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Account0", "Account1", "Account2"]);

    common::cleanup(pool, dir).await;
}

#[tokio::test]
async fn test_document_length_matches_fixture_size() {
    let (dir, pool, fixture_path) = setup("lengths").await;
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    generate(
        &pool,
        &common::shipped_schema_dir(),
        &options(&fixture_path, 2, 3),
        &mut rng,
    )
    .await
    .unwrap();

    let fixture_len = std::fs::metadata(&fixture_path).unwrap().len() as i64;
    for account_id in ["0", "1"] {
        let documents = db::list_documents(&pool, account_id).await.unwrap();
        assert_eq!(documents.len(), 3);
        for document in documents {
            assert_eq!(document.length, fixture_len);
            assert_eq!(PathBuf::from(&document.file_path), fixture_path);
            assert!(Path::new(&document.file_path).is_absolute());
        }
    }

    common::cleanup(pool, dir).await;
}

#[tokio::test]
async fn test_document_ids_are_global_across_accounts() {
    let (dir, pool, fixture_path) = setup("ids").await;
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    generate(
        &pool,
        &common::shipped_schema_dir(),
        &options(&fixture_path, 3, 4),
        &mut rng,
    )
    .await
    .unwrap();

    let second = db::list_documents(&pool, "1").await.unwrap();
    let ids: Vec<i64> = second.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![4, 5, 6, 7]);

    let names: Vec<&str> = second.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Document1-0.txt", "Document1-1.txt", "Document1-2.txt", "Document1-3.txt"]
    );

    let all_ids: Vec<i64> = sqlx::query_scalar("SELECT Id FROM Document ORDER BY rowid")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(all_ids, (0..12).collect::<Vec<_>>());

    common::cleanup(pool, dir).await;
}

#[tokio::test]
async fn test_users_follow_accounts_with_fixed_password() {
    let (dir, pool, fixture_path) = setup("users").await;
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    generate(
        &pool,
        &common::shipped_schema_dir(),
        &options(&fixture_path, 5, 0),
        &mut rng,
    )
    .await
    .unwrap();

    let users: Vec<(i64, String, String, i64, String, String)> = sqlx::query_as(
        "SELECT Id, FirstName, LastName, AccountId, Username, Password FROM User ORDER BY Id",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert_eq!(users.len(), 5);
    for (i, (id, first, last, account_id, username, password)) in users.into_iter().enumerate() {
        let i = i as i64;
        assert_eq!(id, i);
        assert_eq!(account_id, i);
        assert_eq!(first, format!("FName{i}"));
        assert_eq!(last, format!("LName{i}"));
        assert_eq!(username, format!("UserName-{i}"));
        assert_eq!(password, FIXTURE_PASSWORD_HASH);
        assert_eq!(password.len(), 32);
    }

    let floor = NaiveDate::from_ymd_opt(1985, 1, 1).unwrap();
    for (_, date) in birth_dates(&pool).await {
        let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d").expect("YYYY-MM-DD");
        assert!(date >= floor && date < today(), "{date} out of range");
    }

    common::cleanup(pool, dir).await;
}

#[tokio::test]
async fn test_same_seed_produces_same_birth_dates() {
    let (dir_a, pool_a, fixture_a) = setup("seed_a").await;
    let (dir_b, pool_b, fixture_b) = setup("seed_b").await;

    let mut rng_a = ChaCha8Rng::seed_from_u64(99);
    let mut rng_b = ChaCha8Rng::seed_from_u64(99);
    let schema = common::shipped_schema_dir();

    generate(&pool_a, &schema, &options(&fixture_a, 10, 1), &mut rng_a)
        .await
        .unwrap();
    generate(&pool_b, &schema, &options(&fixture_b, 10, 1), &mut rng_b)
        .await
        .unwrap();

    assert_eq!(birth_dates(&pool_a).await, birth_dates(&pool_b).await);

    common::cleanup(pool_a, dir_a).await;
    common::cleanup(pool_b, dir_b).await;
}

#[tokio::test]
async fn test_zero_counts_leave_schema_only_store() {
    let (dir, pool, fixture_path) = setup("zero").await;
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let summary = generate(
        &pool,
        &common::shipped_schema_dir(),
        &options(&fixture_path, 0, 10),
        &mut rng,
    )
    .await
    .unwrap();

    assert_eq!(summary.documents, 0);
    assert_eq!(
        common::table_names(&pool).await,
        vec!["Account", "Document", "OAuthIntegration", "User"]
    );
    assert!(counts(&pool).await.iter().all(|(_, rows)| *rows == 0));

    common::cleanup(pool, dir).await;
}

#[tokio::test]
async fn test_zero_documents_still_creates_accounts_and_users() {
    let (dir, pool, fixture_path) = setup("zero_docs").await;
    let mut rng = ChaCha8Rng::seed_from_u64(6);

    generate(
        &pool,
        &common::shipped_schema_dir(),
        &options(&fixture_path, 2, 0),
        &mut rng,
    )
    .await
    .unwrap();

    assert_eq!(
        counts(&pool).await,
        vec![
            ("Account", 2),
            ("Document", 0),
            ("User", 2),
            ("OAuthIntegration", 0)
        ]
    );

    common::cleanup(pool, dir).await;
}

#[tokio::test]
async fn test_insert_failure_midway_rolls_back_every_row() {
    let (dir, pool, fixture_path) = setup("rollback").await;

    // 테이블을 먼저 커밋해 두면 롤백 후에도 행 수를 셀 수 있습니다.
    let mut conn = pool.acquire().await.unwrap();
    smartvault::services::schema::load_and_apply(&mut *conn, &common::shipped_schema_dir())
        .await
        .unwrap();
    drop(conn);

    let schema_dir = common::schema_dir_with(&dir, &[("ZZ_FailOnAccount50.json", FAIL_ON_ACCOUNT_50)]);
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let result = generate(&pool, &schema_dir, &options(&fixture_path, 100, 2), &mut rng).await;

    assert!(matches!(result, Err(AppError::Database(_))), "{result:?}");
    assert_eq!(
        counts(&pool).await,
        vec![
            ("Account", 0),
            ("Document", 0),
            ("User", 0),
            ("OAuthIntegration", 0)
        ]
    );

    let triggers: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'trigger'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(triggers, 0);

    common::cleanup(pool, dir).await;
}

#[tokio::test]
async fn test_missing_fixture_rolls_back_schema_too() {
    let dir = common::temp_dir("no_fixture");
    let pool = common::setup_store(&dir).await;
    let mut rng = ChaCha8Rng::seed_from_u64(8);

    let result = generate(
        &pool,
        &common::shipped_schema_dir(),
        &options(&dir.join("missing.txt"), 2, 2),
        &mut rng,
    )
    .await;

    assert!(matches!(result, Err(AppError::Io(_))), "{result:?}");
    assert!(common::table_names(&pool).await.is_empty());

    common::cleanup(pool, dir).await;
}

#[tokio::test]
async fn test_malformed_descriptor_aborts_generation() {
    let (dir, pool, fixture_path) = setup("bad_descriptor").await;
    let schema_dir = common::schema_dir_with(&dir, &[("Broken.json", "{ \"Script\": ")]);
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    let result = generate(&pool, &schema_dir, &options(&fixture_path, 2, 2), &mut rng).await;

    assert!(matches!(result, Err(AppError::Descriptor { .. })), "{result:?}");
    assert!(common::table_names(&pool).await.is_empty());

    common::cleanup(pool, dir).await;
}

#[tokio::test]
async fn test_generate_command_keeps_existing_fixture_file() {
    let dir = common::temp_dir("keep_fixture");
    let contract = common::write_file(
        &dir.join("contract.txt"),
        "Signed lease for the Smith Property, 40 pages",
    );
    let before = std::fs::read(&contract).unwrap();

    let config = Config {
        database_path: dir.join("store").join("smartvault.sqlite"),
        schema_dir: common::shipped_schema_dir(),
        fixture_path: contract.clone(),
        account_count: 2,
        documents_per_account: 2,
    };
    commands::generate::run(&config).await.expect("generate command");

    assert_eq!(std::fs::read(&contract).unwrap(), before);

    let pool = db::open_existing(&config.database_path).await.unwrap();
    for document in db::list_documents(&pool, "1").await.unwrap() {
        assert_eq!(document.length, before.len() as i64);
        assert_eq!(PathBuf::from(&document.file_path), contract);
    }

    common::cleanup(pool, dir).await;
}

#[tokio::test]
async fn test_missing_fixture_file_gets_default_content() {
    let dir = common::temp_dir("default_fixture");
    let path = dir.join("nested").join("TestDoc.txt");

    let written = fixture::ensure_fixture(&path).await.unwrap();

    assert!(written.is_absolute());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), fixture::fixture_content());

    std::fs::remove_dir_all(dir).ok();
}
