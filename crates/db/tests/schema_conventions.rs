//! Schema checks that keep the migrations consistent with the guard logic.

use sqlx::PgPool;

const TABLES: [&str; 4] = ["areas", "sectors", "routes", "comments"];

/// Every catalog table has a bigint id and a timestamptz `added_date`.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tables_have_bigint_ids_and_added_date(pool: PgPool) {
    for table in TABLES {
        let columns: Vec<(String, String)> = sqlx::query_as(
            "SELECT column_name, data_type
             FROM information_schema.columns
             WHERE table_schema = 'public'
               AND table_name = $1
               AND column_name IN ('id', 'added_date')
             ORDER BY column_name",
        )
        .bind(table)
        .fetch_all(&pool)
        .await
        .unwrap();

        assert_eq!(
            columns,
            vec![
                ("added_date".to_string(), "timestamp with time zone".to_string()),
                ("id".to_string(), "bigint".to_string()),
            ],
            "unexpected id/added_date columns on {table}"
        );
    }
}

/// Text columns are TEXT with CHECK constraints, never VARCHAR.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_no_varchar_columns(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, column_name
         FROM information_schema.columns
         WHERE table_schema = 'public'
           AND data_type = 'character varying'
           AND table_name != '_sqlx_migrations'",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(rows.is_empty(), "Found VARCHAR columns: {rows:?}");
}

/// Every reference column is indexed; the guard counts children by them.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reference_columns_are_indexed(pool: PgPool) {
    let fk_columns: Vec<(String, String)> = sqlx::query_as(
        "SELECT DISTINCT tc.table_name, kcu.column_name
         FROM information_schema.table_constraints tc
         JOIN information_schema.key_column_usage kcu
             ON tc.constraint_name = kcu.constraint_name
             AND tc.table_schema = kcu.table_schema
         WHERE tc.constraint_type = 'FOREIGN KEY'
           AND tc.table_schema = 'public'",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert_eq!(fk_columns.len(), 4);

    for (table, column) in &fk_columns {
        let (indexed,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM pg_indexes
                WHERE schemaname = 'public'
                  AND tablename = $1
                  AND indexdef LIKE '%(' || $2 || ')%'
            )",
        )
        .bind(table)
        .bind(column)
        .fetch_one(&pool)
        .await
        .unwrap();

        assert!(indexed, "reference column {table}.{column} has no index");
    }
}

/// Parents restrict deletes; only comments follow their route.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_foreign_key_delete_rules(pool: PgPool) {
    let mut rules: Vec<(String, String)> = sqlx::query_as(
        "SELECT constraint_name::text, delete_rule::text
         FROM information_schema.referential_constraints
         WHERE constraint_schema = 'public'",
    )
    .fetch_all(&pool)
    .await
    .unwrap();
    rules.sort();

    let expected: Vec<(String, String)> = [
        ("fk_comments_route", "CASCADE"),
        ("fk_routes_area", "RESTRICT"),
        ("fk_routes_sector", "RESTRICT"),
        ("fk_sectors_area", "RESTRICT"),
    ]
    .iter()
    .map(|(name, rule)| (name.to_string(), rule.to_string()))
    .collect();

    assert_eq!(rules, expected);
}
