#![cfg(feature = "pg-tests")]

use intranet_access::{ModuleId, RoleClass};
use portal::config::PostgresConfig;
use portal::store::DirectoryStore;
use portal::store::postgres::PostgresStore;
use serial_test::serial;

async fn pg_store() -> Option<PostgresStore> {
    let url = match std::env::var("ICA_PORTAL_TEST_POSTGRES_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!("skipping postgres tests: ICA_PORTAL_TEST_POSTGRES_URL not set");
            return None;
        }
    };
    let store = PostgresStore::connect(&PostgresConfig {
        url,
        max_connections: 2,
        connect_timeout_ms: 2_000,
        acquire_timeout_ms: 2_000,
    })
    .await
    .expect("connect");
    sqlx::query("TRUNCATE users, modules")
        .execute(store.pool())
        .await
        .expect("truncate");
    Some(store)
}

async fn seed(store: &PostgresStore) {
    sqlx::query(
        "INSERT INTO modules (module_id, short_name, name, sidebar_html) VALUES \
         (132, 'compliance', 'Compliance', '<ul><li>Forms</li></ul>'), \
         (190, 'hr', 'Human Resources', NULL)",
    )
    .execute(store.pool())
    .await
    .expect("insert modules");
    sqlx::query(
        "INSERT INTO users (user_id, class, module, secondary_modules, admin_modules) VALUES \
         ('jdoe', 1, 132, '190', ''), \
         ('broken', 2, 132, '12x', '')",
    )
    .execute(store.pool())
    .await
    .expect("insert users");
}

#[tokio::test]
#[serial]
async fn postgres_finds_users_and_modules() {
    let Some(store) = pg_store().await else {
        return;
    };
    seed(&store).await;

    store.health_check().await.expect("health");
    assert!(store.is_durable());
    assert_eq!(store.backend_name(), "postgres");

    let user = store.find_user("jdoe").await.expect("lookup").expect("user");
    assert_eq!(user.role_class, RoleClass::Administrator);
    assert_eq!(user.module, ModuleId::new(132));
    assert!(user.secondary_modules.contains(ModuleId::new(190)));
    assert!(store.find_user("nobody").await.expect("lookup").is_none());
    let upper = store.find_user("JDOE").await.expect("lookup").expect("user");
    assert_eq!(upper.user_id, "jdoe");

    let module = store
        .find_module(ModuleId::new(132))
        .await
        .expect("lookup")
        .expect("module");
    assert_eq!(module.sidebar(), Some("<ul><li>Forms</li></ul>"));
    let hr = store
        .find_module_by_short_name("hr")
        .await
        .expect("lookup")
        .expect("module");
    assert_eq!(hr.module_id, ModuleId::new(190));
}

#[tokio::test]
#[serial]
async fn postgres_reports_malformed_rows() {
    let Some(store) = pg_store().await else {
        return;
    };
    seed(&store).await;
    assert!(store.find_user("broken").await.is_err());
}
