use crate::{db, users};
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, Set};

/// Fresh in-memory database with the schema applied.
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = db::connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::test]
async fn insert_assigns_sequential_ids() -> Result<()> {
    let db = setup_test_db().await?;

    let a = users::ActiveModel { id: NotSet, name: Set("A".into()), email: Set("a@x".into()) }
        .insert(&db)
        .await?;
    let b = users::ActiveModel { id: NotSet, name: Set("B".into()), email: Set("b@x".into()) }
        .insert(&db)
        .await?;

    assert_eq!(a.id, 1);
    assert_eq!(b.id, 2);

    let found = users::Entity::find_by_id(a.id).one(&db).await?;
    assert_eq!(found, Some(a));
    Ok(())
}

#[tokio::test]
async fn duplicate_email_is_accepted() -> Result<()> {
    let db = setup_test_db().await?;
    for _ in 0..2 {
        users::ActiveModel { id: NotSet, name: Set("Same".into()), email: Set("same@x".into()) }
            .insert(&db)
            .await?;
    }
    let all = users::Entity::find().all(&db).await?;
    assert_eq!(all.len(), 2);
    Ok(())
}

#[tokio::test]
async fn migration_down_drops_table() -> Result<()> {
    let db = setup_test_db().await?;
    migration::Migrator::down(&db, None).await?;
    assert!(users::Entity::find().all(&db).await.is_err());
    Ok(())
}

/// Postgres connectivity; skipped unless a database is provided.
#[tokio::test]
async fn postgres_connect_when_available() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return Ok(());
    }
    let db = db::connect().await?;
    migration::Migrator::up(&db, None).await?;
    users::Entity::find().all(&db).await?;
    Ok(())
}
