use crate::entities::{form_submissions, model_images, models, users};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema, Statement};
use std::env;
use std::time::Duration;
use tracing::info;

pub async fn setup_database() -> anyhow::Result<DatabaseConnection> {
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    info!("📂 Database: {}", db_url);

    let mut opt = ConnectOptions::new(&db_url);
    opt.max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(30))
        .acquire_timeout(Duration::from_secs(30))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt).await?;

    info!("✅ Database connected successfully");

    run_migrations(&db).await?;
    crate::infrastructure::seed::seed_admin_user(&db).await?;

    Ok(db)
}

/// Creates the schema from the entity definitions on whichever backend is
/// configured. `models` must exist before `model_images` for the cascade FK.
pub async fn run_migrations(db: &DatabaseConnection) -> anyhow::Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let stmts = vec![
        schema
            .create_table_from_entity(users::Entity)
            .if_not_exists()
            .to_owned(),
        schema
            .create_table_from_entity(models::Entity)
            .if_not_exists()
            .to_owned(),
        schema
            .create_table_from_entity(model_images::Entity)
            .if_not_exists()
            .to_owned(),
        schema
            .create_table_from_entity(form_submissions::Entity)
            .if_not_exists()
            .to_owned(),
    ];

    for stmt in stmts {
        let stmt = builder.build(&stmt);
        db.execute(stmt).await?;
    }

    let _ = db
        .execute(Statement::from_string(
            builder,
            "CREATE INDEX IF NOT EXISTS idx_model_images_model_id ON model_images(model_id);"
                .to_string(),
        ))
        .await;

    Ok(())
}
