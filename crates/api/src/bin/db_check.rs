//! Read-only database diagnostics: connectivity, tables, admins, row counts.

use anyhow::Context;
use schoolsite_api::telemetry;
use schoolsite_db::repositories::AdminUserRepo;
use schoolsite_db::{schema, DbConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init("warn");

    let pool = schoolsite_db::create_pool(&DbConfig::from_env())
        .await
        .context("database connection failed")?;

    let now = schema::server_time(&pool).await?;
    println!("Connected. Server time: {now}");

    println!("Tables:");
    for table in schema::list_tables(&pool).await? {
        println!("  - {table}");
    }

    let admins = AdminUserRepo::list_profiles(&pool)
        .await
        .context("failed to list admin users (has setup-db been run?)")?;
    if admins.is_empty() {
        println!("No admin users found");
    } else {
        println!("Admin users:");
        for admin in admins {
            println!("  - {} ({})", admin.name.as_deref().unwrap_or("-"), admin.email);
        }
    }

    println!("Row counts:");
    for (table, count) in schema::table_counts(&pool).await? {
        println!("  {table}: {count}");
    }

    pool.close().await;
    Ok(())
}
