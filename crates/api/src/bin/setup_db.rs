//! One-shot database setup: schema, legacy upgrades, seeds and the
//! bootstrap admin, followed by a row-count summary.

use anyhow::Context;
use schoolsite_api::bootstrap::{self, AdminBootstrap};
use schoolsite_api::telemetry;
use schoolsite_db::{schema, DbConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init("info");

    let pool = schoolsite_db::create_pool(&DbConfig::from_env())
        .await
        .context("failed to connect to database")?;

    let report = bootstrap::run(&pool, &AdminBootstrap::from_env())
        .await
        .context("database setup failed")?;

    println!("Database setup complete");
    if report.src_column_widened {
        println!("  gallery_images.src widened to TEXT");
    }
    if report.legacy_upgrades > 0 {
        println!("  legacy columns upgraded: {}", report.legacy_upgrades);
    }
    println!("  seed rows inserted: {}", report.seed_rows_inserted);
    for (table, count) in schema::table_counts(&pool).await? {
        println!("  {table}: {count}");
    }

    pool.close().await;
    Ok(())
}
