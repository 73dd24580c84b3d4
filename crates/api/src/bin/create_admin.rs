//! Provision an admin account.
//!
//! The password is only ever read from `ADMIN_PASSWORD`, never from the
//! command line.

use anyhow::{bail, Context};
use clap::Parser;
use schoolsite_api::bootstrap::{provision_admin, Provisioned};
use schoolsite_api::telemetry;
use schoolsite_db::DbConfig;

#[derive(Parser, Debug)]
#[command(about = "Create an admin account, or rehash a legacy one, from ADMIN_PASSWORD")]
struct Args {
    /// Login email for the new admin.
    #[arg(long, env = "ADMIN_EMAIL", default_value = "admin@school.local")]
    email: String,

    /// Display name for the new admin.
    #[arg(long, env = "ADMIN_NAME", default_value = "Admin User")]
    name: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init("info");

    let args = Args::parse();
    let password = match std::env::var("ADMIN_PASSWORD") {
        Ok(p) if !p.is_empty() => p,
        _ => bail!("ADMIN_PASSWORD must be set"),
    };

    let pool = schoolsite_db::create_pool(&DbConfig::from_env())
        .await
        .context("failed to connect to database")?;

    let outcome = provision_admin(&pool, &args.email, &args.name, &password)
        .await
        .context("failed to create admin")?;

    match outcome {
        Provisioned::Created(profile) => {
            println!("Admin created: {} (id {})", profile.email, profile.id);
        }
        Provisioned::AlreadyExists(profile) => {
            println!("Admin already exists: {} (id {})", profile.email, profile.id);
        }
        Provisioned::Rehashed(profile) => {
            println!(
                "Admin {} (id {}) had a legacy password hash; replaced with ADMIN_PASSWORD",
                profile.email, profile.id
            );
        }
    }

    pool.close().await;
    Ok(())
}
