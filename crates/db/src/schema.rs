//! Idempotent schema bootstrap, seed data and read-only inspection.
//!
//! [`initialize`] runs on one pooled connection, which goes back to the pool
//! when the function returns (including on error). The steps are:
//!
//! 1. `CREATE TABLE IF NOT EXISTS` for all five tables.
//! 2. Widen a legacy `gallery_images.src VARCHAR(n)` column to `TEXT` so
//!    inline `data:` URIs fit.
//! 3. Bring tables created by an older deployment in line with the
//!    models: `SERIAL` ids become `BIGINT`, `TIMESTAMP` columns become
//!    non-null `TIMESTAMPTZ` (stored values are read as UTC) and the inline
//!    email unique constraint is renamed to `uq_admin_users_email`.
//! 4. Insert seed rows, skipping any whose title already exists.
//!
//! None of this is wrapped in a transaction. It must run once, before the
//! server starts accepting requests.

use schoolsite_core::status;
use sqlx::{PgConnection, PgPool};

/// Every table owned by this crate, in creation order.
pub const TABLES: [&str; 5] = [
    "events",
    "gallery_images",
    "news_articles",
    "admin_users",
    "contact_messages",
];

const CREATE_EVENTS: &str = "
    CREATE TABLE IF NOT EXISTS events (
        id BIGSERIAL PRIMARY KEY,
        title VARCHAR(255) NOT NULL,
        date DATE NOT NULL,
        description TEXT,
        category VARCHAR(100),
        status VARCHAR(20) DEFAULT 'upcoming',
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )";

const CREATE_GALLERY_IMAGES: &str = "
    CREATE TABLE IF NOT EXISTS gallery_images (
        id BIGSERIAL PRIMARY KEY,
        title VARCHAR(255) NOT NULL,
        category VARCHAR(100),
        src TEXT NOT NULL,
        alt VARCHAR(255),
        upload_date DATE DEFAULT CURRENT_DATE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )";

const CREATE_NEWS_ARTICLES: &str = "
    CREATE TABLE IF NOT EXISTS news_articles (
        id BIGSERIAL PRIMARY KEY,
        title VARCHAR(255) NOT NULL,
        content TEXT NOT NULL,
        publish_date DATE DEFAULT CURRENT_DATE,
        status VARCHAR(20) DEFAULT 'draft',
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )";

const CREATE_ADMIN_USERS: &str = "
    CREATE TABLE IF NOT EXISTS admin_users (
        id BIGSERIAL PRIMARY KEY,
        email VARCHAR(255) NOT NULL,
        password_hash VARCHAR(255) NOT NULL,
        name VARCHAR(255),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        CONSTRAINT uq_admin_users_email UNIQUE (email)
    )";

const CREATE_CONTACT_MESSAGES: &str = "
    CREATE TABLE IF NOT EXISTS contact_messages (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL,
        phone VARCHAR(20),
        subject VARCHAR(255),
        message TEXT NOT NULL,
        status VARCHAR(20) DEFAULT 'unread',
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )";

struct SeedEvent {
    title: &'static str,
    date: &'static str,
    description: &'static str,
    category: &'static str,
    status: &'static str,
}

struct SeedImage {
    title: &'static str,
    category: &'static str,
    src: &'static str,
    alt: &'static str,
}

struct SeedArticle {
    title: &'static str,
    content: &'static str,
    publish_date: &'static str,
    status: &'static str,
}

const SEED_EVENTS: &[SeedEvent] = &[
    SeedEvent {
        title: "Annual Sports Day",
        date: "2024-03-15",
        description: "Annual sports competition for all students",
        category: "Sports",
        status: status::EVENT_UPCOMING,
    },
    SeedEvent {
        title: "Science Exhibition",
        date: "2024-02-20",
        description: "Students showcase their science projects",
        category: "Academic",
        status: status::EVENT_COMPLETED,
    },
    SeedEvent {
        title: "Cultural Festival",
        date: "2024-04-10",
        description: "Celebration of arts, music, dance, and cultural diversity",
        category: "Cultural",
        status: status::EVENT_UPCOMING,
    },
];

const SEED_IMAGES: &[SeedImage] = &[
    SeedImage {
        title: "Sports Day Celebration",
        category: "School Events",
        src: "/images/kids.jpg",
        alt: "Students during sports day",
    },
    SeedImage {
        title: "Classroom Activity",
        category: "Classroom Activities",
        src: "/images/teacher-1.jpg",
        alt: "Students in classroom",
    },
    SeedImage {
        title: "School Infrastructure",
        category: "Infrastructure",
        src: "/images/infra.jpg",
        alt: "School building and facilities",
    },
    SeedImage {
        title: "Students in Library",
        category: "Classroom Activities",
        src: "/images/teacher-2.jpg",
        alt: "Students studying in library",
    },
];

const SEED_ARTICLES: &[SeedArticle] = &[
    SeedArticle {
        title: "School Achieves 100% Board Results",
        content: "Our school has achieved excellent results in the recent board examinations \
                  with 100% pass rate and outstanding performance by our students.",
        publish_date: "2024-01-20",
        status: status::NEWS_PUBLISHED,
    },
    SeedArticle {
        title: "New Computer Lab Inauguration",
        content: "We are excited to announce the inauguration of our new state-of-the-art \
                  computer laboratory equipped with latest technology and software.",
        publish_date: "2024-01-25",
        status: status::NEWS_PUBLISHED,
    },
    SeedArticle {
        title: "Annual Sports Meet Success",
        content: "The annual sports meet was a grand success with participation from all \
                  students and excellent performances in various sports events.",
        publish_date: "2024-01-30",
        status: status::NEWS_PUBLISHED,
    },
];

/// What a call to [`initialize`] changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitReport {
    /// `gallery_images.src` was widened from `VARCHAR` to `TEXT`.
    pub src_column_widened: bool,
    /// Legacy columns and constraints converted in place.
    pub legacy_upgrades: u64,
    /// Seed rows inserted across all tables (0 on a repeat run).
    pub seed_rows_inserted: u64,
}

/// Create missing tables, upgrade legacy columns and load seed data.
pub async fn initialize(pool: &PgPool) -> Result<InitReport, sqlx::Error> {
    let mut conn = pool.acquire().await?;

    tracing::info!("Initializing database tables");
    create_tables(&mut conn).await?;

    let src_column_widened = widen_gallery_src(&mut conn).await?;
    let legacy_upgrades = upgrade_legacy_columns(&mut conn).await?
        + rename_legacy_email_constraint(&mut conn).await? as u64;
    let seed_rows_inserted = seed(&mut conn).await?;

    tracing::info!(
        src_column_widened,
        legacy_upgrades,
        seed_rows_inserted,
        "Database initialized"
    );

    Ok(InitReport {
        src_column_widened,
        legacy_upgrades,
        seed_rows_inserted,
    })
}

async fn create_tables(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    for ddl in [
        CREATE_EVENTS,
        CREATE_GALLERY_IMAGES,
        CREATE_NEWS_ARTICLES,
        CREATE_ADMIN_USERS,
        CREATE_CONTACT_MESSAGES,
    ] {
        sqlx::query(ddl).execute(&mut *conn).await?;
    }
    Ok(())
}

/// Widen `gallery_images.src` to `TEXT` if an older deployment created it as
/// a bounded `VARCHAR`. Returns `true` if the column was altered.
async fn widen_gallery_src(conn: &mut PgConnection) -> Result<bool, sqlx::Error> {
    let column: Option<(String, Option<i32>)> = sqlx::query_as(
        "SELECT data_type::text, character_maximum_length::int4
         FROM information_schema.columns
         WHERE table_schema = current_schema()
           AND table_name = 'gallery_images'
           AND column_name = 'src'",
    )
    .fetch_optional(&mut *conn)
    .await?;

    match column {
        Some((data_type, max_length)) if data_type == "character varying" => {
            tracing::info!(?max_length, "Widening gallery_images.src to TEXT");
            sqlx::query("ALTER TABLE gallery_images ALTER COLUMN src TYPE TEXT")
                .execute(&mut *conn)
                .await?;
            Ok(true)
        }
        Some(_) => Ok(false),
        None => {
            tracing::warn!("gallery_images.src column not found; skipping upgrade");
            Ok(false)
        }
    }
}

/// Convert `INTEGER` ids and `TIMESTAMP` columns on any of [`TABLES`] to the
/// types the models decode. Returns the number of columns altered.
async fn upgrade_legacy_columns(conn: &mut PgConnection) -> Result<u64, sqlx::Error> {
    let columns: Vec<(String, String, String)> = sqlx::query_as(
        "SELECT table_name::text, column_name::text, data_type::text
         FROM information_schema.columns
         WHERE table_schema = current_schema()
           AND table_name::text = ANY($1)
           AND ((column_name = 'id' AND data_type = 'integer')
                OR data_type = 'timestamp without time zone')
         ORDER BY table_name, ordinal_position",
    )
    .bind(&TABLES[..])
    .fetch_all(&mut *conn)
    .await?;

    for (table, column, data_type) in &columns {
        tracing::info!(%table, %column, %data_type, "Upgrading legacy column");

        if data_type == "integer" {
            sqlx::query(&format!(
                r#"ALTER TABLE "{table}" ALTER COLUMN "{column}" TYPE BIGINT"#
            ))
            .execute(&mut *conn)
            .await?;

            let sequence: Option<String> =
                sqlx::query_scalar("SELECT pg_get_serial_sequence($1, $2)")
                    .bind(table)
                    .bind(column)
                    .fetch_one(&mut *conn)
                    .await?;
            if let Some(sequence) = sequence {
                sqlx::query(&format!("ALTER SEQUENCE {sequence} AS BIGINT"))
                    .execute(&mut *conn)
                    .await?;
            }
        } else {
            sqlx::query(&format!(
                r#"ALTER TABLE "{table}"
                   ALTER COLUMN "{column}" DROP DEFAULT,
                   ALTER COLUMN "{column}" TYPE TIMESTAMPTZ USING "{column}" AT TIME ZONE 'UTC',
                   ALTER COLUMN "{column}" SET DEFAULT NOW()"#
            ))
            .execute(&mut *conn)
            .await?;
            sqlx::query(&format!(
                r#"UPDATE "{table}" SET "{column}" = NOW() WHERE "{column}" IS NULL"#
            ))
            .execute(&mut *conn)
            .await?;
            sqlx::query(&format!(
                r#"ALTER TABLE "{table}" ALTER COLUMN "{column}" SET NOT NULL"#
            ))
            .execute(&mut *conn)
            .await?;
        }
    }

    Ok(columns.len() as u64)
}

/// Older deployments declared `email UNIQUE` inline, which Postgres names
/// `admin_users_email_key`. Duplicate-email errors are classified by the
/// `uq_` prefix, so give it the same name a fresh table gets.
async fn rename_legacy_email_constraint(conn: &mut PgConnection) -> Result<bool, sqlx::Error> {
    let legacy: bool = sqlx::query_scalar(
        "SELECT EXISTS (
             SELECT 1 FROM pg_constraint
             WHERE conname = 'admin_users_email_key'
               AND conrelid = to_regclass('admin_users')
         )",
    )
    .fetch_one(&mut *conn)
    .await?;

    if legacy {
        tracing::info!("Renaming admin_users_email_key to uq_admin_users_email");
        sqlx::query(
            "ALTER TABLE admin_users
             RENAME CONSTRAINT admin_users_email_key TO uq_admin_users_email",
        )
        .execute(&mut *conn)
        .await?;
    }
    Ok(legacy)
}

async fn seed(conn: &mut PgConnection) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;

    for e in SEED_EVENTS {
        inserted += sqlx::query(
            "INSERT INTO events (title, date, description, category, status)
             SELECT $1, $2::date, $3, $4, $5
             WHERE NOT EXISTS (SELECT 1 FROM events WHERE title = $1)",
        )
        .bind(e.title)
        .bind(e.date)
        .bind(e.description)
        .bind(e.category)
        .bind(e.status)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    }

    for img in SEED_IMAGES {
        inserted += sqlx::query(
            "INSERT INTO gallery_images (title, category, src, alt)
             SELECT $1, $2, $3, $4
             WHERE NOT EXISTS (SELECT 1 FROM gallery_images WHERE title = $1)",
        )
        .bind(img.title)
        .bind(img.category)
        .bind(img.src)
        .bind(img.alt)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    }

    for a in SEED_ARTICLES {
        inserted += sqlx::query(
            "INSERT INTO news_articles (title, content, publish_date, status)
             SELECT $1, $2, $3::date, $4
             WHERE NOT EXISTS (SELECT 1 FROM news_articles WHERE title = $1)",
        )
        .bind(a.title)
        .bind(a.content)
        .bind(a.publish_date)
        .bind(a.status)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    }

    Ok(inserted)
}

// ---------------------------------------------------------------------------
// Inspection
// ---------------------------------------------------------------------------

/// Names of all tables in the current schema, alphabetically.
pub async fn list_tables(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT table_name::text
         FROM information_schema.tables
         WHERE table_schema = current_schema()
         ORDER BY table_name",
    )
    .fetch_all(pool)
    .await
}

/// Row count for each of [`TABLES`].
pub async fn table_counts(pool: &PgPool) -> Result<Vec<(&'static str, i64)>, sqlx::Error> {
    let mut counts = Vec::with_capacity(TABLES.len());
    for table in TABLES {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await?;
        counts.push((table, count));
    }
    Ok(counts)
}

/// Current database server time, formatted as RFC 3339.
pub async fn server_time(pool: &PgPool) -> Result<String, sqlx::Error> {
    let now: chrono::DateTime<chrono::Utc> = sqlx::query_scalar("SELECT NOW()")
        .fetch_one(pool)
        .await?;
    Ok(now.to_rfc3339())
}
