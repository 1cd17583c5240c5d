use anyhow::{anyhow, Result};
use enrollai_faq_bot::config::{self, Config};
use enrollai_faq_bot::database::connection::{DatabaseManager, FaqPool};
use enrollai_faq_bot::database::models::FaqEntry;
use std::env;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize basic logging for the migration
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("migrate");

    match command {
        "migrate" | "up" => run_migrations().await,
        "check" => check_database().await,
        "seed" => match args.get(2) {
            Some(path) => seed_database(Path::new(path)).await,
            None => Err(anyhow!("seed requires a path to a JSON file")),
        },
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            print_help();
            std::process::exit(1);
        }
    }
}

async fn connect() -> Result<DatabaseManager> {
    config::load_env_files();
    let config = Config::from_env()?;

    println!("📊 Database URL: {}", config::mask_url(&config.database_url));

    DatabaseManager::new(&config.database_url)
        .await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))
}

async fn run_migrations() -> Result<()> {
    println!("🔧 EnroLLAI FAQ Bot - Database Migration Tool");
    println!("=============================================");

    let db_manager = connect().await?;

    println!("🚀 Running database migrations...");

    match db_manager.run_migrations().await {
        Ok(_) => {
            println!("✅ Migrations completed successfully!");
        }
        Err(e) => {
            eprintln!("❌ Migration failed: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn check_database() -> Result<()> {
    println!("🔍 Checking database connection and schema...");

    let db_manager = connect().await?;

    match check_tables(&db_manager).await {
        Ok(tables) => {
            println!("✅ Database connection successful!");
            println!("📋 Found tables:");
            for table in tables {
                println!("  • {table}");
            }
        }
        Err(e) => {
            println!("⚠️  Database check failed: {e}");
            println!("💡 Try running 'migrate up' to create the schema");
            return Ok(());
        }
    }

    match FaqEntry::count(&db_manager.pool).await {
        Ok(count) => println!("📚 FAQ entries: {count}"),
        Err(e) => println!("⚠️  Could not count FAQ entries: {e}"),
    }

    Ok(())
}

async fn seed_database(path: &Path) -> Result<()> {
    println!("🌱 Seeding FAQ entries from {}", path.display());

    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))?;
    let entries: Vec<FaqEntry> = serde_json::from_str(&raw)?;

    let db_manager = connect().await?;
    db_manager.run_migrations().await?;

    for entry in &entries {
        entry.upsert(&db_manager.pool).await?;
    }

    println!("✅ Seeded {} FAQ entries", entries.len());
    Ok(())
}

async fn check_tables(db_manager: &DatabaseManager) -> Result<Vec<String>> {
    let tables = match &db_manager.pool {
        FaqPool::Sqlite(pool) => {
            sqlx::query_scalar::<_, String>("SELECT name FROM sqlite_master WHERE type='table'")
                .fetch_all(pool)
                .await?
        }
        FaqPool::Postgres(pool) => {
            sqlx::query_scalar::<_, String>(
                "SELECT table_name::TEXT FROM information_schema.tables WHERE table_schema = 'public'",
            )
            .fetch_all(pool)
            .await?
        }
    };

    Ok(tables)
}

fn print_help() {
    println!("🎓 EnroLLAI FAQ Bot - Database Migration Tool");
    println!();
    println!("USAGE:");
    println!("    migrate [COMMAND]");
    println!();
    println!("COMMANDS:");
    println!("    migrate, up    Run database migrations (default)");
    println!("    check          Check database connection and schema");
    println!("    seed <FILE>    Insert or update FAQ entries from a JSON array");
    println!("    help           Show this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    DATABASE_URL   Database connection string (default: {})", config::DEFAULT_DATABASE_URL);
    println!("    DB_NAME, DB_USER, DB_PASSWORD, DB_HOST, DB_PORT");
    println!("                   PostgreSQL parameters used when DATABASE_URL is unset");
    println!();
    println!("EXAMPLES:");
    println!("    migrate                       # Run migrations");
    println!("    migrate check                 # Check database status");
    println!("    migrate seed seeds/faq.json   # Load the sample FAQ");
    println!();
}
