use clap::Parser;
use tracing::debug;

use lunchpick::adapter::inbound::cli::command::{Cli, Commands};
use lunchpick::adapter::inbound::cli::output::{self, OutputConfig};
use lunchpick::adapter::inbound::cli::{add, edit, gate, genres, list, pick, remove};
use lunchpick::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};
use lunchpick::adapter::outbound::sqlite::SqliteRestaurantStore;
use lunchpick::config::Config;
use lunchpick::error::{Error, Result};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    let config = match Config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            output::error(&format!("failed to load config: {e}"));
            std::process::exit(2);
        }
    };
    config.logging.init();

    if let Err(e) = run(&cli, &config) {
        match e {
            Error::NoCandidates | Error::NoActiveCandidates => output::warning(&e.to_string()),
            _ => output::error(&e.to_string()),
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    // The gate runs before any storage access.
    gate::check(config.gate_secret().as_deref())?;

    let db_path = config.database_path(cli.db.as_deref());
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    debug!(path = %db_path.display(), "opening database");

    let pool = create_pool(&db_path.to_string_lossy())?;
    run_migrations(&pool)?;
    let store = SqliteRestaurantStore::new(pool);

    match &cli.command {
        Commands::Pick(args) => pick::execute(&store, &args.to_filters()),
        Commands::List(args) => list::execute(&store, args.all, &args.filters.to_filters()),
        Commands::Add(args) => add::execute(&store, &args.name, &args.genre, &args.tags),
        Commands::Edit(args) => edit::execute(
            &store,
            args.id,
            &args.name,
            &args.genre,
            &args.tags,
            !args.inactive,
        ),
        Commands::Remove(args) => remove::execute(&store, args.id),
        Commands::Genres => genres::execute(&store),
    }
}
