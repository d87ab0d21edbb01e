// src/main.rs
//
// film-library command line entry point

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use film_library::application::{dispatch, AppState};
use film_library::config::Config;
use film_library::db::{
    create_connection_pool, get_connection, get_database_stats, initialize_database,
    verify_database_integrity,
};
use film_library::domain::Credentials;

#[derive(Parser, Debug)]
#[command(name = "film-library", version, about = "Movie and actor library backed by SQLite")]
struct Cli {
    /// Database file, overrides FILM_LIBRARY_DATABASE.
    #[arg(long, value_name = "PATH", global = true)]
    database: Option<PathBuf>,

    /// Caller identity for protected routes.
    #[arg(long, value_name = "USERNAME", global = true, requires = "password")]
    username: Option<String>,

    #[arg(long, value_name = "PASSWORD", global = true, requires = "username")]
    password: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create or upgrade the schema and check the database.
    Init,
    /// Print database size and row counts as JSON.
    Stats,
    /// Give an existing user the admin role.
    Promote {
        #[arg(value_name = "USER_ID")]
        user_id: i64,
    },
    /// Run one route and print its JSON envelope.
    Call {
        #[arg(value_name = "ROUTE")]
        route: String,
        #[arg(value_name = "BODY", default_value = "{}")]
        body: String,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            log::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    // 1. CONFIGURATION
    let mut config = Config::from_env().context("invalid configuration")?;
    if let Some(path) = cli.database {
        config = config.with_database_path(path);
    }
    log::info!("using database {}", config.database_path.display());

    // 2. INFRASTRUCTURE
    let pool = Arc::new(create_connection_pool(&config).context("failed to open database")?);
    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn).context("failed to initialize schema")?;
    }

    // 3. REPOSITORIES + SERVICES
    let state = AppState::from_pool(pool.clone());

    // 4. COMMAND
    match cli.command {
        Commands::Init => {
            let conn = get_connection(&pool)?;
            verify_database_integrity(&conn).context("integrity check failed")?;
            log::info!("database ready");
            Ok(ExitCode::SUCCESS)
        }

        Commands::Stats => {
            let conn = get_connection(&pool)?;
            let stats = get_database_stats(&conn)?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
            Ok(ExitCode::SUCCESS)
        }

        Commands::Promote { user_id } => {
            state
                .user_service
                .grant_admin(user_id)
                .with_context(|| format!("failed to promote user {}", user_id))?;
            log::info!("user {} is now an admin", user_id);
            Ok(ExitCode::SUCCESS)
        }

        Commands::Call { route, body } => {
            let caller = match (cli.username, cli.password) {
                (Some(username), Some(password)) => Some(Credentials::new(username, password)),
                (None, None) => None,
                _ => bail!("--username and --password must be given together"),
            };

            let response = dispatch(&state, &route, &body, caller.as_ref());
            println!("{}", serde_json::to_string(&response)?);

            Ok(if response.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
