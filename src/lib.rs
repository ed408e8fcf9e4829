pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod password;
pub mod prompt;
pub mod schema;
pub mod sql;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, DbCommands, DbContext, cmd_db_password, cmd_db_script};
pub use config::Config;
pub use error::DbError;
use prompt::TerminalPrompter;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().or_else(Config::find_path);
    let config = match &config_path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::default(),
    };
    config.validate()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match &config_path {
        Some(path) => info!("Loaded config from: {}", path.display()),
        None => info!("No config file found, using defaults"),
    }

    match cli.command {
        Commands::Db { command } => {
            let mut prompter = TerminalPrompter;
            match command {
                DbCommands::Password(args) => {
                    let stdout = std::io::stdout();
                    cmd_db_password(&args, &mut prompter, &mut stdout.lock())
                }
                DbCommands::Script(args) => {
                    let ctx = DbContext::from_config(&config, cli.properties.as_deref())?;
                    debug!(file = %args.file.display(), "Generating database script");
                    let stdout = std::io::stdout();
                    cmd_db_script(&ctx, &args, &mut prompter, &mut stdout.lock())
                }
            }
        }

        Commands::Init => {
            if Config::create_default_if_missing()? {
                println!("✓ Config file created. Edit config.toml and run again.");
            } else {
                println!("config.toml already exists.");
            }
            Ok(())
        }
    }
}
