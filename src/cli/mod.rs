//! CLI module - Command-line interface for omero-admin
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::constants::ROOT_USER_ID;

/// omero-admin - OMERO server administration
#[derive(Parser)]
#[command(name = "omero-admin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default search path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Properties file with omero.db.version and omero.db.patch
    #[arg(long, global = true)]
    pub properties: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Database tools
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },

    /// Create default config file
    Init,
}

#[derive(Subcommand)]
pub enum DbCommands {
    /// Print the SQL to set an experimenter's password
    Password(PasswordArgs),

    /// Write a SQL script that creates the database
    Script(ScriptArgs),
}

#[derive(Args, Debug, Clone)]
pub struct PasswordArgs {
    /// Experimenter whose password is updated
    #[arg(long, default_value_t = ROOT_USER_ID)]
    pub user_id: i64,

    /// Hash without the per-user salt
    #[arg(long)]
    pub no_salt: bool,

    /// Password to hash; prompted for when omitted
    pub password: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ScriptArgs {
    /// Output file for the script
    #[arg(short, long)]
    pub file: PathBuf,

    /// Hash the root password without the per-user salt
    #[arg(long)]
    pub no_salt: bool,

    /// Schema version; prompted for when omitted
    pub version: Option<String>,

    /// Schema patch; prompted for when omitted
    pub patch: Option<String>,

    /// Root password; prompted for when omitted
    pub password: Option<String>,
}

pub use commands::*;
