use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info, warn};

use crate::cli::ScriptArgs;
use crate::config::Config;
use crate::constants::{ROOT_USER_ID, properties, sql as sql_files};
use crate::error::DbError;
use crate::password::{SaltMode, hash_password};
use crate::prompt::{Prompter, ask_for_password};
use crate::schema::{Properties, SchemaVersion};
use crate::sql::SetupScript;

/// What an installation supports: its schema and, optionally, the SQL for it.
#[derive(Debug, Clone)]
pub struct DbContext {
    pub supported: SchemaVersion,
    pub sql_dir: Option<PathBuf>,
    pub dialect: String,
}

impl DbContext {
    pub fn from_config(config: &Config, properties_path: Option<&Path>) -> anyhow::Result<Self> {
        let path = properties_path.map_or_else(|| config.db.properties_path(), Path::to_path_buf);
        let props = Properties::load(&path)?;
        let supported = SchemaVersion::from_properties(&props)
            .with_context(|| format!("Invalid properties file: {}", path.display()))?;

        info!(schema = %supported, "Supported database schema");

        Ok(Self {
            supported,
            sql_dir: config.db.sql_dir(),
            dialect: config.db.dialect.clone(),
        })
    }

    /// Checks that `schema` can be installed, returning its SQL directory if one is configured.
    pub fn check(&self, schema: &SchemaVersion) -> Result<Option<PathBuf>, DbError> {
        if *schema != self.supported {
            return Err(DbError::InvalidVersion {
                version: schema.version.clone(),
                patch: schema.patch.clone(),
            });
        }

        let Some(sql_dir) = &self.sql_dir else {
            return Ok(None);
        };

        let dir = schema.sql_directory(sql_dir, &self.dialect);
        if !dir.is_dir() {
            return Err(DbError::MissingSchemaDir(dir));
        }
        Ok(Some(dir))
    }

    fn read_section(&self, dir: &Path, suffix: &str) -> Result<Option<String>, DbError> {
        let path = dir.join(format!("{}{suffix}", self.dialect));
        if !path.exists() {
            warn!("No schema SQL at {}", path.display());
            return Ok(None);
        }
        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| DbError::io(path, e))
    }
}

/// Asks for version and patch unless both were given.
///
/// An empty argument means the supported value. When asked, the prompt
/// offers the given or supported value and an empty answer accepts it.
fn resolve_schema(
    ctx: &DbContext,
    args: &ScriptArgs,
    prompter: &mut dyn Prompter,
) -> Result<SchemaVersion, DbError> {
    let or_default = |given: Option<&String>, default: &str| {
        given
            .filter(|v| !v.is_empty())
            .map_or_else(|| default.to_string(), String::clone)
    };

    let version = or_default(args.version.as_ref(), &ctx.supported.version);
    let patch = or_default(args.patch.as_ref(), &ctx.supported.patch);

    if args.version.is_some() && args.patch.is_some() {
        return Ok(SchemaVersion::new(version, patch));
    }

    let mut ask = |key: &str, default: String| -> Result<String, DbError> {
        let answer = prompter.input(&format!("Please enter {key} [{default}]: "))?;
        let answer = answer.trim();
        Ok(if answer.is_empty() {
            default
        } else {
            answer.to_string()
        })
    };

    let version = ask(properties::DB_VERSION, version)?;
    let patch = ask(properties::DB_PATCH, patch)?;
    Ok(SchemaVersion::new(version, patch))
}

pub fn cmd_db_script(
    ctx: &DbContext,
    args: &ScriptArgs,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let schema = resolve_schema(ctx, args, prompter)?;
    let schema_dir = ctx.check(&schema)?;
    debug!(%schema, dir = ?schema_dir, "Schema accepted");

    let (header, footer) = match &schema_dir {
        Some(dir) => (
            ctx.read_section(dir, sql_files::HEADER_SUFFIX)?,
            ctx.read_section(dir, sql_files::FOOTER_SUFFIX)?,
        ),
        None => (None, None),
    };

    let password = match &args.password {
        Some(password) if !password.is_empty() => password.clone(),
        _ => ask_for_password(prompter, ROOT_USER_ID)?,
    };
    let mode = SaltMode::from_no_salt(args.no_salt);

    let script = SetupScript {
        schema: &schema,
        generated_at: chrono::Local::now().format("%a %b %e %H:%M:%S %Y").to_string(),
        output_name: args.file.display().to_string(),
        header,
        footer,
        root_password_hash: hash_password(&password, mode, ROOT_USER_ID),
    };

    writeln!(out, "Saving to {}", args.file.display())?;
    write_script(&args.file, &script.render())?;
    info!(path = %args.file.display(), %schema, "Database script written");
    Ok(())
}

fn write_script(path: &Path, content: &str) -> Result<(), DbError> {
    if let Err(e) = std::fs::write(path, content) {
        let _ = std::fs::remove_file(path);
        return Err(DbError::io(path, e));
    }
    Ok(())
}
